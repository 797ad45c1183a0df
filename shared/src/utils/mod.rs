pub mod math_util;
pub mod token_util;

pub use math_util::*;
pub use token_util::*;
