pub mod accounts;
pub mod price_util;
pub mod structs;
pub mod transfer_util;

pub use price_util::*;
pub use structs::*;
pub use transfer_util::*;

pub use shared::utils::TokenUtil;
