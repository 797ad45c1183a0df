pub mod fee_config;
pub mod price_feed;

pub use fee_config::*;
pub use price_feed::*;
