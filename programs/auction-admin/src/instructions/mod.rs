pub mod init_price_feed;
pub mod set_fee_config;
pub mod update_price_feed;
pub mod withdraw_fees;

pub use init_price_feed::*;
pub use set_fee_config::*;
pub use update_price_feed::*;
pub use withdraw_fees::*;
