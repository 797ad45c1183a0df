//! Structs for the auction house program. Often used within an account.
pub mod auction_status;
pub mod currency_feed;
pub mod fixed_size_string;

pub use auction_status::*;
pub use currency_feed::*;
pub use fixed_size_string::*;
