pub mod init_auction_ledger;

pub use init_auction_ledger::*;
