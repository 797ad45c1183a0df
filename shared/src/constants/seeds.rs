pub const AUCTION_LEDGER_SEEDS: &[u8] = b"auction_ledger";
pub const AUCTION_SEEDS: &[u8] = b"auction";
pub const FEE_CONFIG_SEEDS: &[u8] = b"fee_config";
pub const PRICE_FEED_SEEDS: &[u8] = b"price_feed";
