pub mod test_fee_config;
pub mod test_price_feed;
