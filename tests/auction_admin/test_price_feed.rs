//! Tests for the PriceFeed state

#[cfg(test)]
mod tests {

    use anchor_lang::prelude::Pubkey;
    use auction_admin::state::PriceFeed;
    use shared::errors::ErrorCode::*;

    fn setup_price_feed() -> PriceFeed {
        let mut price_feed = PriceFeed::default();
        price_feed.authority = Pubkey::new_unique();
        price_feed.decimals = 8;
        price_feed
    }

    #[test]
    fn test_validate_authority() {
        let price_feed = setup_price_feed();

        assert!(price_feed.validate_authority(&price_feed.authority).is_ok());

        assert_eq!(
            price_feed.validate_authority(&Pubkey::new_unique()).err(),
            Some(Unauthorized.into())
        );
    }

    #[test]
    fn test_record_answer() {
        let mut price_feed = setup_price_feed();

        price_feed.record_answer(100_000_000, 1_000);
        assert_eq!(price_feed.latest_answer, 100_000_000);
        assert_eq!(price_feed.updated_at, 1_000);

        // non-positive readings are stored as reported; consumers reject them
        price_feed.record_answer(-1, 1_100);
        assert_eq!(price_feed.latest_answer, -1);
        assert_eq!(price_feed.updated_at, 1_100);
    }
}
