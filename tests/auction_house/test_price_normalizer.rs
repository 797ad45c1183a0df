//! Tests for bid normalization into USD magnitudes

#[cfg(test)]
mod tests {

    use crate::fixtures::logger::init_logger;
    use anchor_lang::prelude::Pubkey;
    use auction_admin::state::PriceFeed;
    use auction_house::utils::PriceNormalizer;
    use log::info;
    use shared::constants::{NATIVE_CURRENCY, NATIVE_DECIMALS};
    use shared::errors::ErrorCode::*;
    use shared::utils::Decimal;

    fn setup_feed(answer: i64, decimals: u8) -> PriceFeed {
        let mut feed = PriceFeed::default();
        feed.authority = Pubkey::new_unique();
        feed.latest_answer = answer;
        feed.decimals = decimals;
        feed
    }

    #[test]
    fn test_currency_decimals() {
        // native precision is fixed, whatever mint data is around
        assert_eq!(
            PriceNormalizer::currency_decimals(&NATIVE_CURRENCY, None).unwrap(),
            NATIVE_DECIMALS
        );
        assert_eq!(
            PriceNormalizer::currency_decimals(&NATIVE_CURRENCY, Some(6)).unwrap(),
            NATIVE_DECIMALS
        );

        let token_currency = Pubkey::new_unique();
        assert_eq!(
            PriceNormalizer::currency_decimals(&token_currency, Some(6)).unwrap(),
            6
        );
        assert_eq!(
            PriceNormalizer::currency_decimals(&token_currency, None).err(),
            Some(MissingCurrencyMint.into())
        );
    }

    #[test]
    fn test_rejects_non_positive_answers() {
        let stale = setup_feed(0, 8);
        assert_eq!(
            PriceNormalizer::normalize(&stale, 1_000, 6).err(),
            Some(InvalidPriceFeed.into())
        );

        let broken = setup_feed(-5, 8);
        assert_eq!(
            PriceNormalizer::normalize(&broken, 1_000, 6).err(),
            Some(InvalidPriceFeed.into())
        );
    }

    #[test]
    fn test_normalize_at_one_dollar() {
        init_logger();

        // 1.00 USD reported with 8 feed decimals, currency with 6 decimals:
        // the USD magnitude equals the raw amount
        let feed = setup_feed(100_000_000, 8);

        let starting_value = PriceNormalizer::normalize(&feed, 1_000, 6).unwrap();
        assert_eq!(starting_value, Decimal::from_raw(1_000u64));

        info!("starting value normalized to {:?}", starting_value);

        // a lower bid must compare below the floor, a higher one above
        let low_bid = PriceNormalizer::normalize(&feed, 900, 6).unwrap();
        assert!(low_bid < starting_value);

        let high_bid = PriceNormalizer::normalize(&feed, 1_100, 6).unwrap();
        assert!(high_bid > starting_value);

        // equal value is not strictly greater: ties never advance an auction
        let tie_bid = PriceNormalizer::normalize(&feed, 1_000, 6).unwrap();
        assert!(!(tie_bid > starting_value));
        assert_eq!(tie_bid, starting_value);
    }

    #[test]
    fn test_normalize_widening_exponent() {
        // 5.00 USD with 4 feed decimals on a 0-decimal currency: the exponent
        // goes negative and the product is widened instead of divided
        let feed = setup_feed(50_000, 4);

        let value = PriceNormalizer::normalize(&feed, 3, 0).unwrap();
        assert_eq!(value, Decimal::from_raw(15_000_000u64));
    }

    #[test]
    fn test_normalize_truncates_toward_zero() {
        let feed = setup_feed(45, 8);

        // 123 * 45 / 10^10 is far below one USD unit and truncates to zero
        let value = PriceNormalizer::normalize(&feed, 123, 8).unwrap();
        assert!(value.is_zero());
    }

    #[test]
    fn test_normalize_large_amounts() {
        // 0.10 USD with 8 feed decimals on a 9-decimal currency
        let feed = setup_feed(10_000_000, 8);

        let first = PriceNormalizer::normalize(&feed, 2_000_000_000_000_000, 9).unwrap();
        assert_eq!(first, Decimal::from_raw(200_000_000_000u64));

        let second = PriceNormalizer::normalize(&feed, 3_000_000_000_000_000, 9).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_cross_currency_comparison() {
        // 2.00 USD on a 6-decimal currency vs 0.50 USD on a 9-decimal currency
        let feed_x = setup_feed(200_000_000, 8);
        let feed_y = setup_feed(50_000_000, 8);

        // 10 units of X (2 USD each) = 20 USD; 50 units of Y (0.5 USD each) = 25 USD
        let value_x = PriceNormalizer::normalize(&feed_x, 10_000_000, 6).unwrap();
        let value_y = PriceNormalizer::normalize(&feed_y, 50_000_000_000, 9).unwrap();

        assert_eq!(value_x, Decimal::from_raw(20_000_000u64));
        assert_eq!(value_y, Decimal::from_raw(25_000_000u64));
        assert!(value_y > value_x);
    }
}
