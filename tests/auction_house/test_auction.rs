//! Tests for the Auction state machine

#[cfg(test)]
mod tests {

    use anchor_lang::prelude::Pubkey;
    use auction_house::state::Auction;
    use auction_house::utils::AuctionStatus;
    use shared::constants::{AUCTION_SEEDS, MAX_ACCEPTED_CURRENCIES, NATIVE_CURRENCY};
    use shared::errors::ErrorCode::*;

    const START_TIME: u64 = 1_000;
    const END_TIME: u64 = 2_000;

    fn setup_auction() -> Auction {
        let mut auction = Auction::default();
        auction.id = 1;
        auction.seller = Pubkey::new_unique();
        auction.asset_mint = Pubkey::new_unique();
        auction.starting_price = 1_000;
        auction.starting_currency = NATIVE_CURRENCY;
        auction.current_currency = NATIVE_CURRENCY;
        auction.start_time = START_TIME;
        auction.end_time = END_TIME;
        auction
    }

    #[test]
    fn test_validate_auction_pda() {
        let mut auction = setup_auction();

        let (auction_pubkey, bump) = Pubkey::find_program_address(
            &[AUCTION_SEEDS, auction.id.to_le_bytes().as_ref()],
            &auction_house::id(),
        );
        auction.bump = bump;

        assert!(auction.validate_auction(&auction_pubkey).is_ok());

        assert_eq!(
            auction.validate_auction(&Pubkey::new_unique()).err(),
            Some(InvalidPda.into())
        );
    }

    #[test]
    fn test_register_feeds() {
        let mut auction = setup_auction();
        let feed = Pubkey::new_unique();
        let token_currency = Pubkey::new_unique();

        assert!(auction
            .register_feeds(&[NATIVE_CURRENCY, token_currency], &feed)
            .is_ok());

        assert_eq!(auction.feed_for(&NATIVE_CURRENCY), Some(feed));
        assert_eq!(auction.feed_for(&token_currency), Some(feed));
        assert_eq!(auction.feed_for(&Pubkey::new_unique()), None);
    }

    #[test]
    fn test_register_feeds_empty_list() {
        let mut auction = setup_auction();

        assert_eq!(
            auction.register_feeds(&[], &Pubkey::new_unique()).err(),
            Some(EmptyCurrencyList.into())
        );
    }

    #[test]
    fn test_register_feeds_duplicate() {
        let mut auction = setup_auction();
        let currency = Pubkey::new_unique();

        assert_eq!(
            auction
                .register_feeds(&[currency, currency], &Pubkey::new_unique())
                .err(),
            Some(DuplicateCurrency.into())
        );
    }

    #[test]
    fn test_register_feeds_too_many() {
        let mut auction = setup_auction();
        let currencies: Vec<Pubkey> = (0..MAX_ACCEPTED_CURRENCIES + 1)
            .map(|_| Pubkey::new_unique())
            .collect();

        assert_eq!(
            auction
                .register_feeds(&currencies, &Pubkey::new_unique())
                .err(),
            Some(TooManyCurrencies.into())
        );
    }

    #[test]
    fn test_feed_lookup_before_registration() {
        // An unregistered auction must not resolve the native currency even
        // though empty slots and the native sentinel share the default pubkey
        let auction = setup_auction();

        assert_eq!(auction.feed_for(&NATIVE_CURRENCY), None);
    }

    #[test]
    fn test_try_get_status() {
        let mut auction = setup_auction();

        assert_eq!(
            auction.try_get_status(START_TIME - 1),
            AuctionStatus::Scheduled
        );
        assert_eq!(auction.try_get_status(START_TIME), AuctionStatus::Open);
        assert_eq!(auction.try_get_status(END_TIME), AuctionStatus::Open);
        assert_eq!(auction.try_get_status(END_TIME + 1), AuctionStatus::Expired);

        auction.settle();
        assert_eq!(auction.try_get_status(START_TIME), AuctionStatus::Closed);
    }

    #[test]
    fn test_validate_bid_window() {
        let mut auction = setup_auction();

        assert_eq!(
            auction.validate_bid(START_TIME - 1, 1_500).err(),
            Some(AuctionNotStarted.into())
        );

        assert!(auction.validate_bid(START_TIME, 1_500).is_ok());
        assert!(auction.validate_bid(END_TIME, 1_500).is_ok());

        assert_eq!(
            auction.validate_bid(END_TIME + 1, 1_500).err(),
            Some(AuctionExpired.into())
        );

        auction.settle();
        assert_eq!(
            auction.validate_bid(START_TIME, 1_500).err(),
            Some(AuctionAlreadyEnded.into())
        );
    }

    #[test]
    fn test_validate_bid_amount() {
        let auction = setup_auction();

        assert_eq!(
            auction.validate_bid(START_TIME, 0).err(),
            Some(InvalidBidAmount.into())
        );
    }

    #[test]
    fn test_validate_end() {
        let mut auction = setup_auction();

        assert_eq!(
            auction.validate_end(END_TIME - 1).err(),
            Some(AuctionNotOver.into())
        );

        // settlement is admissible from end_time on
        assert!(auction.validate_end(END_TIME).is_ok());
        assert!(auction.validate_end(END_TIME + 100).is_ok());

        auction.settle();
        assert_eq!(
            auction.validate_end(END_TIME + 100).err(),
            Some(AuctionAlreadyEnded.into())
        );
    }

    #[test]
    fn test_current_high_and_record_bid() {
        let mut auction = setup_auction();
        let token_currency = Pubkey::new_unique();
        let bidder = Pubkey::new_unique();

        // no bid yet: the floor is the pair to beat
        assert!(!auction.has_bid());
        assert_eq!(auction.current_high(), (NATIVE_CURRENCY, 1_000));
        assert_eq!(auction.highest_bidder, Pubkey::default());

        auction.record_bid(&bidder, &token_currency, 2_000);

        // a positive bid and a set bidder always go together
        assert!(auction.has_bid());
        assert_eq!(auction.current_high(), (token_currency, 2_000));
        assert_eq!(auction.highest_bidder, bidder);

        let outbidder = Pubkey::new_unique();
        auction.record_bid(&outbidder, &NATIVE_CURRENCY, 5_000);

        assert_eq!(auction.current_high(), (NATIVE_CURRENCY, 5_000));
        assert_eq!(auction.highest_bidder, outbidder);
    }

    #[test]
    fn test_settle_is_terminal() {
        let mut auction = setup_auction();

        assert_eq!(auction.ended, 0);
        auction.settle();
        assert_eq!(auction.ended, 1);

        assert_eq!(
            auction.validate_end(END_TIME).err(),
            Some(AuctionAlreadyEnded.into())
        );
    }
}
