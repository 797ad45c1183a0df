use crate::state::Auction;
use crate::utils::structs::AuctionStatus;
use crate::utils::CurrencyFeed;
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{AUCTION_SEEDS, MAX_ACCEPTED_CURRENCIES};
use shared::errors::ErrorCode;

impl Auction {
    /// Validate the auction PDA.
    ///
    /// # Arguments
    /// * `auction_pubkey` - The pubkey of the auction.
    pub fn validate_auction(&self, auction_pubkey: &Pubkey) -> Result<()> {
        let auction_id = self.id.to_le_bytes();

        check_condition!(
            (*auction_pubkey, self.bump)
                == Pubkey::find_program_address(
                    &[AUCTION_SEEDS, auction_id.as_ref()],
                    &crate::id()
                ),
            InvalidPda
        );
        Ok(())
    }

    /// Bind every accepted currency to the supplied price source. Called
    /// exactly once from create, before the record is observable; no update or
    /// removal path exists afterwards.
    ///
    /// # Arguments
    /// * `currencies` - The accepted payment currencies.
    /// * `feed` - The price source registered for all of them.
    pub fn register_feeds(&mut self, currencies: &[Pubkey], feed: &Pubkey) -> Result<()> {
        check_condition!(!currencies.is_empty(), EmptyCurrencyList);
        check_condition!(
            currencies.len() <= MAX_ACCEPTED_CURRENCIES,
            TooManyCurrencies
        );

        for (index, currency) in currencies.iter().enumerate() {
            check_condition!(!currencies[..index].contains(currency), DuplicateCurrency);

            self.accepted_currencies[index] = CurrencyFeed {
                currency: *currency,
                feed: *feed,
            };
        }

        Ok(())
    }

    /// The price source registered for a currency, if this auction accepts it.
    ///
    /// # Arguments
    /// * `currency` - The currency to look up.
    pub fn feed_for(&self, currency: &Pubkey) -> Option<Pubkey> {
        self.accepted_currencies
            .iter()
            .find(|entry| entry.currency == *currency && entry.feed != Pubkey::default())
            .map(|entry| entry.feed)
    }

    /// Derive the lifecycle status from the terminal flag and the clock.
    ///
    /// # Arguments
    /// * `current_time` - The current on-chain time (seconds).
    pub fn try_get_status(&self, current_time: u64) -> AuctionStatus {
        if self.ended != 0 {
            AuctionStatus::Closed
        } else if current_time < self.start_time {
            AuctionStatus::Scheduled
        } else if current_time <= self.end_time {
            AuctionStatus::Open
        } else {
            AuctionStatus::Expired
        }
    }

    /// A bid is admitted only inside the window, for a positive amount.
    ///
    /// # Arguments
    /// * `current_time` - The current on-chain time (seconds).
    /// * `raw_amount` - The bid magnitude, in raw currency units.
    pub fn validate_bid(&self, current_time: u64, raw_amount: u64) -> Result<()> {
        match self.try_get_status(current_time) {
            AuctionStatus::Scheduled => err!(ErrorCode::AuctionNotStarted),
            AuctionStatus::Expired => err!(ErrorCode::AuctionExpired),
            AuctionStatus::Closed => err!(ErrorCode::AuctionAlreadyEnded),
            AuctionStatus::Open => {
                check_condition!(raw_amount > 0, InvalidBidAmount);

                Ok(())
            }
        }
    }

    /// Settlement is admissible from end_time on, exactly once.
    ///
    /// # Arguments
    /// * `current_time` - The current on-chain time (seconds).
    pub fn validate_end(&self, current_time: u64) -> Result<()> {
        check_condition!(self.ended == 0, AuctionAlreadyEnded);

        check_condition!(current_time >= self.end_time, AuctionNotOver);

        Ok(())
    }

    pub fn has_bid(&self) -> bool {
        self.current_bid > 0
    }

    /// The (currency, amount) pair an incoming bid must beat: the current high
    /// bid, or the floor when no bid has landed yet.
    pub fn current_high(&self) -> (Pubkey, u64) {
        if self.has_bid() {
            (self.current_currency, self.current_bid)
        } else {
            (self.starting_currency, self.starting_price)
        }
    }

    /// Advance the high bid. The caller has already moved the funds.
    ///
    /// # Arguments
    /// * `bidder` - The new highest bidder.
    /// * `currency` - The currency the bid is denominated in.
    /// * `raw_amount` - The bid magnitude, in raw currency units.
    pub fn record_bid(&mut self, bidder: &Pubkey, currency: &Pubkey, raw_amount: u64) {
        self.highest_bidder = *bidder;
        self.current_currency = *currency;
        self.current_bid = raw_amount;
    }

    /// Flip the terminal flag. Set before any settlement transfer.
    pub fn settle(&mut self) {
        self.ended = 1;
    }
}
