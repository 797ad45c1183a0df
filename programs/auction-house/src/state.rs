use anchor_lang::prelude::*;

use crate::utils::{CurrencyFeed, FixedSizeString};
use shared::constants::MAX_ACCEPTED_CURRENCIES;

/// Owns auction id allocation. Ids are sequential, start at 1 and are never
/// reused; the id to record mapping is the auction PDA namespace.
///
/// PDA Seeds ["auction_ledger"]
#[account]
#[derive(Default, InitSpace)]
pub struct AuctionLedger {
    pub bump: u8,

    /// Id of the most recently created auction
    pub current_auction_id: u64,
}

impl AuctionLedger {
    pub const SIZE: usize = 8 + AuctionLedger::INIT_SPACE;
}

/// A single auction. Created once, mutated only by bids (high bid fields) and
/// by settlement (the `ended` flag), never closed: a settled auction stays on
/// chain as an immutable historical record.
///
/// Default pubkey means "not set" for `highest_bidder`; `current_bid > 0`
/// exactly when a bidder is set.
///
/// PDA Seeds ["auction", auction id]
#[account(zero_copy)]
pub struct Auction {
    pub id: u64,

    /// Floor bid, in raw units of `starting_currency`
    pub starting_price: u64,

    /// High bid magnitude, in raw units of `current_currency`; zero until the first bid
    pub current_bid: u64,

    /// Scaled in seconds, inclusive
    pub start_time: u64,

    /// Scaled in seconds, inclusive for bids; settlement is admissible from here on
    pub end_time: u64,

    pub seller: Pubkey,

    pub asset_mint: Pubkey,

    /// Currency the floor bid is denominated in
    pub starting_currency: Pubkey,

    /// Currency of the current high bid
    pub current_currency: Pubkey,

    pub highest_bidder: Pubkey,

    pub name: FixedSizeString,

    /// Write-once feed registry, populated at creation. Empty slots carry a
    /// default feed.
    pub accepted_currencies: [CurrencyFeed; MAX_ACCEPTED_CURRENCIES],

    /// Terminal flag, monotonic false to true
    pub ended: u8,

    pub bump: u8,

    pub _padding: [u8; 6],
}

impl Auction {
    pub const SIZE: usize = 8 + std::mem::size_of::<Auction>();
}

impl Default for Auction {
    fn default() -> Self {
        Self {
            id: 0,
            starting_price: 0,
            current_bid: 0,
            start_time: 0,
            end_time: 0,
            seller: Pubkey::default(),
            asset_mint: Pubkey::default(),
            starting_currency: Pubkey::default(),
            current_currency: Pubkey::default(),
            highest_bidder: Pubkey::default(),
            name: FixedSizeString::default(),
            accepted_currencies: [CurrencyFeed::default(); MAX_ACCEPTED_CURRENCIES],
            ended: 0,
            bump: 0,
            _padding: [0u8; 6],
        }
    }
}
