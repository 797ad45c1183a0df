use anchor_lang::prelude::*;

/// Event emitted when an auction is created. Carries every immutable field.
///
/// # Arguments
/// * `auction_id` - The id of the auction.
/// * `name` - The auction title.
/// * `seller` - The principal that initiated the auction.
/// * `asset_mint` - The escrowed asset.
/// * `starting_price` - The floor bid, in raw units of `starting_currency`.
/// * `starting_currency` - The currency the floor bid is denominated in.
/// * `start_time` - Start of the bid window, scaled in seconds.
/// * `end_time` - End of the bid window, scaled in seconds.
/// * `accepted_currencies` - The accepted payment currencies.
/// * `price_feed` - The price source registered for them.
#[event]
pub struct AuctionCreated {
    pub auction_id: u64,

    pub name: String,

    pub seller: Pubkey,

    pub asset_mint: Pubkey,

    pub starting_price: u64,

    pub starting_currency: Pubkey,

    /// Scaled in seconds
    pub start_time: u64,

    /// Scaled in seconds
    pub end_time: u64,

    pub accepted_currencies: Vec<Pubkey>,

    pub price_feed: Pubkey,
}

/// Event emitted when a bid is accepted, including the refund of the outbid
/// bidder that happened as part of it.
///
/// # Arguments
/// * `auction_id` - The id of the auction.
/// * `bidder` - The new highest bidder.
/// * `currency` - The currency the bid is denominated in.
/// * `raw_amount` - The bid magnitude, in raw currency units.
/// * `usd_value` - The normalized bid value, in USD target decimals.
/// * `previous_bidder` - The refunded bidder (default pubkey for the first bid).
/// * `refunded_currency` - The currency refunded to the previous bidder.
/// * `refunded_amount` - The refunded amount, in raw currency units.
#[event]
pub struct BidPlaced {
    pub auction_id: u64,

    pub bidder: Pubkey,

    pub currency: Pubkey,

    pub raw_amount: u64,

    /// Scaled in USD target decimals
    pub usd_value: u128,

    pub previous_bidder: Pubkey,

    pub refunded_currency: Pubkey,

    pub refunded_amount: u64,
}

/// Event emitted when an auction is settled.
///
/// # Arguments
/// * `auction_id` - The id of the auction.
/// * `winner` - The winning bidder (default pubkey when no bid landed).
/// * `asset_recipient` - Who received the asset: the winner, or the seller when no bid landed.
/// * `currency` - The currency of the final high bid.
/// * `raw_amount` - The final high bid, in raw currency units.
/// * `fee_amount` - The settlement fee taken, in raw currency units.
/// * `seller_amount` - The proceeds paid to the seller, in raw currency units.
#[event]
pub struct AuctionEnded {
    pub auction_id: u64,

    pub winner: Pubkey,

    pub asset_recipient: Pubkey,

    pub currency: Pubkey,

    pub raw_amount: u64,

    pub fee_amount: u64,

    pub seller_amount: u64,
}
