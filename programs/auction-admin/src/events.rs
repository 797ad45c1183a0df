use anchor_lang::prelude::*;

/// Event emitted when the fee config is set.
///
/// # Arguments
/// * `fee_recipient` - The recipient of withdrawn fees.
/// * `fee_bps` - The settlement fee rate in basis points.
#[event]
pub struct FeeConfigSet {
    pub fee_recipient: Pubkey,

    pub fee_bps: u64,
}

/// Event emitted when a price feed is created.
///
/// # Arguments
/// * `feed` - The feed account.
/// * `authority` - The signer allowed to publish answers.
/// * `currency` - The currency the feed quotes.
/// * `decimals` - Decimal precision of the answers.
#[event]
pub struct PriceFeedInitialized {
    pub feed: Pubkey,

    pub authority: Pubkey,

    pub currency: Pubkey,

    pub decimals: u8,
}

/// Event emitted when a price feed publishes a new answer.
///
/// # Arguments
/// * `feed` - The feed account.
/// * `latest_answer` - The reported price.
/// * `updated_at` - Timestamp of the answer, in seconds.
#[event]
pub struct PriceFeedUpdated {
    pub feed: Pubkey,

    pub latest_answer: i64,

    /// Scaled in seconds
    pub updated_at: u64,
}

/// Event emitted when accumulated fees are withdrawn.
///
/// # Arguments
/// * `currency` - The withdrawn currency.
/// * `raw_amount` - The withdrawn amount, in raw currency units.
/// * `destination` - The account the fees were sent to.
#[event]
pub struct FeesWithdrawn {
    pub currency: Pubkey,

    pub raw_amount: u64,

    pub destination: Pubkey,
}
