use anchor_lang::prelude::*;

/// Fee config tracks the settlement fee applied to every auction and the
/// principal allowed to receive withdrawals. Fees taken at settlement
/// accumulate in this account (native) or in its per-currency vault token
/// accounts, until withdrawn by the protocol admin.
///
/// PDA Seeds ["fee_config"]
#[account]
#[derive(Default, InitSpace)]
pub struct FeeConfig {
    pub bump: u8,

    /// The recipient of withdrawn fees (the owner of the destination accounts,
    /// not the destination accounts themselves)
    pub fee_recipient: Pubkey,

    /// Settlement fee rate in basis points (over 10_000)
    pub fee_bps: u64,
}

impl FeeConfig {
    pub const SIZE: usize = 8 + FeeConfig::INIT_SPACE;
}

/// A price source quoting one currency against USD. The auction engine reads
/// the latest answer when normalizing bids; answers are stored as reported,
/// non-positive readings included, and rejected at use time.
///
/// PDA Seeds ["price_feed", feed authority, currency]
#[account]
#[derive(Default, InitSpace)]
pub struct PriceFeed {
    pub bump: u8,

    /// The only signer allowed to publish new answers
    pub authority: Pubkey,

    /// The currency this feed quotes (default pubkey for the native currency)
    pub currency: Pubkey,

    /// Decimal precision of the answers
    pub decimals: u8,

    /// Latest reported price of one whole currency unit, in USD
    pub latest_answer: i64,

    /// Timestamp of the latest answer (seconds)
    pub updated_at: u64,
}

impl PriceFeed {
    pub const SIZE: usize = 8 + PriceFeed::INIT_SPACE;
}
