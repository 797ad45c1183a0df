use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

/// One accepted payment currency and the price source bound to it at creation.
///
/// A default feed marks an empty slot. Registered entries always carry a real
/// feed, which keeps the native currency (itself the default pubkey)
/// representable as a currency.
#[derive(
    AnchorSerialize,
    AnchorDeserialize,
    Clone,
    Copy,
    Default,
    InitSpace,
    Zeroable,
    Pod,
    PartialEq,
    Debug,
)]
#[repr(C)]
pub struct CurrencyFeed {
    /// The accepted currency (default pubkey for the native currency)
    pub currency: Pubkey,

    /// The price source used to normalize bids in that currency
    pub feed: Pubkey,
}
