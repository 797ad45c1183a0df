use anchor_lang::prelude::*;

/*
Included in build

ADMIN
*/
include!(concat!(env!("OUT_DIR"), "/config.rs"));

/// Sentinel identity for the native currency (SOL).
pub const NATIVE_CURRENCY: Pubkey = Pubkey::new_from_array([0u8; 32]);

/// Lamports carry 9 decimals.
pub const NATIVE_DECIMALS: u8 = 9;

/// All cross-currency comparisons happen in a USD magnitude with 6 decimals.
pub const USD_TARGET_DECIMALS: u32 = 6;

/// Fee rates are expressed in basis points.
pub const FEE_DENOMINATOR: u128 = 10_000;

/// Upper bound on the settlement fee rate (10%).
pub const MAX_FEE_BPS: u64 = 1_000;

/// Maximum number of payment currencies a single auction can accept.
pub const MAX_ACCEPTED_CURRENCIES: usize = 16;
