use anchor_lang::prelude::*;
use auction_admin::state::PriceFeed;
use shared::check_condition;
use shared::constants::{NATIVE_CURRENCY, NATIVE_DECIMALS, USD_TARGET_DECIMALS};
use shared::errors::ErrorCode;
use shared::utils::Decimal;

/// Converts currency amounts into a common USD magnitude so that bids in
/// different currencies are comparable.
pub struct PriceNormalizer;

impl PriceNormalizer {
    /// Decimal precision of a currency: fixed for the native currency, the
    /// mint's own declared precision otherwise.
    ///
    /// # Arguments
    /// * `currency` - The currency to resolve.
    /// * `mint_decimals` - The mint's precision, when a mint account was provided.
    pub fn currency_decimals(currency: &Pubkey, mint_decimals: Option<u8>) -> Result<u8> {
        if *currency == NATIVE_CURRENCY {
            return Ok(NATIVE_DECIMALS);
        }

        mint_decimals.ok_or_else(|| error!(ErrorCode::MissingCurrencyMint))
    }

    /// USD magnitude (USD_TARGET_DECIMALS precision) of `raw_amount` units of a
    /// currency:
    ///
    /// `usd = amount * price / 10^(currency_decimals + feed_decimals - target_decimals)`
    ///
    /// Computed over 256 bits, truncating toward zero. A negative exponent
    /// widens instead of narrowing. Fails on a non-positive feed reading, so a
    /// stale or broken oracle can never admit a bid.
    ///
    /// # Arguments
    /// * `feed` - The price source registered for the currency.
    /// * `raw_amount` - The amount, in raw currency units.
    /// * `currency_decimals` - The currency's decimal precision.
    pub fn normalize(feed: &PriceFeed, raw_amount: u64, currency_decimals: u8) -> Result<Decimal> {
        check_condition!(feed.latest_answer > 0, InvalidPriceFeed);

        let scaled_product =
            Decimal::from_raw(raw_amount).mul(&Decimal::from_raw(feed.latest_answer as u64))?;

        let exponent =
            currency_decimals as i32 + feed.decimals as i32 - USD_TARGET_DECIMALS as i32;

        if exponent >= 0 {
            scaled_product.div(&Decimal::pow10(exponent as u32)?)
        } else {
            scaled_product.mul(&Decimal::pow10(exponent.unsigned_abs())?)
        }
    }
}
