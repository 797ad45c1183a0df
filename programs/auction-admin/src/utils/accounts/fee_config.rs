use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{FEE_DENOMINATOR, MAX_FEE_BPS};
use shared::errors::ErrorCode;

use crate::state::FeeConfig;

impl FeeConfig {
    /// Initialize the config on first use, update the provided fields afterwards.
    ///
    /// # Arguments
    /// * `fee_config` - The fee config account.
    /// * `context_bump` - The bump of the fee config PDA.
    /// * `fee_recipient` - The recipient of withdrawn fees (required on first init).
    /// * `fee_bps` - The settlement fee rate in basis points.
    pub fn init_or_update_fee_config(
        fee_config: &mut Account<FeeConfig>,
        context_bump: u8,
        fee_recipient: Option<Pubkey>,
        fee_bps: Option<u64>,
    ) -> Result<()> {
        let account_info_fee_config = fee_config.to_account_info();

        let data = account_info_fee_config.try_borrow_mut_data()?;
        let mut disc_bytes = [0u8; 8];
        disc_bytes.copy_from_slice(&data[..8]);

        let discriminator = u64::from_le_bytes(disc_bytes);

        drop(data);

        if discriminator == 0 {
            // Not initialized yet
            fee_config.bump = context_bump;
            fee_config.fee_recipient = fee_recipient.ok_or(ErrorCode::InvalidFeeRecipient)?;
            fee_config.fee_bps = fee_bps.unwrap_or(MAX_FEE_BPS);
        } else {
            check_condition!(fee_config.bump == context_bump, InvalidBump);

            if let Some(fee_recipient) = fee_recipient {
                fee_config.fee_recipient = fee_recipient;
            }

            if let Some(fee_bps) = fee_bps {
                fee_config.fee_bps = fee_bps;
            }
        }

        Ok(())
    }

    /// The settlement fee for a gross amount: floor(gross * fee_bps / 10_000).
    ///
    /// With fee_bps capped at MAX_FEE_BPS the fee is always strictly below a
    /// non-zero gross amount; settlement re-asserts that anyway.
    ///
    /// # Arguments
    /// * `raw_gross_amount` - The gross proceeds, in raw currency units.
    pub fn calc_fee(&self, raw_gross_amount: u64) -> Result<u64> {
        let fee = (raw_gross_amount as u128)
            .checked_mul(self.fee_bps as u128)
            .ok_or(ErrorCode::MathOverflow)?
            .checked_div(FEE_DENOMINATOR)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(fee as u64)
    }
}
