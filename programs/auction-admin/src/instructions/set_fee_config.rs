use crate::events::FeeConfigSet;
use crate::state::FeeConfig;
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::common::ADMIN;
use shared::constants::{FEE_CONFIG_SEEDS, MAX_FEE_BPS};
use shared::errors::ErrorCode;

#[derive(Accounts)]
pub struct SetFeeConfig<'info> {
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = FeeConfig::SIZE,
        seeds = [FEE_CONFIG_SEEDS],
        bump
    )]
    pub fee_config: Account<'info, FeeConfig>,
}

impl SetFeeConfig<'_> {
    pub fn validate(&self, fee_bps: &Option<u64>) -> Result<()> {
        check_condition!(self.admin.key() == ADMIN, Unauthorized);

        if let Some(fee_bps) = fee_bps {
            check_condition!(*fee_bps <= MAX_FEE_BPS, InvalidFeeNumerator);
        }

        Ok(())
    }
}

pub fn handler(
    ctx: Context<SetFeeConfig>,
    fee_recipient: Option<Pubkey>,
    fee_bps: Option<u64>,
) -> Result<()> {
    ctx.accounts.validate(&fee_bps)?;

    let fee_config = &mut ctx.accounts.fee_config;

    FeeConfig::init_or_update_fee_config(
        fee_config,
        ctx.bumps.fee_config,
        fee_recipient,
        fee_bps,
    )?;

    emit!(FeeConfigSet {
        fee_recipient: fee_config.fee_recipient,
        fee_bps: fee_config.fee_bps,
    });

    Ok(())
}
