use crate::state::AuctionLedger;
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::common::ADMIN;
use shared::constants::AUCTION_LEDGER_SEEDS;
use shared::errors::ErrorCode;

#[derive(Accounts)]
pub struct InitAuctionLedger<'info> {
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = AuctionLedger::SIZE,
        seeds = [AUCTION_LEDGER_SEEDS],
        bump
    )]
    pub auction_ledger: Account<'info, AuctionLedger>,
}

impl InitAuctionLedger<'_> {
    pub fn validate(&self) -> Result<()> {
        check_condition!(self.admin.key() == ADMIN, Unauthorized);

        Ok(())
    }
}

pub fn handler(ctx: Context<InitAuctionLedger>) -> Result<()> {
    ctx.accounts.validate()?;

    let auction_ledger = &mut ctx.accounts.auction_ledger;

    auction_ledger.bump = ctx.bumps.auction_ledger;
    auction_ledger.current_auction_id = 0;

    Ok(())
}
