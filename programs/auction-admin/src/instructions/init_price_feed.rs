use crate::events::PriceFeedInitialized;
use crate::state::PriceFeed;
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::PRICE_FEED_SEEDS;
use shared::errors::ErrorCode;

/// Answers with more than 18 decimals serve no purpose and only invite
/// overflow in downstream scaling.
const MAX_FEED_DECIMALS: u8 = 18;

#[derive(Accounts)]
#[instruction(currency: Pubkey)]
pub struct InitPriceFeed<'info> {
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,

    #[account(mut)]
    pub feed_authority: Signer<'info>,

    #[account(
        init,
        payer = feed_authority,
        space = PriceFeed::SIZE,
        seeds = [PRICE_FEED_SEEDS, feed_authority.key().as_ref(), currency.as_ref()],
        bump
    )]
    pub price_feed: Account<'info, PriceFeed>,
}

impl InitPriceFeed<'_> {
    pub fn validate(&self, decimals: u8) -> Result<()> {
        check_condition!(decimals <= MAX_FEED_DECIMALS, InvalidPriceFeed);

        Ok(())
    }
}

pub fn handler(ctx: Context<InitPriceFeed>, currency: Pubkey, decimals: u8) -> Result<()> {
    ctx.accounts.validate(decimals)?;

    let price_feed = &mut ctx.accounts.price_feed;

    price_feed.bump = ctx.bumps.price_feed;
    price_feed.authority = ctx.accounts.feed_authority.key();
    price_feed.currency = currency;
    price_feed.decimals = decimals;
    // Unusable until the first answer lands: consumers reject non-positive readings
    price_feed.latest_answer = 0;
    price_feed.updated_at = 0;

    emit!(PriceFeedInitialized {
        feed: price_feed.key(),
        authority: price_feed.authority,
        currency,
        decimals,
    });

    Ok(())
}
