use crate::events::PriceFeedUpdated;
use crate::state::PriceFeed;
use anchor_lang::prelude::*;
use shared::constants::PRICE_FEED_SEEDS;

#[derive(Accounts)]
pub struct UpdatePriceFeed<'info> {
    #[account(mut)]
    pub feed_authority: Signer<'info>,

    #[account(mut,
        seeds = [PRICE_FEED_SEEDS, feed_authority.key().as_ref(), price_feed.currency.as_ref()],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,
}

impl UpdatePriceFeed<'_> {
    pub fn validate(&self) -> Result<()> {
        self.price_feed
            .validate_authority(&self.feed_authority.key())?;

        Ok(())
    }
}

pub fn handler(ctx: Context<UpdatePriceFeed>, answer: i64) -> Result<()> {
    ctx.accounts.validate()?;

    let current_time = Clock::get()?.unix_timestamp as u64;

    let price_feed = &mut ctx.accounts.price_feed;
    price_feed.record_answer(answer, current_time);

    emit!(PriceFeedUpdated {
        feed: price_feed.key(),
        latest_answer: answer,
        updated_at: current_time,
    });

    Ok(())
}
