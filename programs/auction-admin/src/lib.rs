use anchor_lang::prelude::*;

use instructions::*;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("8P2iw77xDz7pUW8ecbyswG4SGDbrj313cpSr9CA6YRaD");

#[program]
pub mod auction_admin {

    use super::*;

    pub fn set_fee_config(
        ctx: Context<SetFeeConfig>,
        fee_recipient: Option<Pubkey>,
        fee_bps: Option<u64>,
    ) -> Result<()> {
        set_fee_config::handler(ctx, fee_recipient, fee_bps)
    }

    pub fn init_price_feed(
        ctx: Context<InitPriceFeed>,
        currency: Pubkey,
        decimals: u8,
    ) -> Result<()> {
        init_price_feed::handler(ctx, currency, decimals)
    }

    pub fn update_price_feed(ctx: Context<UpdatePriceFeed>, answer: i64) -> Result<()> {
        update_price_feed::handler(ctx, answer)
    }

    pub fn withdraw_fees(
        ctx: Context<WithdrawFees>,
        currency: Pubkey,
        raw_amount: u64,
    ) -> Result<()> {
        withdraw_fees::handler(ctx, currency, raw_amount)
    }
}
