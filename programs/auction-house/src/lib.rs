use anchor_lang::prelude::*;

use instructions::*;

pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("3iB2sA9abdXf79HcLCEhDxwYzS4Nd2xCB1CUQ5yhWmy1");

#[program]
pub mod auction_house {

    use super::*;

    /*
    Admin functions
    */
    pub fn init_auction_ledger(ctx: Context<InitAuctionLedger>) -> Result<()> {
        init_auction_ledger::handler(ctx)
    }

    /*
    Auction functions
    */
    #[allow(clippy::too_many_arguments)]
    pub fn create_auction(
        ctx: Context<CreateAuction>,
        auction_id: u64,
        name: String,
        starting_price: u64,
        starting_currency: Pubkey,
        start_time: u64,
        end_time: u64,
        accepted_currencies: Vec<Pubkey>,
    ) -> Result<()> {
        create_auction::handler(
            ctx,
            auction_id,
            name,
            starting_price,
            starting_currency,
            start_time,
            end_time,
            accepted_currencies,
        )
    }

    pub fn bid(ctx: Context<PlaceBid>, currency: Pubkey, raw_amount: u64) -> Result<()> {
        bid::handler(ctx, currency, raw_amount)
    }

    pub fn end_auction(ctx: Context<EndAuction>) -> Result<()> {
        end_auction::handler(ctx)
    }
}
