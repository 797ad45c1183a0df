use crate::utils::{FixedSizeString, TokenUtil};
use crate::{
    events::AuctionCreated,
    state::{Auction, AuctionLedger},
};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};
use auction_admin::state::PriceFeed;
use shared::{
    check_condition,
    constants::{AUCTION_LEDGER_SEEDS, AUCTION_SEEDS},
    errors::ErrorCode,
};

/// Create an auction and take custody of the asset.
///
/// # Arguments
/// * `system_program` - The system program.
/// * `token_program` - The token program.
/// * `associated_token_program` - The associated token program.
/// * `rent` - The rent sysvar.
/// * `seller` - The asset owner opening the auction (mut, signer).
/// * `auction_ledger` - The id allocator (PDA) (mut, not signer).
/// * `auction` - The auction account (PDA) (init, not signer).
/// * `asset_mint` - The mint of the auctioned asset (not mut, not signer).
/// * `seller_asset_account` - The seller's asset token account (PDA) (mut, not signer).
/// * `escrow_asset_account` - The auction's escrow asset token account (PDA) (init, not signer).
/// * `price_feed` - The price source registered for every accepted currency (not mut, not signer).
#[derive(Accounts)]
#[instruction(auction_id: u64)]
pub struct CreateAuction<'info> {
    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,

    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(mut,
        seeds = [AUCTION_LEDGER_SEEDS],
        bump = auction_ledger.bump,
    )]
    pub auction_ledger: Account<'info, AuctionLedger>,

    #[account(
        init,
        payer = seller,
        space = Auction::SIZE,
        seeds = [AUCTION_SEEDS, auction_id.to_le_bytes().as_ref()],
        bump
    )]
    pub auction: AccountLoader<'info, Auction>,

    #[account()]
    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut,
        associated_token::mint = asset_mint,
        associated_token::authority = seller,
        associated_token::token_program = token_program,
    )]
    pub seller_asset_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = seller,
        associated_token::mint = asset_mint,
        associated_token::authority = auction,
        associated_token::token_program = token_program,
    )]
    pub escrow_asset_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account()]
    pub price_feed: Account<'info, PriceFeed>,
}

impl CreateAuction<'_> {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Auction id is the next sequential id.
    /// * The bid window lies in the future and is well ordered.
    /// * The floor bid is positive and denominated in an accepted currency.
    /// * The asset is a unique digital asset (0 decimals, supply of 1) held by the seller.
    /// * The asset is a supported SPL token (no forbidden extensions).
    #[allow(clippy::too_many_arguments)]
    pub fn validate(
        &self,
        auction_id: u64,
        starting_price: u64,
        starting_currency: &Pubkey,
        start_time: u64,
        end_time: u64,
        accepted_currencies: &[Pubkey],
        current_time: u64,
    ) -> Result<()> {
        check_condition!(
            self.auction_ledger.current_auction_id + 1 == auction_id,
            InvalidAuctionId
        );

        check_condition!(start_time > current_time, InvalidStartTime);
        check_condition!(end_time > start_time, InvalidEndTime);

        check_condition!(starting_price > 0, InvalidStartingPrice);

        check_condition!(
            accepted_currencies.contains(starting_currency),
            StartingCurrencyNotAccepted
        );

        check_condition!(
            self.asset_mint.decimals == 0 && self.asset_mint.supply == 1,
            UnsupportedAsset
        );
        check_condition!(self.seller_asset_account.amount == 1, InsufficientAssetBalance);

        check_condition!(
            TokenUtil::is_supported_spl_token(
                Some(&self.asset_mint.to_account_info()),
                Some(&self.seller_asset_account.to_account_info())
            )?,
            UnsupportedSPLToken
        );

        Ok(())
    }
}

/// Create an auction: lock the asset in escrow, register the accepted
/// currencies in the write-once feed registry and allocate the next id. Fails
/// atomically: if the custody transfer fails, no record is created.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `auction_id` - The id of the auction (must be the next sequential id).
/// * `name` - The auction title (truncated to 64 bytes).
/// * `starting_price` - The floor bid, in raw units of `starting_currency`.
/// * `starting_currency` - The currency the floor bid is denominated in.
/// * `start_time` - Start of the bid window (seconds, must be in the future).
/// * `end_time` - End of the bid window (seconds).
/// * `accepted_currencies` - The accepted payment currencies.
#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<CreateAuction>,
    auction_id: u64,
    name: String,
    starting_price: u64,
    starting_currency: Pubkey,
    start_time: u64,
    end_time: u64,
    accepted_currencies: Vec<Pubkey>,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp as u64;

    ctx.accounts.validate(
        auction_id,
        starting_price,
        &starting_currency,
        start_time,
        end_time,
        &accepted_currencies,
        current_time,
    )?;

    {
        let auction = &mut ctx.accounts.auction.load_init()?;

        auction.bump = ctx.bumps.auction;
        auction.id = auction_id;
        auction.name = FixedSizeString::new(&name);
        auction.seller = ctx.accounts.seller.key();
        auction.asset_mint = ctx.accounts.asset_mint.key();
        auction.starting_price = starting_price;
        auction.starting_currency = starting_currency;
        auction.current_currency = starting_currency;
        auction.current_bid = 0;
        auction.highest_bidder = Pubkey::default();
        auction.start_time = start_time;
        auction.end_time = end_time;
        auction.ended = 0;

        auction.register_feeds(&accepted_currencies, &ctx.accounts.price_feed.key())?;
    }

    ctx.accounts.auction_ledger.current_auction_id = auction_id;

    // take custody of the asset
    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.seller_asset_account.to_account_info(),
                to: ctx.accounts.escrow_asset_account.to_account_info(),
                authority: ctx.accounts.seller.to_account_info(),
                mint: ctx.accounts.asset_mint.to_account_info(),
            },
        ),
        1,
        ctx.accounts.asset_mint.decimals,
    )?;

    emit!(AuctionCreated {
        auction_id,
        name,
        seller: ctx.accounts.seller.key(),
        asset_mint: ctx.accounts.asset_mint.key(),
        starting_price,
        starting_currency,
        start_time,
        end_time,
        accepted_currencies,
        price_feed: ctx.accounts.price_feed.key(),
    });

    Ok(())
}
