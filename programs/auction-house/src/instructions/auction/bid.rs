use crate::state::Auction;
use crate::utils::{PriceNormalizer, TokenUtil, TransferUtil};
use crate::events::BidPlaced;
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::{get_associated_token_address_with_program_id, AssociatedToken},
    token_interface::{Mint, TokenAccount, TokenInterface},
};
use auction_admin::state::PriceFeed;
use shared::{
    check_condition,
    constants::{AUCTION_SEEDS, NATIVE_CURRENCY},
    errors::ErrorCode,
};

/// Bid on an auction.
/// Permissionless.
///
/// # Arguments
/// * `system_program` - The system program.
/// * `token_program` - The token program.
/// * `associated_token_program` - The associated token program.
/// * `bidder` - The bidder account (mut, signer).
/// * `auction` - The auction account (PDA) (mut, not signer).
/// * `bid_currency_feed` - The registered price source for the bid currency (not mut, not signer).
/// * `current_currency_feed` - The registered price source for the standing high bid's currency (not mut, not signer).
/// * `bid_currency_mint` - The bid currency mint (not mut, not signer). None for native bids.
/// * `current_currency_mint` - The standing high bid's currency mint (not mut, not signer). None when that currency is native.
/// * `bidder_currency_account` - The bidder's token account for the bid currency (mut, not signer). None for native bids.
/// * `escrow_currency_account` - The auction's escrow token account for the bid currency (mut, not signer). Created if missing. None for native bids.
/// * `previous_bidder` - The outbid bidder to refund (mut, not signer). None for the first bid.
/// * `previous_escrow_currency_account` - The escrow token account holding the outbid funds (mut, not signer). None when that currency is native.
/// * `previous_bidder_currency_account` - The outbid bidder's token account (mut, not signer). Created if missing. None when that currency is native.
#[derive(Accounts)]
pub struct PlaceBid<'info> {
    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    #[account(mut)]
    pub bidder: Signer<'info>,

    #[account(mut)]
    pub auction: AccountLoader<'info, Auction>,

    #[account()]
    pub bid_currency_feed: Account<'info, PriceFeed>,

    #[account()]
    pub current_currency_feed: Account<'info, PriceFeed>,

    #[account()]
    pub bid_currency_mint: Option<Box<InterfaceAccount<'info, Mint>>>,

    #[account()]
    pub current_currency_mint: Option<Box<InterfaceAccount<'info, Mint>>>,

    #[account(mut)]
    pub bidder_currency_account: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    /// CHECK: Created as the auction's associated token account for the bid currency if missing
    #[account(mut)]
    pub escrow_currency_account: Option<UncheckedAccount<'info>>,

    /// CHECK: Validated against the recorded highest bidder
    #[account(mut)]
    pub previous_bidder: Option<UncheckedAccount<'info>>,

    #[account(mut)]
    pub previous_escrow_currency_account: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    /// CHECK: Created as the outbid bidder's associated token account if missing
    #[account(mut)]
    pub previous_bidder_currency_account: Option<UncheckedAccount<'info>>,
}

impl PlaceBid<'_> {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Auction PDA matches its recorded id.
    /// * Both provided feeds are the ones registered for their currencies.
    /// * The currency-specific accounts are the expected mints and associated token accounts.
    /// * The refund accounts match the recorded highest bidder.
    /// * The bid currency is a supported SPL token (no forbidden extensions).
    pub fn validate(&self, auction: &Auction, currency: &Pubkey) -> Result<()> {
        auction.validate_auction(&self.auction.key())?;

        let bid_feed = auction
            .feed_for(currency)
            .ok_or(ErrorCode::UnsupportedCurrency)?;
        check_condition!(
            self.bid_currency_feed.key() == bid_feed,
            InvalidPriceFeedAccount
        );

        let (high_currency, _) = auction.current_high();
        let high_feed = auction
            .feed_for(&high_currency)
            .ok_or(ErrorCode::UnsupportedCurrency)?;
        check_condition!(
            self.current_currency_feed.key() == high_feed,
            InvalidPriceFeedAccount
        );

        if *currency != NATIVE_CURRENCY {
            let bid_currency_mint = self
                .bid_currency_mint
                .as_ref()
                .ok_or(ErrorCode::MissingCurrencyMint)?;
            check_condition!(bid_currency_mint.key() == *currency, InvalidCurrencyMint);

            let bidder_currency_account = self
                .bidder_currency_account
                .as_ref()
                .ok_or(ErrorCode::MissingBidderTokenAccount)?;
            check_condition!(
                bidder_currency_account.owner == self.bidder.key()
                    && bidder_currency_account.mint == *currency,
                InvalidBidderTokenAccount
            );

            let escrow_currency_account = self
                .escrow_currency_account
                .as_ref()
                .ok_or(ErrorCode::MissingEscrowTokenAccount)?;
            check_condition!(
                escrow_currency_account.key()
                    == get_associated_token_address_with_program_id(
                        &self.auction.key(),
                        currency,
                        &self.token_program.key(),
                    ),
                InvalidEscrowTokenAccount
            );

            check_condition!(
                TokenUtil::is_supported_spl_token(
                    Some(&bid_currency_mint.to_account_info()),
                    Some(&bidder_currency_account.to_account_info())
                )?,
                UnsupportedSPLToken
            );
        }

        if high_currency != NATIVE_CURRENCY {
            let current_currency_mint = self
                .current_currency_mint
                .as_ref()
                .ok_or(ErrorCode::MissingCurrencyMint)?;
            check_condition!(
                current_currency_mint.key() == high_currency,
                InvalidCurrencyMint
            );
        }

        if auction.has_bid() {
            let previous_bidder = self
                .previous_bidder
                .as_ref()
                .ok_or(ErrorCode::MissingPreviousBidder)?;
            check_condition!(
                previous_bidder.key() == auction.highest_bidder,
                InvalidPreviousBidder
            );

            if auction.current_currency != NATIVE_CURRENCY {
                let previous_escrow = self
                    .previous_escrow_currency_account
                    .as_ref()
                    .ok_or(ErrorCode::MissingEscrowTokenAccount)?;
                check_condition!(
                    previous_escrow.key()
                        == get_associated_token_address_with_program_id(
                            &self.auction.key(),
                            &auction.current_currency,
                            &self.token_program.key(),
                        ),
                    InvalidEscrowTokenAccount
                );

                let previous_bidder_account = self
                    .previous_bidder_currency_account
                    .as_ref()
                    .ok_or(ErrorCode::MissingPreviousBidderTokenAccount)?;
                check_condition!(
                    previous_bidder_account.key()
                        == get_associated_token_address_with_program_id(
                            &auction.highest_bidder,
                            &auction.current_currency,
                            &self.token_program.key(),
                        ),
                    InvalidPreviousBidderTokenAccount
                );
            }
        }

        Ok(())
    }
}

/// Bid on an ongoing auction.
///
/// The incoming bid and the standing high bid (the floor when no bid has
/// landed yet) are normalized to USD through the auction's registered feeds;
/// the newcomer must be strictly greater, ties do not advance the auction.
/// The outbid bidder is refunded in full, in the currency they bid, before the
/// new bid is pulled into escrow; the instruction is atomic, so no partial
/// fund movement is ever observable.
///
/// Native bids attach the bid amount as the transferred value; token bids pull
/// from the bidder's token account.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `currency` - The currency the bid is denominated in (default pubkey for native).
/// * `raw_amount` - The bid magnitude, in raw currency units.
pub fn handler(ctx: Context<PlaceBid>, currency: Pubkey, raw_amount: u64) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp as u64;

    let (auction_id, auction_bump, previous_bidder_key, previous_currency, previous_amount, scaled_bid_value) = {
        let auction = &ctx.accounts.auction.load()?;

        ctx.accounts.validate(auction, &currency)?;

        auction.validate_bid(current_time, raw_amount)?;

        let bid_decimals = PriceNormalizer::currency_decimals(
            &currency,
            ctx.accounts.bid_currency_mint.as_ref().map(|mint| mint.decimals),
        )?;
        let scaled_bid_value =
            PriceNormalizer::normalize(&ctx.accounts.bid_currency_feed, raw_amount, bid_decimals)?;

        let (high_currency, high_amount) = auction.current_high();
        let high_decimals = PriceNormalizer::currency_decimals(
            &high_currency,
            ctx.accounts
                .current_currency_mint
                .as_ref()
                .map(|mint| mint.decimals),
        )?;
        let scaled_high_value = PriceNormalizer::normalize(
            &ctx.accounts.current_currency_feed,
            high_amount,
            high_decimals,
        )?;

        // ties do not advance the auction
        check_condition!(scaled_bid_value > scaled_high_value, BidTooLow);

        let (previous_currency, previous_amount) = if auction.has_bid() {
            (auction.current_currency, auction.current_bid)
        } else {
            (Pubkey::default(), 0)
        };

        (
            auction.id,
            auction.bump,
            auction.highest_bidder,
            previous_currency,
            previous_amount,
            scaled_bid_value,
        )
    };

    let auction_id_bytes = auction_id.to_le_bytes();
    let signer_seeds = &[AUCTION_SEEDS, auction_id_bytes.as_ref(), &[auction_bump]];

    // refund the outbid bidder in full, in the currency they bid
    if previous_amount > 0 {
        let previous_bidder = ctx.accounts.previous_bidder.as_ref().unwrap();

        if previous_currency == NATIVE_CURRENCY {
            TransferUtil::push_native(
                &ctx.accounts.auction.to_account_info(),
                &previous_bidder.to_account_info(),
                previous_amount,
            )?;
        } else {
            let previous_currency_mint = ctx.accounts.current_currency_mint.as_ref().unwrap();
            let previous_bidder_account =
                ctx.accounts.previous_bidder_currency_account.as_ref().unwrap();

            TransferUtil::ensure_ata(
                &ctx.accounts.bidder.to_account_info(),
                &previous_bidder.to_account_info(),
                &previous_currency_mint.to_account_info(),
                &previous_bidder_account.to_account_info(),
                &ctx.accounts.associated_token_program.to_account_info(),
                &ctx.accounts.token_program.to_account_info(),
                &ctx.accounts.system_program.to_account_info(),
            )?;

            TransferUtil::push_token(
                &ctx.accounts.token_program.to_account_info(),
                &previous_currency_mint.to_account_info(),
                previous_currency_mint.decimals,
                &ctx.accounts
                    .previous_escrow_currency_account
                    .as_ref()
                    .unwrap()
                    .to_account_info(),
                &ctx.accounts.auction.to_account_info(),
                &previous_bidder_account.to_account_info(),
                previous_amount,
                &[signer_seeds],
            )?;
        }
    }

    // pull the new bid into escrow
    if currency == NATIVE_CURRENCY {
        TransferUtil::pull_native(
            &ctx.accounts.system_program.to_account_info(),
            &ctx.accounts.bidder.to_account_info(),
            &ctx.accounts.auction.to_account_info(),
            raw_amount,
        )?;
    } else {
        let bid_currency_mint = ctx.accounts.bid_currency_mint.as_ref().unwrap();
        let escrow_currency_account = ctx.accounts.escrow_currency_account.as_ref().unwrap();

        TransferUtil::ensure_ata(
            &ctx.accounts.bidder.to_account_info(),
            &ctx.accounts.auction.to_account_info(),
            &bid_currency_mint.to_account_info(),
            &escrow_currency_account.to_account_info(),
            &ctx.accounts.associated_token_program.to_account_info(),
            &ctx.accounts.token_program.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
        )?;

        TransferUtil::pull_token(
            &ctx.accounts.token_program.to_account_info(),
            &bid_currency_mint.to_account_info(),
            bid_currency_mint.decimals,
            &ctx.accounts
                .bidder_currency_account
                .as_ref()
                .unwrap()
                .to_account_info(),
            &ctx.accounts.bidder.to_account_info(),
            &escrow_currency_account.to_account_info(),
            raw_amount,
        )?;
    }

    {
        let auction = &mut ctx.accounts.auction.load_mut()?;
        auction.record_bid(&ctx.accounts.bidder.key(), &currency, raw_amount);
    }

    emit!(BidPlaced {
        auction_id,
        bidder: ctx.accounts.bidder.key(),
        currency,
        raw_amount,
        usd_value: scaled_bid_value.to_u128_saturating(),
        previous_bidder: previous_bidder_key,
        refunded_currency: previous_currency,
        refunded_amount: previous_amount,
    });

    Ok(())
}
