use crate::events::AuctionEnded;
use crate::state::Auction;
use crate::utils::TransferUtil;
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::{get_associated_token_address_with_program_id, AssociatedToken},
    token_interface::{self, CloseAccount, Mint, TokenAccount, TokenInterface},
};
use auction_admin::state::FeeConfig;
use auction_admin::ID as AUCTION_ADMIN_PROGRAM_ID;
use shared::{
    check_condition,
    constants::{AUCTION_SEEDS, FEE_CONFIG_SEEDS, NATIVE_CURRENCY},
    errors::ErrorCode,
};

/// End an auction and settle it.
/// Permissionless.
///
/// # Arguments
/// * `system_program` - The system program.
/// * `token_program` - The token program.
/// * `associated_token_program` - The associated token program.
/// * `cranker` - Whoever finalizes the auction (mut, signer). Pays rent for missing token accounts.
/// * `auction` - The auction account (PDA) (mut, not signer).
/// * `fee_config` - The fee config account (PDA of the admin program) (mut, not signer). Takes custody of native fees.
/// * `asset_mint` - The mint of the auctioned asset (not mut, not signer).
/// * `escrow_asset_account` - The auction's escrow asset token account (PDA) (mut, not signer).
/// * `asset_recipient` - The winner when a bid landed, the seller otherwise (not mut, not signer).
/// * `recipient_asset_account` - The recipient's asset token account (mut, not signer). Created if missing.
/// * `seller` - The seller (mut, not signer). Receives proceeds and the escrow rent.
/// * `currency_mint` - The final bid's currency mint (not mut, not signer). None when native or no bid.
/// * `escrow_currency_account` - The escrow token account holding the final bid (mut, not signer). None when native or no bid.
/// * `seller_currency_account` - The seller's token account (mut, not signer). Created if missing. None when native or no bid.
/// * `fee_vault_currency_account` - The fee config's vault token account (mut, not signer). Created if missing. None when native or no bid.
#[derive(Accounts)]
pub struct EndAuction<'info> {
    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    #[account(mut)]
    pub cranker: Signer<'info>,

    #[account(mut)]
    pub auction: AccountLoader<'info, Auction>,

    #[account(mut,
        seeds = [FEE_CONFIG_SEEDS],
        bump = fee_config.bump,
        seeds::program = AUCTION_ADMIN_PROGRAM_ID,
    )]
    pub fee_config: Account<'info, FeeConfig>,

    #[account()]
    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut,
        associated_token::mint = asset_mint,
        associated_token::authority = auction,
        associated_token::token_program = token_program,
    )]
    pub escrow_asset_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: The winner when a bid landed, the seller otherwise; validated against the record
    #[account()]
    pub asset_recipient: UncheckedAccount<'info>,

    /// CHECK: Created as the recipient's associated token account if missing
    #[account(mut)]
    pub recipient_asset_account: UncheckedAccount<'info>,

    /// CHECK: Validated against the recorded seller
    #[account(mut)]
    pub seller: UncheckedAccount<'info>,

    #[account()]
    pub currency_mint: Option<Box<InterfaceAccount<'info, Mint>>>,

    #[account(mut)]
    pub escrow_currency_account: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    /// CHECK: Created as the seller's associated token account if missing
    #[account(mut)]
    pub seller_currency_account: Option<UncheckedAccount<'info>>,

    /// CHECK: Created as the fee config's vault token account if missing
    #[account(mut)]
    pub fee_vault_currency_account: Option<UncheckedAccount<'info>>,
}

impl EndAuction<'_> {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Auction PDA matches its recorded id.
    /// * The asset mint is the escrowed asset.
    /// * The asset goes to the winner, or back to the seller when no bid landed.
    /// * The seller account is the recorded seller.
    /// * The currency-specific accounts are the expected mints and associated token accounts.
    pub fn validate(&self, auction: &Auction) -> Result<()> {
        auction.validate_auction(&self.auction.key())?;

        check_condition!(self.asset_mint.key() == auction.asset_mint, InvalidAssetMint);

        let expected_asset_recipient = if auction.has_bid() {
            auction.highest_bidder
        } else {
            auction.seller
        };
        check_condition!(
            self.asset_recipient.key() == expected_asset_recipient,
            InvalidAssetRecipient
        );

        check_condition!(
            self.recipient_asset_account.key()
                == get_associated_token_address_with_program_id(
                    &self.asset_recipient.key(),
                    &self.asset_mint.key(),
                    &self.token_program.key(),
                ),
            InvalidRecipientTokenAccount
        );

        check_condition!(self.seller.key() == auction.seller, InvalidSeller);

        if auction.has_bid() && auction.current_currency != NATIVE_CURRENCY {
            let currency_mint = self
                .currency_mint
                .as_ref()
                .ok_or(ErrorCode::MissingCurrencyMint)?;
            check_condition!(
                currency_mint.key() == auction.current_currency,
                InvalidCurrencyMint
            );

            let escrow_currency_account = self
                .escrow_currency_account
                .as_ref()
                .ok_or(ErrorCode::MissingEscrowTokenAccount)?;
            check_condition!(
                escrow_currency_account.key()
                    == get_associated_token_address_with_program_id(
                        &self.auction.key(),
                        &auction.current_currency,
                        &self.token_program.key(),
                    ),
                InvalidEscrowTokenAccount
            );

            let seller_currency_account = self
                .seller_currency_account
                .as_ref()
                .ok_or(ErrorCode::InvalidRecipientTokenAccount)?;
            check_condition!(
                seller_currency_account.key()
                    == get_associated_token_address_with_program_id(
                        &auction.seller,
                        &auction.current_currency,
                        &self.token_program.key(),
                    ),
                InvalidRecipientTokenAccount
            );

            let fee_vault_currency_account = self
                .fee_vault_currency_account
                .as_ref()
                .ok_or(ErrorCode::InvalidFeeVault)?;
            check_condition!(
                fee_vault_currency_account.key()
                    == get_associated_token_address_with_program_id(
                        &self.fee_config.key(),
                        &auction.current_currency,
                        &self.token_program.key(),
                    ),
                InvalidFeeVault
            );
        }

        Ok(())
    }
}

/// Settle an auction past its end time, exactly once.
///
/// The terminal flag flips first, then the asset leaves escrow: to the winner
/// when a bid landed, back to the seller otherwise. The emptied asset escrow
/// is closed and its rent returned to the seller. When a bid landed, the
/// settlement fee is carved out of the proceeds into the fee collaborator's
/// custody and the remainder goes to the seller, in the bid's currency. The
/// instruction is atomic: if any transfer fails nothing is committed, the flag
/// included, and finalization can be retried.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
pub fn handler(ctx: Context<EndAuction>) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp as u64;

    let (auction_id, auction_bump, winner, current_currency, current_bid) = {
        let auction = &mut ctx.accounts.auction.load_mut()?;

        ctx.accounts.validate(auction)?;

        auction.validate_end(current_time)?;

        // terminal flag first
        auction.settle();

        (
            auction.id,
            auction.bump,
            auction.highest_bidder,
            auction.current_currency,
            auction.current_bid,
        )
    };

    let auction_id_bytes = auction_id.to_le_bytes();
    let signer_seeds = &[AUCTION_SEEDS, auction_id_bytes.as_ref(), &[auction_bump]];

    // release the asset
    TransferUtil::ensure_ata(
        &ctx.accounts.cranker.to_account_info(),
        &ctx.accounts.asset_recipient.to_account_info(),
        &ctx.accounts.asset_mint.to_account_info(),
        &ctx.accounts.recipient_asset_account.to_account_info(),
        &ctx.accounts.associated_token_program.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
    )?;

    TransferUtil::push_token(
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.asset_mint.to_account_info(),
        ctx.accounts.asset_mint.decimals,
        &ctx.accounts.escrow_asset_account.to_account_info(),
        &ctx.accounts.auction.to_account_info(),
        &ctx.accounts.recipient_asset_account.to_account_info(),
        1,
        &[signer_seeds],
    )?;

    // the asset escrow is empty now, return its rent to the seller
    token_interface::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.escrow_asset_account.to_account_info(),
            destination: ctx.accounts.seller.to_account_info(),
            authority: ctx.accounts.auction.to_account_info(),
        },
        &[signer_seeds],
    ))?;

    // split the proceeds between the fee collaborator and the seller
    let mut fee_amount = 0u64;
    let mut seller_amount = 0u64;

    if current_bid > 0 {
        fee_amount = ctx.accounts.fee_config.calc_fee(current_bid)?;
        check_condition!(fee_amount < current_bid, FeeExceedsBid);

        seller_amount = current_bid
            .checked_sub(fee_amount)
            .ok_or(ErrorCode::MathOverflow)?;

        if current_currency == NATIVE_CURRENCY {
            if fee_amount > 0 {
                TransferUtil::push_native(
                    &ctx.accounts.auction.to_account_info(),
                    &ctx.accounts.fee_config.to_account_info(),
                    fee_amount,
                )?;
            }

            TransferUtil::push_native(
                &ctx.accounts.auction.to_account_info(),
                &ctx.accounts.seller.to_account_info(),
                seller_amount,
            )?;
        } else {
            let currency_mint = ctx.accounts.currency_mint.as_ref().unwrap();
            let escrow_currency_account = ctx.accounts.escrow_currency_account.as_ref().unwrap();

            if fee_amount > 0 {
                let fee_vault_currency_account =
                    ctx.accounts.fee_vault_currency_account.as_ref().unwrap();

                TransferUtil::ensure_ata(
                    &ctx.accounts.cranker.to_account_info(),
                    &ctx.accounts.fee_config.to_account_info(),
                    &currency_mint.to_account_info(),
                    &fee_vault_currency_account.to_account_info(),
                    &ctx.accounts.associated_token_program.to_account_info(),
                    &ctx.accounts.token_program.to_account_info(),
                    &ctx.accounts.system_program.to_account_info(),
                )?;

                TransferUtil::push_token(
                    &ctx.accounts.token_program.to_account_info(),
                    &currency_mint.to_account_info(),
                    currency_mint.decimals,
                    &escrow_currency_account.to_account_info(),
                    &ctx.accounts.auction.to_account_info(),
                    &fee_vault_currency_account.to_account_info(),
                    fee_amount,
                    &[signer_seeds],
                )?;
            }

            let seller_currency_account = ctx.accounts.seller_currency_account.as_ref().unwrap();

            TransferUtil::ensure_ata(
                &ctx.accounts.cranker.to_account_info(),
                &ctx.accounts.seller.to_account_info(),
                &currency_mint.to_account_info(),
                &seller_currency_account.to_account_info(),
                &ctx.accounts.associated_token_program.to_account_info(),
                &ctx.accounts.token_program.to_account_info(),
                &ctx.accounts.system_program.to_account_info(),
            )?;

            TransferUtil::push_token(
                &ctx.accounts.token_program.to_account_info(),
                &currency_mint.to_account_info(),
                currency_mint.decimals,
                &escrow_currency_account.to_account_info(),
                &ctx.accounts.auction.to_account_info(),
                &seller_currency_account.to_account_info(),
                seller_amount,
                &[signer_seeds],
            )?;
        }
    }

    emit!(AuctionEnded {
        auction_id,
        winner,
        asset_recipient: ctx.accounts.asset_recipient.key(),
        currency: current_currency,
        raw_amount: current_bid,
        fee_amount,
        seller_amount,
    });

    Ok(())
}
