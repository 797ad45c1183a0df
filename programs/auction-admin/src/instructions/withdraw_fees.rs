use crate::events::FeesWithdrawn;
use crate::state::FeeConfig;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use shared::check_condition;
use shared::constants::common::ADMIN;
use shared::constants::{FEE_CONFIG_SEEDS, NATIVE_CURRENCY};
use shared::errors::ErrorCode;

/// Withdraw accumulated settlement fees to the configured fee recipient.
/// Admin only.
///
/// # Arguments
/// * `system_program` - The system program.
/// * `token_program` - The token program.
/// * `admin` - The protocol admin (mut, signer).
/// * `fee_config` - The fee config account (PDA) (mut, not signer). Holds native fees directly.
/// * `fee_recipient` - The configured fee recipient (mut, not signer). Receives native withdrawals.
/// * `currency_mint` - The currency mint (not mut, not signer). None for native withdrawals.
/// * `fee_vault_currency_account` - The config's vault token account (PDA) (mut, not signer). None for native.
/// * `recipient_currency_account` - The recipient's token account (mut, not signer). None for native.
#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut,
        seeds = [FEE_CONFIG_SEEDS],
        bump = fee_config.bump,
    )]
    pub fee_config: Account<'info, FeeConfig>,

    /// CHECK: Validated against the configured fee recipient
    #[account(mut)]
    pub fee_recipient: UncheckedAccount<'info>,

    #[account()]
    pub currency_mint: Option<Box<InterfaceAccount<'info, Mint>>>,

    #[account(mut)]
    pub fee_vault_currency_account: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    #[account(mut)]
    pub recipient_currency_account: Option<Box<InterfaceAccount<'info, TokenAccount>>>,
}

impl WithdrawFees<'_> {
    pub fn validate(&self, currency: &Pubkey, raw_amount: u64) -> Result<()> {
        check_condition!(self.admin.key() == ADMIN, Unauthorized);

        check_condition!(
            self.fee_recipient.key() == self.fee_config.fee_recipient,
            InvalidFeeRecipient
        );

        check_condition!(raw_amount > 0, InvalidTokenAmount);

        if *currency != NATIVE_CURRENCY {
            let currency_mint = self
                .currency_mint
                .as_ref()
                .ok_or(ErrorCode::MissingCurrencyMint)?;
            check_condition!(currency_mint.key() == *currency, InvalidCurrencyMint);

            let fee_vault = self
                .fee_vault_currency_account
                .as_ref()
                .ok_or(ErrorCode::InvalidFeeVault)?;
            check_condition!(
                fee_vault.key()
                    == get_associated_token_address_with_program_id(
                        &self.fee_config.key(),
                        currency,
                        &self.token_program.key(),
                    ),
                InvalidFeeVault
            );

            let recipient_account = self
                .recipient_currency_account
                .as_ref()
                .ok_or(ErrorCode::InvalidRecipientTokenAccount)?;
            check_condition!(
                recipient_account.owner == self.fee_config.fee_recipient
                    && recipient_account.mint == *currency,
                InvalidRecipientTokenAccount
            );
        }

        Ok(())
    }
}

pub fn handler(ctx: Context<WithdrawFees>, currency: Pubkey, raw_amount: u64) -> Result<()> {
    ctx.accounts.validate(&currency, raw_amount)?;

    if currency == NATIVE_CURRENCY {
        let fee_config_info = ctx.accounts.fee_config.to_account_info();

        // The config account must stay rent exempt after the withdrawal
        let rent_minimum = Rent::get()?.minimum_balance(fee_config_info.data_len());
        let available = fee_config_info
            .lamports()
            .checked_sub(rent_minimum)
            .ok_or(ErrorCode::MathOverflow)?;
        check_condition!(raw_amount <= available, InsufficientVaultBalance);

        {
            let mut from_lamports = fee_config_info.try_borrow_mut_lamports()?;
            **from_lamports = (**from_lamports)
                .checked_sub(raw_amount)
                .ok_or(ErrorCode::MathOverflow)?;
        }
        {
            let mut to_lamports = ctx.accounts.fee_recipient.try_borrow_mut_lamports()?;
            **to_lamports = (**to_lamports)
                .checked_add(raw_amount)
                .ok_or(ErrorCode::MathOverflow)?;
        }

        emit!(FeesWithdrawn {
            currency,
            raw_amount,
            destination: ctx.accounts.fee_recipient.key(),
        });

        return Ok(());
    }

    let currency_mint = ctx.accounts.currency_mint.as_ref().unwrap();
    let fee_vault = ctx.accounts.fee_vault_currency_account.as_ref().unwrap();
    let recipient_account = ctx.accounts.recipient_currency_account.as_ref().unwrap();

    check_condition!(fee_vault.amount >= raw_amount, InsufficientVaultBalance);

    let bump = ctx.accounts.fee_config.bump;
    let signer_seeds = &[FEE_CONFIG_SEEDS, &[bump]];

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: fee_vault.to_account_info(),
                to: recipient_account.to_account_info(),
                authority: ctx.accounts.fee_config.to_account_info(),
                mint: currency_mint.to_account_info(),
            },
            &[signer_seeds],
        ),
        raw_amount,
        currency_mint.decimals,
    )?;

    emit!(FeesWithdrawn {
        currency,
        raw_amount,
        destination: recipient_account.key(),
    });

    Ok(())
}
