use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::associated_token::{self, Create};
use anchor_spl::token_interface::{self, TransferChecked};
use shared::errors::ErrorCode;

/// Currency custody moves for the auction engine. Pulls are signed by the
/// paying user; pushes out of escrow are signed by the auction PDA.
pub struct TransferUtil;

impl TransferUtil {
    /// Create `ata` as `owner`'s associated token account for `mint` if it
    /// does not exist yet.
    ///
    /// # Arguments
    /// * `payer` - Pays the rent for the new account.
    /// * `owner` - The authority the account is derived from.
    /// * `mint` - The token mint.
    /// * `ata` - The associated token account (address already validated by the caller).
    #[allow(clippy::too_many_arguments)]
    pub fn ensure_ata<'info>(
        payer: &AccountInfo<'info>,
        owner: &AccountInfo<'info>,
        mint: &AccountInfo<'info>,
        ata: &AccountInfo<'info>,
        associated_token_program: &AccountInfo<'info>,
        token_program: &AccountInfo<'info>,
        system_program: &AccountInfo<'info>,
    ) -> Result<()> {
        if !ata.data_is_empty() {
            return Ok(());
        }

        associated_token::create(CpiContext::new(
            associated_token_program.clone(),
            Create {
                payer: payer.clone(),
                associated_token: ata.clone(),
                authority: owner.clone(),
                mint: mint.clone(),
                system_program: system_program.clone(),
                token_program: token_program.clone(),
            },
        ))
    }

    /// Pull native value from a signing payer into custody.
    pub fn pull_native<'info>(
        system_program: &AccountInfo<'info>,
        from: &AccountInfo<'info>,
        to: &AccountInfo<'info>,
        lamports: u64,
    ) -> Result<()> {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                system_program::Transfer {
                    from: from.clone(),
                    to: to.clone(),
                },
            ),
            lamports,
        )
    }

    /// Push native value out of a program-owned account. Only the owning
    /// program may debit, so this is a direct lamport move rather than a CPI.
    pub fn push_native<'info>(
        from: &AccountInfo<'info>,
        to: &AccountInfo<'info>,
        lamports: u64,
    ) -> Result<()> {
        {
            let mut from_lamports = from.try_borrow_mut_lamports()?;
            **from_lamports = (**from_lamports)
                .checked_sub(lamports)
                .ok_or(ErrorCode::MathOverflow)?;
        }
        {
            let mut to_lamports = to.try_borrow_mut_lamports()?;
            **to_lamports = (**to_lamports)
                .checked_add(lamports)
                .ok_or(ErrorCode::MathOverflow)?;
        }

        Ok(())
    }

    /// Pull tokens from the signing user's account into escrow.
    #[allow(clippy::too_many_arguments)]
    pub fn pull_token<'info>(
        token_program: &AccountInfo<'info>,
        mint: &AccountInfo<'info>,
        mint_decimals: u8,
        from: &AccountInfo<'info>,
        authority: &AccountInfo<'info>,
        to: &AccountInfo<'info>,
        raw_amount: u64,
    ) -> Result<()> {
        token_interface::transfer_checked(
            CpiContext::new(
                token_program.clone(),
                TransferChecked {
                    from: from.clone(),
                    to: to.clone(),
                    authority: authority.clone(),
                    mint: mint.clone(),
                },
            ),
            raw_amount,
            mint_decimals,
        )
    }

    /// Push tokens out of escrow, signed by the auction PDA.
    #[allow(clippy::too_many_arguments)]
    pub fn push_token<'info>(
        token_program: &AccountInfo<'info>,
        mint: &AccountInfo<'info>,
        mint_decimals: u8,
        from: &AccountInfo<'info>,
        authority: &AccountInfo<'info>,
        to: &AccountInfo<'info>,
        raw_amount: u64,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        token_interface::transfer_checked(
            CpiContext::new_with_signer(
                token_program.clone(),
                TransferChecked {
                    from: from.clone(),
                    to: to.clone(),
                    authority: authority.clone(),
                    mint: mint.clone(),
                },
                signer_seeds,
            ),
            raw_amount,
            mint_decimals,
        )
    }
}
