use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::errors::GameVaultErrorCode;

/// Lamports into the vault, paid by a signing wallet.
pub fn transfer_lamports_in<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, GameVaultErrorCode::InvalidAmount);

    anchor_lang::system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            anchor_lang::system_program::Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

/// Lamports out of the program-owned vault PDA by direct balance edit.
/// The vault must stay rent-exempt after the debit.
pub fn transfer_lamports_out<'info>(
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let rent_floor = Rent::get()?.minimum_balance(vault.data_len());
    let available = vault.lamports().saturating_sub(rent_floor);
    require!(
        available >= amount,
        GameVaultErrorCode::InsufficientVaultBalance
    );

    **vault.try_borrow_mut_lamports()? -= amount;
    **to.try_borrow_mut_lamports()? += amount;
    Ok(())
}

/// SPL tokens into the vault's token account, authorized by the player.
pub fn transfer_tokens_in<'info>(
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, GameVaultErrorCode::InvalidAmount);

    token::transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

/// SPL tokens out of the vault's token account, signed by the vault PDA.
pub fn transfer_tokens_out<'info>(
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    vault_authority: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: vault_authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
