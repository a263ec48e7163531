use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::GameVaultErrorCode;
use crate::events::HouseWithdrawn;
use crate::state::{Config, GameEntry, GameVault};
use crate::utils::transfers::{transfer_lamports_out, transfer_tokens_out};

/// Creator (or platform authority) withdrawal of house liquidity. Only the
/// house pool is touchable; jackpot funds and fee escrow never leave this
/// way.
#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct WithdrawHouse<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [GameEntry::SEED_PREFIX, game_id.to_le_bytes().as_ref()],
        bump = entry.bump,
    )]
    pub entry: Box<Account<'info, GameEntry>>,

    #[account(
        mut,
        seeds = [GameVault::SEED_PREFIX, game_id.to_le_bytes().as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, GameVault>>,

    /// Receives the withdrawal.
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        mut,
        constraint = vault_token.owner == vault.key()
            && vault_token.mint == entry.token_mint @ GameVaultErrorCode::TokenAccountsMismatch
    )]
    pub vault_token: Option<Box<Account<'info, TokenAccount>>>,

    #[account(
        mut,
        constraint = caller_token.owner == caller.key()
            && caller_token.mint == entry.token_mint @ GameVaultErrorCode::TokenAccountsMismatch
    )]
    pub caller_token: Option<Box<Account<'info, TokenAccount>>>,

    pub token_program: Option<Program<'info, Token>>,
}

pub fn withdraw_house_handler(ctx: Context<WithdrawHouse>, game_id: u64, amount: u64) -> Result<()> {
    require!(amount > 0, GameVaultErrorCode::InvalidAmount);

    let caller_key = ctx.accounts.caller.key();
    ctx.accounts
        .entry
        .assert_creator_or(&caller_key, &ctx.accounts.config.authority)?;

    let vault_ai = ctx.accounts.vault.to_account_info();
    let vault_bump = ctx.accounts.vault.bump;

    ctx.accounts.vault.debit_house_for_withdrawal(amount)?;

    if ctx.accounts.entry.is_native() {
        transfer_lamports_out(&vault_ai, &ctx.accounts.caller.to_account_info(), amount)?;
    } else {
        let vault_token = ctx
            .accounts
            .vault_token
            .as_ref()
            .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;
        let caller_token = ctx
            .accounts
            .caller_token
            .as_ref()
            .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;
        let token_program = ctx
            .accounts
            .token_program
            .as_ref()
            .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;

        let game_id_bytes = game_id.to_le_bytes();
        let signer_seeds: &[&[u8]] =
            &[GameVault::SEED_PREFIX, game_id_bytes.as_ref(), &[vault_bump]];

        transfer_tokens_out(
            &token_program.to_account_info(),
            &vault_token.to_account_info(),
            &caller_token.to_account_info(),
            &vault_ai,
            &[signer_seeds],
            amount,
        )?;
    }

    emit!(HouseWithdrawn {
        game_id,
        recipient: caller_key,
        amount,
    });

    Ok(())
}
