use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::GameVaultErrorCode;
use crate::events::{GameFunded, JackpotFunded};
use crate::state::{GameEntry, GameVault};
use crate::utils::transfers::{transfer_lamports_in, transfer_tokens_in};

/// Permissionless deposits. Anyone may seed a game's house pool (liquidity
/// for payouts) or its jackpot pool; both credit 1:1.
#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct FundDeposit<'info> {
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

    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(
        mut,
        constraint = vault_token.owner == vault.key()
            && vault_token.mint == entry.token_mint @ GameVaultErrorCode::TokenAccountsMismatch
    )]
    pub vault_token: Option<Box<Account<'info, TokenAccount>>>,

    #[account(
        mut,
        constraint = funder_token.owner == funder.key()
            && funder_token.mint == entry.token_mint @ GameVaultErrorCode::TokenAccountsMismatch
    )]
    pub funder_token: Option<Box<Account<'info, TokenAccount>>>,

    pub token_program: Option<Program<'info, Token>>,

    pub system_program: Program<'info, System>,
}

fn collect_deposit(ctx: &Context<FundDeposit>, amount: u64) -> Result<()> {
    if ctx.accounts.entry.is_native() {
        transfer_lamports_in(
            &ctx.accounts.funder.to_account_info(),
            &ctx.accounts.vault.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            amount,
        )
    } else {
        let vault_token = ctx
            .accounts
            .vault_token
            .as_ref()
            .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;
        let funder_token = ctx
            .accounts
            .funder_token
            .as_ref()
            .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;
        let token_program = ctx
            .accounts
            .token_program
            .as_ref()
            .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;

        transfer_tokens_in(
            &token_program.to_account_info(),
            &funder_token.to_account_info(),
            &vault_token.to_account_info(),
            &ctx.accounts.funder.to_account_info(),
            amount,
        )
    }
}

pub fn fund_game_handler(ctx: Context<FundDeposit>, game_id: u64, amount: u64) -> Result<()> {
    require!(amount > 0, GameVaultErrorCode::InvalidAmount);

    ctx.accounts.vault.credit_house_funding(amount)?;
    collect_deposit(&ctx, amount)?;

    emit!(GameFunded {
        game_id,
        funder: ctx.accounts.funder.key(),
        amount,
    });
    Ok(())
}

pub fn fund_jackpot_handler(ctx: Context<FundDeposit>, game_id: u64, amount: u64) -> Result<()> {
    require!(amount > 0, GameVaultErrorCode::InvalidAmount);

    ctx.accounts.vault.credit_jackpot_funding(amount)?;
    collect_deposit(&ctx, amount)?;

    emit!(JackpotFunded {
        game_id,
        funder: ctx.accounts.funder.key(),
        amount,
    });
    Ok(())
}
