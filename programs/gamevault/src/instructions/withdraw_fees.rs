use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::GameVaultErrorCode;
use crate::events::OwnerFeesWithdrawn;
use crate::state::{Config, GameEntry, GameVault};
use crate::utils::transfers::{transfer_lamports_out, transfer_tokens_out};

/// Sweeps a game's owner-fee escrow to the platform fee receiver. The fee
/// receiver or the platform authority may trigger it; the destination is
/// always the configured fee receiver.
#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct WithdrawFees<'info> {
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

    pub caller: Signer<'info>,

    /// CHECK: Destination wallet, pinned to the configured fee receiver.
    #[account(mut, address = config.fee_receiver @ GameVaultErrorCode::NotFeeReceiver)]
    pub fee_receiver: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = vault_token.owner == vault.key()
            && vault_token.mint == entry.token_mint @ GameVaultErrorCode::TokenAccountsMismatch
    )]
    pub vault_token: Option<Box<Account<'info, TokenAccount>>>,

    #[account(
        mut,
        constraint = receiver_token.owner == fee_receiver.key()
            && receiver_token.mint == entry.token_mint @ GameVaultErrorCode::TokenAccountsMismatch
    )]
    pub receiver_token: Option<Box<Account<'info, TokenAccount>>>,

    pub token_program: Option<Program<'info, Token>>,
}

pub fn withdraw_fees_handler(ctx: Context<WithdrawFees>, game_id: u64) -> Result<()> {
    let caller_key = ctx.accounts.caller.key();
    let config = &ctx.accounts.config;
    require!(
        caller_key == config.fee_receiver || caller_key == config.authority,
        GameVaultErrorCode::NotFeeReceiver
    );

    let vault_ai = ctx.accounts.vault.to_account_info();
    let vault_bump = ctx.accounts.vault.bump;

    let amount = ctx.accounts.vault.take_owner_fees();
    require!(amount > 0, GameVaultErrorCode::NothingToWithdraw);

    if ctx.accounts.entry.is_native() {
        transfer_lamports_out(
            &vault_ai,
            &ctx.accounts.fee_receiver.to_account_info(),
            amount,
        )?;
    } else {
        let vault_token = ctx
            .accounts
            .vault_token
            .as_ref()
            .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;
        let receiver_token = ctx
            .accounts
            .receiver_token
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
            &receiver_token.to_account_info(),
            &vault_ai,
            &[signer_seeds],
            amount,
        )?;
    }

    emit!(OwnerFeesWithdrawn {
        game_id,
        recipient: ctx.accounts.fee_receiver.key(),
        amount,
    });

    Ok(())
}
