use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::GameVaultErrorCode;
use crate::events::{BetRecorded, FeesSplit};
use crate::state::{GameEntry, GameVault};
use crate::utils::fees::split_bet;
use crate::utils::transfers::{transfer_lamports_in, transfer_tokens_in};

#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct RecordBet<'info> {
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

    /// The registered game contract for this game. Nothing moves without it.
    #[account(address = entry.game_authority @ GameVaultErrorCode::NotGameAuthority)]
    pub game_authority: Signer<'info>,

    /// The wallet paying the bet.
    #[account(mut)]
    pub player: Signer<'info>,

    /// Vault-side token account; required for token-denominated games.
    #[account(
        mut,
        constraint = vault_token.owner == vault.key()
            && vault_token.mint == entry.token_mint @ GameVaultErrorCode::TokenAccountsMismatch
    )]
    pub vault_token: Option<Box<Account<'info, TokenAccount>>>,

    /// Player-side token account; required for token-denominated games.
    #[account(
        mut,
        constraint = player_token.owner == player.key()
            && player_token.mint == entry.token_mint @ GameVaultErrorCode::TokenAccountsMismatch
    )]
    pub player_token: Option<Box<Account<'info, TokenAccount>>>,

    pub token_program: Option<Program<'info, Token>>,

    pub system_program: Program<'info, System>,
}

pub fn record_bet_handler(
    ctx: Context<RecordBet>,
    game_id: u64,
    bet_amount: u64,
    max_win_multiplier: u16,
) -> Result<()> {
    let entry = &ctx.accounts.entry;
    let vault = &mut ctx.accounts.vault;
    let player = &ctx.accounts.player;

    require!(entry.is_active(), GameVaultErrorCode::GameInactive);
    require!(bet_amount > 0, GameVaultErrorCode::InvalidAmount);
    require!(
        entry.is_valid_bet(bet_amount),
        GameVaultErrorCode::BetNotAllowed
    );

    // ─────────────────────────────
    // Split and credit the pools
    // ─────────────────────────────
    let split = split_bet(bet_amount, entry.owner_fee_pct, entry.jackpot_fee_pct)?;
    vault.credit_bet(split.house, split.owner_fee, split.jackpot)?;

    // Worst-case solvency, checked against the house pool *including* the
    // share just credited by this bet.
    vault.assert_solvent_for(bet_amount, max_win_multiplier)?;

    // ─────────────────────────────
    // Collect payment in full
    // ─────────────────────────────
    if entry.is_native() {
        transfer_lamports_in(
            &player.to_account_info(),
            &vault.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            bet_amount,
        )?;
    } else {
        let vault_token = ctx
            .accounts
            .vault_token
            .as_ref()
            .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;
        let player_token = ctx
            .accounts
            .player_token
            .as_ref()
            .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;
        let token_program = ctx
            .accounts
            .token_program
            .as_ref()
            .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;

        transfer_tokens_in(
            &token_program.to_account_info(),
            &player_token.to_account_info(),
            &vault_token.to_account_info(),
            &player.to_account_info(),
            bet_amount,
        )?;
    }

    emit!(BetRecorded {
        game_id,
        player: player.key(),
        amount: bet_amount,
    });
    emit!(FeesSplit {
        game_id,
        bet_amount,
        house_amount: split.house,
        owner_fee_amount: split.owner_fee,
        jackpot_amount: split.jackpot,
    });

    Ok(())
}
