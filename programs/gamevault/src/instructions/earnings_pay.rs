use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::GameVaultErrorCode;
use crate::events::EarningsPaid;
use crate::state::{GameEntry, GameVault, JackpotRound, PlayerStats};
use crate::utils::scoring::{apply_score, hydrate_stats};
use crate::utils::transfers::{transfer_lamports_out, transfer_tokens_out};

#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct PayEarnings<'info> {
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

    /// The registered game contract; also pays rent for a fresh stats PDA.
    #[account(mut, address = entry.game_authority @ GameVaultErrorCode::NotGameAuthority)]
    pub game_authority: Signer<'info>,

    /// CHECK: Payout destination wallet; only receives lamports (or is the
    /// owner of `player_token` for token games).
    #[account(mut)]
    pub player: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = game_authority,
        space = 8 + PlayerStats::SIZE,
        seeds = [
            PlayerStats::SEED_PREFIX,
            game_id.to_le_bytes().as_ref(),
            player.key().as_ref(),
        ],
        bump,
    )]
    pub stats: Box<Account<'info, PlayerStats>>,

    /// Required whenever the game has a jackpot configured, so score
    /// updates land on the period leaderboard.
    #[account(
        mut,
        seeds = [JackpotRound::SEED_PREFIX, game_id.to_le_bytes().as_ref()],
        bump = jackpot_round.bump,
    )]
    pub jackpot_round: Option<Box<Account<'info, JackpotRound>>>,

    #[account(
        mut,
        constraint = vault_token.owner == vault.key()
            && vault_token.mint == entry.token_mint @ GameVaultErrorCode::TokenAccountsMismatch
    )]
    pub vault_token: Option<Box<Account<'info, TokenAccount>>>,

    #[account(
        mut,
        constraint = player_token.owner == player.key()
            && player_token.mint == entry.token_mint @ GameVaultErrorCode::TokenAccountsMismatch
    )]
    pub player_token: Option<Box<Account<'info, TokenAccount>>>,

    pub token_program: Option<Program<'info, Token>>,

    pub system_program: Program<'info, System>,
}

pub fn pay_earnings_handler(
    ctx: Context<PayEarnings>,
    game_id: u64,
    amount: u64,
    points: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let player_key = ctx.accounts.player.key();
    let vault_ai = ctx.accounts.vault.to_account_info();
    let vault_bump = ctx.accounts.vault.bump;

    let entry = &ctx.accounts.entry;
    let vault = &mut ctx.accounts.vault;
    let stats = &mut ctx.accounts.stats;

    hydrate_stats(
        stats,
        vault,
        game_id,
        player_key,
        ctx.bumps.stats,
        clock.unix_timestamp,
    )?;

    // ─────────────────────────────
    // Monetary payout (all-or-nothing)
    // ─────────────────────────────
    if amount > 0 {
        vault.debit_house_for_payout(amount)?;
        stats.total_earned = stats
            .total_earned
            .checked_add(amount)
            .ok_or(GameVaultErrorCode::MathOverflow)?;

        if entry.is_native() {
            transfer_lamports_out(&vault_ai, &ctx.accounts.player.to_account_info(), amount)?;
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

            let game_id_bytes = game_id.to_le_bytes();
            let signer_seeds: &[&[u8]] =
                &[GameVault::SEED_PREFIX, game_id_bytes.as_ref(), &[vault_bump]];

            transfer_tokens_out(
                &token_program.to_account_info(),
                &vault_token.to_account_info(),
                &player_token.to_account_info(),
                &vault_ai,
                &[signer_seeds],
                amount,
            )?;
        }
    }

    // ─────────────────────────────
    // Leaderboard forwarding
    // ─────────────────────────────
    if points > 0 {
        let round = ctx.accounts.jackpot_round.as_mut().map(|r| &mut ***r);
        apply_score(entry, stats, round, player_key, points)?;
    }

    emit!(EarningsPaid {
        game_id,
        player: player_key,
        amount,
        points,
    });

    Ok(())
}
