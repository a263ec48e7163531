use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::GameVaultErrorCode;
use crate::events::{JackpotNoWinner, JackpotPaid, PeriodRolled};
use crate::state::{GameEntry, GameVault, JackpotRound};
use crate::utils::draw::{coin_flip, draw_in_range, latest_slot_hash, mix_seed};
use crate::utils::transfers::{transfer_lamports_out, transfer_tokens_out};

/// Resolves an elapsed jackpot period. Open to any caller — the draw itself
/// decides win/no-win at 50%, and either branch rolls the period forward
/// exactly once. A miss never retries mid-period.
///
/// The winner is not known until the draw executes, so the caller passes the
/// eligible wallets (native games) or their token accounts (token games) as
/// `remaining_accounts`; the selected one receives the payout directly.
#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct TriggerJackpot<'info> {
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

    #[account(
        mut,
        seeds = [JackpotRound::SEED_PREFIX, game_id.to_le_bytes().as_ref()],
        bump = jackpot_round.bump,
    )]
    pub jackpot_round: Box<Account<'info, JackpotRound>>,

    pub caller: Signer<'info>,

    /// CHECK: address pinned to the SlotHashes sysvar — not injectable.
    #[account(address = slot_hashes::ID @ GameVaultErrorCode::SlotHashesUnavailable)]
    pub slot_hashes: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = vault_token.owner == vault.key()
            && vault_token.mint == entry.token_mint @ GameVaultErrorCode::TokenAccountsMismatch
    )]
    pub vault_token: Option<Box<Account<'info, TokenAccount>>>,

    pub token_program: Option<Program<'info, Token>>,
}

pub fn trigger_jackpot_handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, TriggerJackpot<'info>>,
    game_id: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let vault_ai = ctx.accounts.vault.to_account_info();
    let vault_bump = ctx.accounts.vault.bump;
    let entry = &ctx.accounts.entry;
    let vault = &mut ctx.accounts.vault;
    let round = &mut ctx.accounts.jackpot_round;

    require!(
        entry.has_jackpot == 1,
        GameVaultErrorCode::JackpotNotConfigured
    );
    require!(round.period_elapsed(now), GameVaultErrorCode::PeriodNotElapsed);
    require!(
        !round.eligible().is_empty(),
        GameVaultErrorCode::EmptyLeaderboard
    );

    let slot_hash = latest_slot_hash(&ctx.accounts.slot_hashes.to_account_info())?;
    let seed = mix_seed(
        &slot_hash,
        &ctx.accounts.caller.key(),
        game_id,
        round.period_number,
        clock.slot,
        now,
    );

    let period_number = round.period_number;
    let total = round.total_eligible_score();

    if coin_flip(&seed) && total > 0 {
        let r = draw_in_range(&seed, total);
        let winner = round
            .pick_weighted(r)
            .ok_or(GameVaultErrorCode::EmptyLeaderboard)?;

        let payout = vault.take_jackpot_payout();
        if payout > 0 {
            if entry.is_native() {
                let destination = ctx
                    .remaining_accounts
                    .iter()
                    .find(|ai| ai.key() == winner)
                    .ok_or(GameVaultErrorCode::WinnerAccountMissing)?;
                transfer_lamports_out(&vault_ai, destination, payout)?;
            } else {
                let token_program = ctx
                    .accounts
                    .token_program
                    .as_ref()
                    .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;
                let vault_token = ctx
                    .accounts
                    .vault_token
                    .as_ref()
                    .ok_or(GameVaultErrorCode::TokenAccountsMismatch)?;

                let destination = ctx
                    .remaining_accounts
                    .iter()
                    .find(|ai| {
                        Account::<TokenAccount>::try_from(*ai)
                            .map(|t| t.owner == winner && t.mint == entry.token_mint)
                            .unwrap_or(false)
                    })
                    .ok_or(GameVaultErrorCode::WinnerAccountMissing)?;

                let game_id_bytes = game_id.to_le_bytes();
                let signer_seeds: &[&[u8]] =
                    &[GameVault::SEED_PREFIX, game_id_bytes.as_ref(), &[vault_bump]];

                transfer_tokens_out(
                    &token_program.to_account_info(),
                    &vault_token.to_account_info(),
                    destination,
                    &vault_ai,
                    &[signer_seeds],
                    payout,
                )?;
            }
        }

        round.last_winner = winner;
        round.last_payout = payout;

        emit!(JackpotPaid {
            game_id,
            winner,
            amount: payout,
            period_number,
        });
    } else {
        emit!(JackpotNoWinner {
            game_id,
            period_number,
        });
    }

    round.last_drawn_at = now;
    round.roll_period();

    emit!(PeriodRolled {
        game_id,
        new_period_number: round.period_number,
        period_start: round.period_start,
        period_end: round.period_end,
    });

    Ok(())
}
