use anchor_lang::prelude::*;

use crate::errors::GameVaultErrorCode;
use crate::state::{GameEntry, GameVault, JackpotRound, PlayerStats};
use crate::utils::scoring::{apply_score, hydrate_stats};

/// Score-only update for games that award leaderboard points without a
/// payout. Same authorization boundary as the money path.
#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct AddScore<'info> {
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

    #[account(mut, address = entry.game_authority @ GameVaultErrorCode::NotGameAuthority)]
    pub game_authority: Signer<'info>,

    /// CHECK: Scored player; only used to derive the stats PDA.
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

    #[account(
        mut,
        seeds = [JackpotRound::SEED_PREFIX, game_id.to_le_bytes().as_ref()],
        bump = jackpot_round.bump,
    )]
    pub jackpot_round: Option<Box<Account<'info, JackpotRound>>>,

    pub system_program: Program<'info, System>,
}

pub fn add_score_handler(ctx: Context<AddScore>, game_id: u64, points: u64) -> Result<()> {
    require!(points > 0, GameVaultErrorCode::InvalidAmount);

    let clock = Clock::get()?;
    let player_key = ctx.accounts.player.key();

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

    let round = ctx.accounts.jackpot_round.as_mut().map(|r| &mut ***r);
    apply_score(entry, stats, round, player_key, points)?;

    Ok(())
}
