use anchor_lang::prelude::*;

use crate::constants::{MAX_PERIOD_SECS, MAX_TOP_PLAYERS, MIN_PERIOD_SECS};
use crate::errors::GameVaultErrorCode;
use crate::events::PeriodRolled;
use crate::state::{Config, GameEntry, JackpotRound};

#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct ConfigureJackpot<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [GameEntry::SEED_PREFIX, game_id.to_le_bytes().as_ref()],
        bump = entry.bump,
    )]
    pub entry: Box<Account<'info, GameEntry>>,

    #[account(
        init_if_needed,
        payer = caller,
        space = 8 + JackpotRound::SIZE,
        seeds = [JackpotRound::SEED_PREFIX, game_id.to_le_bytes().as_ref()],
        bump
    )]
    pub jackpot_round: Box<Account<'info, JackpotRound>>,

    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn configure_jackpot_handler(
    ctx: Context<ConfigureJackpot>,
    game_id: u64,
    period_duration: i64,
    top_players_count: u8,
) -> Result<()> {
    let caller_key = ctx.accounts.caller.key();
    ctx.accounts
        .entry
        .assert_creator_or(&caller_key, &ctx.accounts.config.authority)?;

    require!(
        (MIN_PERIOD_SECS..=MAX_PERIOD_SECS).contains(&period_duration),
        GameVaultErrorCode::InvalidPeriodDuration
    );
    require!(
        (1..=MAX_TOP_PLAYERS as u8).contains(&top_players_count),
        GameVaultErrorCode::InvalidTopPlayersCount
    );

    let round = &mut ctx.accounts.jackpot_round;
    if round.period_number == 0 {
        // First configuration seeds the period window.
        let now = Clock::get()?.unix_timestamp;
        round.init_new(
            game_id,
            period_duration,
            top_players_count,
            now,
            ctx.bumps.jackpot_round,
        );

        emit!(PeriodRolled {
            game_id,
            new_period_number: round.period_number,
            period_start: round.period_start,
            period_end: round.period_end,
        });
    } else {
        // Later calls adjust the bounds; the active window keeps running and
        // the new duration takes effect at the next rollover.
        round.reconfigure(period_duration, top_players_count);
    }

    ctx.accounts.entry.has_jackpot = 1;

    Ok(())
}
