use anchor_lang::prelude::*;

use crate::errors::GameVaultErrorCode;
use crate::state::{Config, GameEntry};

#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct UpdateGame<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ GameVaultErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [GameEntry::SEED_PREFIX, game_id.to_le_bytes().as_ref()],
        bump = entry.bump,
    )]
    pub entry: Account<'info, GameEntry>,

    pub authority: Signer<'info>,
}

/// Pause or resume bet intake for a game. Payouts stay available so the
/// ledger can always settle outcomes already in flight.
pub fn set_game_active_handler(ctx: Context<UpdateGame>, _game_id: u64, active: u8) -> Result<()> {
    require!(active <= 1, GameVaultErrorCode::InvalidAmount);
    ctx.accounts.entry.active = active;
    Ok(())
}
