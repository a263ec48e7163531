use anchor_lang::prelude::*;

use crate::errors::GameVaultErrorCode;
use crate::state::Config;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Platform config PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + Config::SIZE,
        seeds = [Config::SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Fee destination wallet; only its key is stored.
    pub fee_receiver: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    require!(
        ctx.accounts.fee_receiver.key() != ctx.accounts.authority.key(),
        GameVaultErrorCode::AuthorityCannotEqualFeeReceiver
    );

    cfg.authority = ctx.accounts.authority.key();
    cfg.fee_receiver = ctx.accounts.fee_receiver.key();
    cfg.games_registered = 0;
    cfg.bump = ctx.bumps.config;
    cfg._reserved = [0u8; 16];

    Ok(())
}
