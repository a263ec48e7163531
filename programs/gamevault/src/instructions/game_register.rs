use anchor_lang::prelude::*;

use crate::constants::{MAX_ALLOWED_BETS, PCT_DENOM};
use crate::errors::GameVaultErrorCode;
use crate::events::GameRegistered;
use crate::state::{Config, GameEntry, GameVault};

#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct RegisterGame<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ GameVaultErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = authority,
        space = 8 + GameEntry::SIZE,
        seeds = [GameEntry::SEED_PREFIX, game_id.to_le_bytes().as_ref()],
        bump
    )]
    pub entry: Account<'info, GameEntry>,

    #[account(
        init,
        payer = authority,
        space = 8 + GameVault::SIZE,
        seeds = [GameVault::SEED_PREFIX, game_id.to_le_bytes().as_ref()],
        bump
    )]
    pub vault: Account<'info, GameVault>,

    /// CHECK: The game program's signing key; only its key is stored, and
    /// every later mutating call must carry it as a signer.
    pub game_authority: UncheckedAccount<'info>,

    /// CHECK: The game creator's wallet; only its key is stored.
    pub creator: UncheckedAccount<'info>,

    /// CHECK: SPL mint for token games; `Pubkey::default()` for native games.
    pub token_mint: UncheckedAccount<'info>,

    #[account(mut, address = config.authority @ GameVaultErrorCode::Unauthorized)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn register_game_handler(
    ctx: Context<RegisterGame>,
    game_id: u64,
    use_native: u8,
    owner_fee_pct: u8,
    jackpot_fee_pct: u8,
    allowed_bets: Vec<u64>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let entry = &mut ctx.accounts.entry;
    let vault = &mut ctx.accounts.vault;

    require!(use_native <= 1, GameVaultErrorCode::CurrencyMismatch);
    require!(
        (owner_fee_pct as u64).saturating_add(jackpot_fee_pct as u64) <= PCT_DENOM,
        GameVaultErrorCode::InvalidFeeSplit
    );
    require!(
        !allowed_bets.is_empty() && allowed_bets.len() <= MAX_ALLOWED_BETS,
        GameVaultErrorCode::InvalidAllowedBets
    );
    require!(
        allowed_bets.iter().all(|b| *b > 0),
        GameVaultErrorCode::InvalidAllowedBets
    );

    let token_mint = ctx.accounts.token_mint.key();
    if use_native == 0 {
        require!(
            token_mint != Pubkey::default(),
            GameVaultErrorCode::InvalidTokenMint
        );
    }

    entry.game_id = game_id;
    entry.game_authority = ctx.accounts.game_authority.key();
    entry.creator = ctx.accounts.creator.key();
    entry.token_mint = token_mint;
    entry.use_native = use_native;
    entry.active = 1;
    entry.has_jackpot = 0;
    entry.owner_fee_pct = owner_fee_pct;
    entry.jackpot_fee_pct = jackpot_fee_pct;

    entry.allowed_bets = [0u64; MAX_ALLOWED_BETS];
    entry.allowed_bets[..allowed_bets.len()].copy_from_slice(&allowed_bets);
    entry.allowed_bets_len = allowed_bets.len() as u8;

    entry.bump = ctx.bumps.entry;
    entry._reserved = [0u8; 16];

    vault.game_id = game_id;
    vault.house_pool = 0;
    vault.jackpot_pool = 0;
    vault.owner_fee_escrow = 0;
    vault.total_bets = 0;
    vault.total_rewards_paid = 0;
    vault.total_funded = 0;
    vault.total_claimed = 0;
    vault.total_jackpots_paid = 0;
    vault.total_players = 0;
    vault.bump = ctx.bumps.vault;
    vault._reserved = [0u8; 16];

    config.games_registered = config
        .games_registered
        .checked_add(1)
        .ok_or(GameVaultErrorCode::MathOverflow)?;

    emit!(GameRegistered {
        game_id,
        game_authority: entry.game_authority,
        creator: entry.creator,
    });

    Ok(())
}
