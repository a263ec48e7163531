use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

security_txt! {
    name: "GameVault",
    project_url: "https://github.com/gamevault",
    source_code: "https://github.com/gamevault/gamevault",
    contacts: "mailto:security@gamevault.dev",
    policy: "https://github.com/gamevault/gamevault/blob/main/SECURITY.md",
    preferred_languages: "en"
}

// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod gamevault {
    use super::*;

    // -------------------------------------------------------------------------
    // platform setup
    // -------------------------------------------------------------------------
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize_handler(ctx)
    }

    pub fn register_game(
        ctx: Context<RegisterGame>,
        game_id: u64,
        use_native: u8,
        owner_fee_pct: u8,
        jackpot_fee_pct: u8,
        allowed_bets: Vec<u64>,
    ) -> Result<()> {
        register_game_handler(
            ctx,
            game_id,
            use_native,
            owner_fee_pct,
            jackpot_fee_pct,
            allowed_bets,
        )
    }

    pub fn set_game_active(ctx: Context<UpdateGame>, game_id: u64, active: u8) -> Result<()> {
        set_game_active_handler(ctx, game_id, active)
    }

    // -------------------------------------------------------------------------
    // fund ledger
    // -------------------------------------------------------------------------
    pub fn record_bet(
        ctx: Context<RecordBet>,
        game_id: u64,
        bet_amount: u64,
        max_win_multiplier: u16,
    ) -> Result<()> {
        record_bet_handler(ctx, game_id, bet_amount, max_win_multiplier)
    }

    pub fn pay_earnings(
        ctx: Context<PayEarnings>,
        game_id: u64,
        amount: u64,
        points: u64,
    ) -> Result<()> {
        pay_earnings_handler(ctx, game_id, amount, points)
    }

    pub fn fund_game(ctx: Context<FundDeposit>, game_id: u64, amount: u64) -> Result<()> {
        fund_game_handler(ctx, game_id, amount)
    }

    pub fn fund_jackpot(ctx: Context<FundDeposit>, game_id: u64, amount: u64) -> Result<()> {
        fund_jackpot_handler(ctx, game_id, amount)
    }

    pub fn withdraw_house(ctx: Context<WithdrawHouse>, game_id: u64, amount: u64) -> Result<()> {
        withdraw_house_handler(ctx, game_id, amount)
    }

    pub fn withdraw_fees(ctx: Context<WithdrawFees>, game_id: u64) -> Result<()> {
        withdraw_fees_handler(ctx, game_id)
    }

    // -------------------------------------------------------------------------
    // leaderboard & jackpot
    // -------------------------------------------------------------------------
    pub fn add_score(ctx: Context<AddScore>, game_id: u64, points: u64) -> Result<()> {
        add_score_handler(ctx, game_id, points)
    }

    pub fn configure_jackpot(
        ctx: Context<ConfigureJackpot>,
        game_id: u64,
        period_duration: i64,
        top_players_count: u8,
    ) -> Result<()> {
        configure_jackpot_handler(ctx, game_id, period_duration, top_players_count)
    }

    pub fn trigger_jackpot<'info>(
        ctx: Context<'_, '_, 'info, 'info, TriggerJackpot<'info>>,
        game_id: u64,
    ) -> Result<()> {
        trigger_jackpot_handler(ctx, game_id)
    }
}
