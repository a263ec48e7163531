use anchor_lang::prelude::*;

#[error_code]
pub enum GameVaultErrorCode {
    // ─────────────────────────────
    // Access control
    // ─────────────────────────────
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Caller is not the registered game authority")]
    NotGameAuthority,

    NotCreatorOrAuthority,
    NotFeeReceiver,
    AuthorityCannotEqualFeeReceiver,

    // ─────────────────────────────
    // Lookup
    // ─────────────────────────────
    GameIdMismatch,
    GameInactive,

    // ─────────────────────────────
    // Funds
    // ─────────────────────────────
    #[msg("Insufficient house pool")]
    InsufficientHouseFunds,

    #[msg("House pool cannot cover worst-case payout")]
    SolvencyCheckFailed,

    NothingToWithdraw,
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,

    // ─────────────────────────────
    // Configuration
    // ─────────────────────────────
    #[msg("Bet amount not in the allowed set")]
    BetNotAllowed,

    #[msg("Invalid amount")]
    InvalidAmount,

    InvalidFeeSplit,
    InvalidAllowedBets,
    InvalidPeriodDuration,
    InvalidTopPlayersCount,
    InvalidTokenMint,

    #[msg("Token accounts missing or mismatched for a token-denominated game")]
    TokenAccountsMismatch,

    #[msg("Native transfer accounts supplied for a token game, or vice versa")]
    CurrencyMismatch,

    // ─────────────────────────────
    // Jackpot lifecycle
    // ─────────────────────────────
    #[msg("Game has no configured jackpot")]
    JackpotNotConfigured,

    MissingJackpotRound,

    #[msg("Current period has not elapsed")]
    PeriodNotElapsed,

    #[msg("No ranked players this period")]
    EmptyLeaderboard,

    #[msg("Winner wallet not present in remaining accounts")]
    WinnerAccountMissing,

    SlotHashesUnavailable,
}
