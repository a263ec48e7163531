/// Hard cap for a game's jackpot leaderboard (`top_players_count` <= this).
pub const MAX_TOP_PLAYERS: usize = 50;

/// Max bet denominations a game can whitelist.
pub const MAX_ALLOWED_BETS: usize = 8;

/// Fee percentages are whole percent out of 100, not basis points.
pub const PCT_DENOM: u64 = 100;

/// Share of the jackpot pool paid to a draw winner.
/// The remaining 10% stays behind as seed for the next period.
pub const JACKPOT_PAYOUT_PCT: u64 = 90;

/// Shortest configurable jackpot period, in seconds.
pub const MIN_PERIOD_SECS: i64 = 60;

/// Longest configurable jackpot period, in seconds (one year).
pub const MAX_PERIOD_SECS: i64 = 31_536_000;
