use anchor_lang::prelude::*;

use crate::errors::GameVaultErrorCode;
use crate::state::{GameEntry, GameVault, JackpotRound, PlayerStats};

/// First-touch initialization for a player's record. Registers the player
/// in the game's all-time player count exactly once.
pub fn hydrate_stats(
    stats: &mut PlayerStats,
    vault: &mut GameVault,
    game_id: u64,
    player: Pubkey,
    bump: u8,
    now: i64,
) -> Result<()> {
    if stats.player == Pubkey::default() {
        stats.game_id = game_id;
        stats.player = player;
        stats.bump = bump;
        stats.first_played_ts = now;

        vault.total_players = vault
            .total_players
            .checked_add(1)
            .ok_or(GameVaultErrorCode::MathOverflow)?;
    } else {
        require!(stats.player == player, GameVaultErrorCode::Unauthorized);
        require_eq!(stats.game_id, game_id, GameVaultErrorCode::GameIdMismatch);
    }
    stats.last_played_ts = now;
    Ok(())
}

/// Adds `points` to the player's all-time score and, when the game has a
/// jackpot configured, folds them into the current period's bounded ranking.
/// The stored stamp handles cross-period staleness; the ranking handles
/// ordering and the K bound.
pub fn apply_score(
    entry: &GameEntry,
    stats: &mut PlayerStats,
    round: Option<&mut JackpotRound>,
    player: Pubkey,
    points: u64,
) -> Result<()> {
    stats.all_time_score = stats
        .all_time_score
        .checked_add(points)
        .ok_or(GameVaultErrorCode::MathOverflow)?;

    if entry.has_jackpot != 0 {
        let round = round.ok_or(GameVaultErrorCode::MissingJackpotRound)?;
        require_eq!(round.game_id, entry.game_id, GameVaultErrorCode::GameIdMismatch);

        let new_score = stats.bump_period_score(points, round.period_number);
        round.rank(player, new_score);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_ALLOWED_BETS, MAX_TOP_PLAYERS};
    use crate::state::LeaderboardEntry;

    fn entry(has_jackpot: u8) -> GameEntry {
        GameEntry {
            game_id: 1,
            game_authority: Pubkey::default(),
            creator: Pubkey::default(),
            token_mint: Pubkey::default(),
            use_native: 1,
            active: 1,
            has_jackpot,
            owner_fee_pct: 10,
            jackpot_fee_pct: 5,
            allowed_bets: [0u64; MAX_ALLOWED_BETS],
            allowed_bets_len: 0,
            bump: 0,
            _reserved: [0; 16],
        }
    }

    fn stats(player: Pubkey) -> PlayerStats {
        PlayerStats {
            game_id: 1,
            player,
            total_earned: 0,
            all_time_score: 0,
            period_score: 0,
            period_number: 0,
            first_played_ts: 0,
            last_played_ts: 0,
            bump: 0,
            _reserved: [0; 16],
        }
    }

    fn round() -> JackpotRound {
        let mut r = JackpotRound {
            game_id: 0,
            period_duration: 0,
            period_number: 0,
            period_start: 0,
            period_end: 0,
            leaderboard: [LeaderboardEntry::default(); MAX_TOP_PLAYERS],
            leaderboard_len: 0,
            top_players_count: 0,
            last_winner: Pubkey::default(),
            last_payout: 0,
            last_drawn_at: 0,
            bump: 0,
            _reserved: [0; 16],
        };
        r.init_new(1, 86_400, 3, 0, 255);
        r
    }

    #[test]
    fn score_without_jackpot_only_touches_all_time() {
        let player = Pubkey::new_unique();
        let mut s = stats(player);

        apply_score(&entry(0), &mut s, None, player, 42).unwrap();
        assert_eq!(s.all_time_score, 42);
        assert_eq!(s.period_score, 0);
    }

    #[test]
    fn jackpot_game_requires_round_account() {
        let player = Pubkey::new_unique();
        let mut s = stats(player);

        assert!(apply_score(&entry(1), &mut s, None, player, 10).is_err());
    }

    #[test]
    fn previous_period_score_never_leaks_into_ranking() {
        let player = Pubkey::new_unique();
        let mut s = stats(player);
        let mut r = round();

        apply_score(&entry(1), &mut s, Some(&mut r), player, 40).unwrap();
        assert_eq!(r.eligible()[0].score, 40);

        // draw resolved elsewhere, ranking wiped, stamp left stale
        r.roll_period();
        apply_score(&entry(1), &mut s, Some(&mut r), player, 5).unwrap();

        assert_eq!(r.eligible()[0].score, 5);
        assert_eq!(s.all_time_score, 45);
    }
}
