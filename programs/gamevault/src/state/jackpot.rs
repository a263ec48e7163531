use anchor_lang::prelude::*;

use crate::constants::MAX_TOP_PLAYERS;

/// One ranked `(player, score)` pair on the period leaderboard.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player: Pubkey,
    pub score: u64,
}

impl LeaderboardEntry {
    pub const SIZE: usize = 32 + 8;
}

/// ---------------------------------------------------------------------------
/// JackpotRound
/// ---------------------------------------------------------------------------
///
/// Per-game PDA owning the rotating period window and the bounded top-K
/// leaderboard for the currently active period only. The array is kept
/// sorted descending by score via shift-insert; updates are O(K) with
/// K <= 50, deliberately simple over asymptotically clever.
#[account]
pub struct JackpotRound {
    /// Game this round belongs to.
    pub game_id: u64,

    /// Fixed period length in seconds.
    pub period_duration: i64,

    /// Monotonic period counter, starts at 1.
    pub period_number: u64,

    /// Start of the active period (unix time).
    pub period_start: i64,

    /// End of the active period; a draw may be triggered once `now` passes it.
    pub period_end: i64,

    /// Ranked entries for the active period, sorted descending by score.
    /// Only the first `leaderboard_len` slots are meaningful.
    pub leaderboard: [LeaderboardEntry; MAX_TOP_PLAYERS],

    /// Number of valid leaderboard slots (<= top_players_count).
    pub leaderboard_len: u8,

    /// Ranking bound K, 1..=50.
    pub top_players_count: u8,

    // ─────────────────────────────
    // Draw audit trail
    // ─────────────────────────────
    pub last_winner: Pubkey,
    pub last_payout: u64,
    pub last_drawn_at: i64,

    /// PDA bump.
    pub bump: u8,

    /// Reserved for future fields.
    pub _reserved: [u8; 16],
}

impl JackpotRound {
    pub const SEED_PREFIX: &'static [u8] = b"jackpot";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8 +  // game_id
            8 +  // period_duration
            8 +  // period_number
            8 +  // period_start
            8 +  // period_end
            (LeaderboardEntry::SIZE * MAX_TOP_PLAYERS) + // leaderboard
            1 +  // leaderboard_len
            1 +  // top_players_count
            32 + // last_winner
            8 +  // last_payout
            8 +  // last_drawn_at
            1 +  // bump
            16;  // reserved

    pub fn init_new(
        &mut self,
        game_id: u64,
        period_duration: i64,
        top_players_count: u8,
        now: i64,
        bump: u8,
    ) {
        self.game_id = game_id;
        self.period_duration = period_duration;
        self.top_players_count = top_players_count;

        self.period_number = 1;
        self.period_start = now;
        self.period_end = now.saturating_add(period_duration);

        self.leaderboard = [LeaderboardEntry::default(); MAX_TOP_PLAYERS];
        self.leaderboard_len = 0;

        self.last_winner = Pubkey::default();
        self.last_payout = 0;
        self.last_drawn_at = 0;

        self.bump = bump;
        self._reserved = [0u8; 16];
    }

    /// Adjusts the period length and ranking bound on an already-seeded
    /// round. The active window is left untouched; the new duration applies
    /// from the next rollover. Shrinking K only narrows `eligible()`, no
    /// ranked entry is discarded mid-period.
    pub fn reconfigure(&mut self, period_duration: i64, top_players_count: u8) {
        self.period_duration = period_duration;
        self.top_players_count = top_players_count;
    }

    #[inline]
    pub fn period_elapsed(&self, now: i64) -> bool {
        now >= self.period_end
    }

    /// Entries eligible for the draw: the ranked list truncated to K.
    pub fn eligible(&self) -> &[LeaderboardEntry] {
        let len = (self.leaderboard_len as usize)
            .min(self.top_players_count as usize)
            .min(MAX_TOP_PLAYERS);
        &self.leaderboard[..len]
    }

    /// Re-ranks `player` at `score` (their full current-period score, not a
    /// delta). Removes any previous entry for the player, then shift-inserts
    /// at the descending position; an insert past K is dropped, and a grown
    /// list past K loses its lowest tail entry. Equal scores keep earlier
    /// entrants ahead.
    pub fn rank(&mut self, player: Pubkey, score: u64) {
        let k = (self.top_players_count as usize).min(MAX_TOP_PLAYERS);
        let mut len = (self.leaderboard_len as usize).min(MAX_TOP_PLAYERS);
        if k == 0 {
            return;
        }

        if let Some(pos) = self.leaderboard[..len].iter().position(|e| e.player == player) {
            for i in pos..len - 1 {
                self.leaderboard[i] = self.leaderboard[i + 1];
            }
            len -= 1;
        }

        let idx = self.leaderboard[..len]
            .iter()
            .position(|e| e.score < score)
            .unwrap_or(len);

        if idx >= k {
            self.leaderboard_len = len as u8;
            return;
        }

        // when already full the lowest entry falls off the end
        let end = len.min(k - 1);
        for i in (idx..end).rev() {
            self.leaderboard[i + 1] = self.leaderboard[i];
        }
        self.leaderboard[idx] = LeaderboardEntry { player, score };
        self.leaderboard_len = (end + 1) as u8;
    }

    /// Sum of eligible scores; the weighted draw's denominator.
    pub fn total_eligible_score(&self) -> u128 {
        self.eligible().iter().map(|e| e.score as u128).sum()
    }

    /// Weighted selection: walks the eligible list accumulating scores and
    /// returns the first player whose cumulative score exceeds `r`, for
    /// `r` uniform in [0, total_eligible_score()).
    pub fn pick_weighted(&self, r: u128) -> Option<Pubkey> {
        let mut cumulative: u128 = 0;
        for entry in self.eligible() {
            cumulative += entry.score as u128;
            if r < cumulative {
                return Some(entry.player);
            }
        }
        None
    }

    /// Advances to the next period on a fixed cadence: the new window starts
    /// exactly where the old one ended, so trigger timing cannot drift the
    /// schedule. The leaderboard is discarded wholesale; per-player stamps
    /// invalidate lazily against the new period number.
    pub fn roll_period(&mut self) {
        self.period_number = self.period_number.saturating_add(1);
        self.period_start = self.period_end;
        self.period_end = self.period_start.saturating_add(self.period_duration);

        self.leaderboard = [LeaderboardEntry::default(); MAX_TOP_PLAYERS];
        self.leaderboard_len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    fn fresh_round(k: u8) -> JackpotRound {
        let mut round = JackpotRound {
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
        round.init_new(1, 86_400, k, 1_000, 255);
        round
    }

    fn scores_of(round: &JackpotRound) -> Vec<u64> {
        round.eligible().iter().map(|e| e.score).collect()
    }

    #[test]
    fn jackpot_round_size_matches_serialization() {
        let bytes = fresh_round(3).try_to_vec().unwrap();
        assert_eq!(bytes.len(), JackpotRound::SIZE);
    }

    #[test]
    fn ranking_stays_sorted_descending_and_bounded() {
        let mut round = fresh_round(3);
        let players: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();

        round.rank(players[0], 10);
        round.rank(players[1], 30);
        round.rank(players[2], 20);
        assert_eq!(scores_of(&round), vec![30, 20, 10]);

        // a fourth player below the cut is dropped
        round.rank(players[3], 5);
        assert_eq!(round.leaderboard_len, 3);
        assert_eq!(scores_of(&round), vec![30, 20, 10]);

        // a fourth player above the cut evicts the tail
        round.rank(players[4], 25);
        assert_eq!(scores_of(&round), vec![30, 25, 20]);
        assert!(!round.eligible().iter().any(|e| e.player == players[0]));
    }

    #[test]
    fn reranking_removes_previous_entry() {
        let mut round = fresh_round(3);
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        round.rank(a, 10);
        round.rank(b, 20);
        round.rank(a, 35); // a scored again within the period

        assert_eq!(round.leaderboard_len, 2);
        assert_eq!(scores_of(&round), vec![35, 20]);
        assert_eq!(round.eligible()[0].player, a);
    }

    #[test]
    fn equal_scores_keep_earlier_entrant_ahead() {
        let mut round = fresh_round(3);
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        round.rank(a, 20);
        round.rank(b, 20);
        assert_eq!(round.eligible()[0].player, a);
        assert_eq!(round.eligible()[1].player, b);
    }

    #[test]
    fn weighted_pick_matches_score_proportions_exactly() {
        let mut round = fresh_round(3);
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let c = Pubkey::new_unique();

        round.rank(a, 30);
        round.rank(b, 20);
        round.rank(c, 10);

        let total = round.total_eligible_score();
        assert_eq!(total, 60);

        // sweep the entire draw range: each player must win exactly
        // score/total of the outcomes
        let mut wins = std::collections::HashMap::new();
        for r in 0..total {
            let winner = round.pick_weighted(r).unwrap();
            *wins.entry(winner).or_insert(0u64) += 1;
        }
        assert_eq!(wins[&a], 30);
        assert_eq!(wins[&b], 20);
        assert_eq!(wins[&c], 10);
    }

    #[test]
    fn pick_on_empty_or_zero_score_list_returns_none() {
        let round = fresh_round(3);
        assert_eq!(round.pick_weighted(0), None);
    }

    #[test]
    fn rollover_uses_fixed_cadence_and_clears_ranking() {
        let mut round = fresh_round(3);
        round.rank(Pubkey::new_unique(), 10);

        let old_end = round.period_end;
        round.roll_period();

        assert_eq!(round.period_number, 2);
        assert_eq!(round.period_start, old_end);
        assert_eq!(round.period_end, old_end + 86_400);
        assert_eq!(round.leaderboard_len, 0);
        assert!(round.eligible().is_empty());
    }

    #[test]
    fn reconfigure_keeps_the_active_window_and_ranking() {
        let mut round = fresh_round(3);
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let c = Pubkey::new_unique();
        round.rank(a, 30);
        round.rank(b, 20);
        round.rank(c, 10);

        let old_start = round.period_start;
        let old_end = round.period_end;

        round.reconfigure(3_600, 2);

        // period untouched, bounds updated
        assert_eq!(round.period_number, 1);
        assert_eq!(round.period_start, old_start);
        assert_eq!(round.period_end, old_end);
        assert_eq!(round.period_duration, 3_600);
        assert_eq!(round.top_players_count, 2);

        // a smaller K narrows eligibility without losing order
        assert_eq!(scores_of(&round), vec![30, 20]);

        // the new duration applies from the next rollover
        round.roll_period();
        assert_eq!(round.period_start, old_end);
        assert_eq!(round.period_end, old_end + 3_600);
    }

    #[test]
    fn period_elapsed_boundary() {
        let round = fresh_round(1);
        assert!(!round.period_elapsed(round.period_end - 1));
        assert!(round.period_elapsed(round.period_end));
    }

    #[test]
    fn full_capacity_fifty_players() {
        let mut round = fresh_round(50);
        for i in 0..60u64 {
            round.rank(Pubkey::new_unique(), i + 1);
        }
        assert_eq!(round.leaderboard_len, 50);
        let scores = scores_of(&round);
        assert_eq!(scores[0], 60);
        assert_eq!(scores[49], 11);
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }
}
