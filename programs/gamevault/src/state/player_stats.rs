use anchor_lang::prelude::*;

/// Per-game, per-player record.
///
/// `total_earned` is the cumulative amount ever paid to the player for this
/// game and only ever grows; the payout instruction is its sole writer.
///
/// The period score is stored as a `(period_score, period_number)` stamp.
/// A stamp from an older period is treated as zero at read time, so period
/// rollover never has to walk and clear every player record.
#[account]
pub struct PlayerStats {
    /// Game this record belongs to.
    pub game_id: u64,

    /// The player wallet.
    pub player: Pubkey,

    /// Cumulative earnings ever paid out. Monotonic.
    pub total_earned: u64,

    /// All-time score across every period.
    pub all_time_score: u64,

    /// Score within the period stamped below.
    pub period_score: u64,

    /// Period the score above was earned in. Stale stamp => score is zero.
    pub period_number: u64,

    /// Unix time of first participation.
    pub first_played_ts: i64,

    /// Unix time of last payout or score update.
    pub last_played_ts: i64,

    /// PDA bump.
    pub bump: u8,

    /// Reserved for future fields.
    pub _reserved: [u8; 16],
}

impl PlayerStats {
    pub const SEED_PREFIX: &'static [u8] = b"stats";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8 +  // game_id
            32 + // player
            8 +  // total_earned
            8 +  // all_time_score
            8 +  // period_score
            8 +  // period_number
            8 +  // first_played_ts
            8 +  // last_played_ts
            1 +  // bump
            16;  // reserved

    /// Current-period score with lazy invalidation of stale stamps.
    #[inline]
    pub fn period_score_for(&self, current_period: u64) -> u64 {
        if self.period_number == current_period {
            self.period_score
        } else {
            0
        }
    }

    /// Adds `points` to the current-period score, zeroing any stale carry
    /// first, and restamps the record. Returns the new period score.
    pub fn bump_period_score(&mut self, points: u64, current_period: u64) -> u64 {
        let new_score = self
            .period_score_for(current_period)
            .saturating_add(points);
        self.period_score = new_score;
        self.period_number = current_period;
        new_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    fn fresh_stats() -> PlayerStats {
        PlayerStats {
            game_id: 1,
            player: Pubkey::default(),
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

    #[test]
    fn player_stats_size_matches_serialization() {
        let bytes = fresh_stats().try_to_vec().unwrap();
        assert_eq!(bytes.len(), PlayerStats::SIZE);
    }

    #[test]
    fn stale_period_score_reads_as_zero() {
        let mut s = fresh_stats();
        s.bump_period_score(40, 1);
        assert_eq!(s.period_score_for(1), 40);

        // period rolled forward without touching this record
        assert_eq!(s.period_score_for(2), 0);

        // first score of the new period starts from zero, not 40
        let new_score = s.bump_period_score(5, 2);
        assert_eq!(new_score, 5);
        assert_eq!(s.period_number, 2);
    }

    #[test]
    fn same_period_scores_accumulate() {
        let mut s = fresh_stats();
        s.bump_period_score(10, 3);
        let total = s.bump_period_score(15, 3);
        assert_eq!(total, 25);
    }
}
