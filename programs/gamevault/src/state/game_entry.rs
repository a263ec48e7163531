use anchor_lang::prelude::*;

use crate::constants::MAX_ALLOWED_BETS;
use crate::errors::GameVaultErrorCode;

/// Registry seam: per-game metadata the ledger consumes.
///
/// Every mutating ledger/leaderboard instruction is gated on
/// `game_authority` having signed — the on-chain equivalent of
/// "caller must be the registered game contract for this game".
#[account]
pub struct GameEntry {
    /// Game identifier (chosen at registration, unique by PDA seed).
    pub game_id: u64,

    /// The registered game program's signing key. Must sign every bet,
    /// payout and score update for this game.
    pub game_authority: Pubkey,

    /// Wallet of whoever created the game; may withdraw house funds and
    /// configure the jackpot.
    pub creator: Pubkey,

    /// SPL mint for token-denominated games. Ignored when `use_native` is set.
    pub token_mint: Pubkey,

    /// 1 = bets and payouts move lamports, 0 = SPL token transfers.
    pub use_native: u8,

    /// 1 = bets accepted, 0 = paused.
    pub active: u8,

    /// 1 = a JackpotRound PDA exists for this game.
    pub has_jackpot: u8,

    /// Share of each bet escrowed for the fee receiver, whole percent.
    pub owner_fee_pct: u8,

    /// Share of each bet feeding the jackpot pool, whole percent.
    pub jackpot_fee_pct: u8,

    /// Whitelisted bet denominations; only the first `allowed_bets_len`
    /// slots are meaningful.
    pub allowed_bets: [u64; MAX_ALLOWED_BETS],

    /// Number of valid entries in `allowed_bets` (1..=MAX_ALLOWED_BETS).
    pub allowed_bets_len: u8,

    /// PDA bump.
    pub bump: u8,

    /// Reserved for future fields.
    pub _reserved: [u8; 16],
}

impl GameEntry {
    pub const SEED_PREFIX: &'static [u8] = b"game";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8 +  // game_id
            32 + // game_authority
            32 + // creator
            32 + // token_mint
            1 +  // use_native
            1 +  // active
            1 +  // has_jackpot
            1 +  // owner_fee_pct
            1 +  // jackpot_fee_pct
            (8 * MAX_ALLOWED_BETS) + // allowed_bets
            1 +  // allowed_bets_len
            1 +  // bump
            16;  // reserved

    #[inline]
    pub fn is_native(&self) -> bool {
        self.use_native != 0
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active != 0
    }

    /// True when `amount` is one of this game's whitelisted denominations.
    pub fn is_valid_bet(&self, amount: u64) -> bool {
        let len = (self.allowed_bets_len as usize).min(MAX_ALLOWED_BETS);
        self.allowed_bets[..len].contains(&amount)
    }

    /// Caller must be the game's creator or the platform authority.
    pub fn assert_creator_or(&self, caller: &Pubkey, authority: &Pubkey) -> Result<()> {
        require!(
            caller == &self.creator || caller == authority,
            GameVaultErrorCode::NotCreatorOrAuthority
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    fn entry_with_bets(bets: &[u64]) -> GameEntry {
        let mut allowed = [0u64; MAX_ALLOWED_BETS];
        allowed[..bets.len()].copy_from_slice(bets);

        GameEntry {
            game_id: 1,
            game_authority: Pubkey::default(),
            creator: Pubkey::default(),
            token_mint: Pubkey::default(),
            use_native: 1,
            active: 1,
            has_jackpot: 0,
            owner_fee_pct: 10,
            jackpot_fee_pct: 5,
            allowed_bets: allowed,
            allowed_bets_len: bets.len() as u8,
            bump: 0,
            _reserved: [0; 16],
        }
    }

    #[test]
    fn game_entry_size_matches_serialization() {
        let entry = entry_with_bets(&[1_000]);
        let bytes = entry.try_to_vec().unwrap();
        assert_eq!(bytes.len(), GameEntry::SIZE);
    }

    #[test]
    fn valid_bet_checks_only_populated_slots() {
        let entry = entry_with_bets(&[100, 500, 1_000]);

        assert!(entry.is_valid_bet(100));
        assert!(entry.is_valid_bet(1_000));
        assert!(!entry.is_valid_bet(250));
        // unpopulated slots hold 0 but a zero bet must not pass
        assert!(!entry.is_valid_bet(0));
    }
}
