use anchor_lang::prelude::*;

use crate::constants::{JACKPOT_PAYOUT_PCT, PCT_DENOM};
use crate::errors::GameVaultErrorCode;

/// ---------------------------------------------------------------------------
/// GameVault
/// ---------------------------------------------------------------------------
///
/// Program-owned PDA that holds the funds for one game. For native games the
/// lamports sit directly on this account; for token games an SPL token
/// account owned by this PDA holds them. The three pool fields are internal
/// compartments of that single balance and are the only accounting source of
/// truth — nothing outside this struct's methods mutates them.
///
/// Invariant: house_pool + jackpot_pool + owner_fee_escrow equals everything
/// ever deposited minus everything ever paid out, and no pool goes negative
/// (all mutations are checked).
#[account]
pub struct GameVault {
    /// Game this vault belongs to.
    pub game_id: u64,

    /// Funds available to pay player winnings.
    pub house_pool: u64,

    /// Accumulated lottery funds awaiting a winning draw.
    pub jackpot_pool: u64,

    /// Owner fees pending withdrawal by the fee receiver.
    pub owner_fee_escrow: u64,

    // ─────────────────────────────
    // Running totals (monotonic, for audit)
    // ─────────────────────────────
    pub total_bets: u64,
    pub total_rewards_paid: u64,
    pub total_funded: u64,
    pub total_claimed: u64,
    pub total_jackpots_paid: u64,

    /// Count of distinct players ever paid or scored for this game.
    pub total_players: u64,

    /// PDA bump.
    pub bump: u8,

    /// Reserved for future fields.
    pub _reserved: [u8; 16],
}

impl GameVault {
    pub const SEED_PREFIX: &'static [u8] = b"vault";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8 +  // game_id
            8 +  // house_pool
            8 +  // jackpot_pool
            8 +  // owner_fee_escrow
            8 +  // total_bets
            8 +  // total_rewards_paid
            8 +  // total_funded
            8 +  // total_claimed
            8 +  // total_jackpots_paid
            8 +  // total_players
            1 +  // bump
            16;  // reserved

    /// Sum of all compartments currently held for this game.
    pub fn pool_total(&self) -> u64 {
        self.house_pool
            .saturating_add(self.jackpot_pool)
            .saturating_add(self.owner_fee_escrow)
    }

    /// Credits a bet's three shares atomically and bumps the bet counter.
    pub fn credit_bet(&mut self, house: u64, owner_fee: u64, jackpot: u64) -> Result<()> {
        self.house_pool = self
            .house_pool
            .checked_add(house)
            .ok_or(GameVaultErrorCode::MathOverflow)?;
        self.owner_fee_escrow = self
            .owner_fee_escrow
            .checked_add(owner_fee)
            .ok_or(GameVaultErrorCode::MathOverflow)?;
        self.jackpot_pool = self
            .jackpot_pool
            .checked_add(jackpot)
            .ok_or(GameVaultErrorCode::MathOverflow)?;
        self.total_bets = self
            .total_bets
            .checked_add(1)
            .ok_or(GameVaultErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Worst-case-outcome solvency gate. Must run *after* the bet's house
    /// share has been credited so the check reflects the just-received funds.
    pub fn assert_solvent_for(&self, bet_amount: u64, max_win_multiplier: u16) -> Result<()> {
        let exposure = (bet_amount as u128) * (max_win_multiplier as u128);
        require!(
            self.house_pool as u128 >= exposure,
            GameVaultErrorCode::SolvencyCheckFailed
        );
        Ok(())
    }

    /// Debits the house pool for an earnings payout. All-or-nothing:
    /// a shortfall fails the call with no partial debit.
    pub fn debit_house_for_payout(&mut self, amount: u64) -> Result<()> {
        self.house_pool = self
            .house_pool
            .checked_sub(amount)
            .ok_or(GameVaultErrorCode::InsufficientHouseFunds)?;
        self.total_rewards_paid = self
            .total_rewards_paid
            .checked_add(amount)
            .ok_or(GameVaultErrorCode::MathOverflow)?;
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(GameVaultErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Debits the house pool for a creator withdrawal (jackpot and fee
    /// escrow are never touchable this way).
    pub fn debit_house_for_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.house_pool = self
            .house_pool
            .checked_sub(amount)
            .ok_or(GameVaultErrorCode::InsufficientHouseFunds)?;
        Ok(())
    }

    /// Takes the winner's share of the jackpot pool: 90% rounded down.
    /// The remainder stays behind as seed for the next period. Returns the
    /// amount removed (0 when the pool is empty).
    pub fn take_jackpot_payout(&mut self) -> u64 {
        let payout =
            ((self.jackpot_pool as u128) * (JACKPOT_PAYOUT_PCT as u128) / (PCT_DENOM as u128)) as u64;
        self.jackpot_pool -= payout;
        self.total_jackpots_paid = self.total_jackpots_paid.saturating_add(payout);
        payout
    }

    pub fn credit_house_funding(&mut self, amount: u64) -> Result<()> {
        self.house_pool = self
            .house_pool
            .checked_add(amount)
            .ok_or(GameVaultErrorCode::MathOverflow)?;
        self.total_funded = self
            .total_funded
            .checked_add(amount)
            .ok_or(GameVaultErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn credit_jackpot_funding(&mut self, amount: u64) -> Result<()> {
        self.jackpot_pool = self
            .jackpot_pool
            .checked_add(amount)
            .ok_or(GameVaultErrorCode::MathOverflow)?;
        self.total_funded = self
            .total_funded
            .checked_add(amount)
            .ok_or(GameVaultErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Zeroes the fee escrow and returns what was in it.
    pub fn take_owner_fees(&mut self) -> u64 {
        let amount = self.owner_fee_escrow;
        self.owner_fee_escrow = 0;
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    fn fresh_vault() -> GameVault {
        GameVault {
            game_id: 7,
            house_pool: 0,
            jackpot_pool: 0,
            owner_fee_escrow: 0,
            total_bets: 0,
            total_rewards_paid: 0,
            total_funded: 0,
            total_claimed: 0,
            total_jackpots_paid: 0,
            total_players: 0,
            bump: 0,
            _reserved: [0u8; 16],
        }
    }

    #[test]
    fn game_vault_size_matches_serialization() {
        let bytes = fresh_vault().try_to_vec().unwrap();
        assert_eq!(bytes.len(), GameVault::SIZE);
    }

    #[test]
    fn bet_credit_then_payouts_conserve_value() {
        let mut v = fresh_vault();

        v.credit_house_funding(10_000).unwrap();
        v.credit_bet(850, 100, 50).unwrap();
        assert_eq!(v.pool_total(), 11_000);
        assert_eq!(v.total_bets, 1);

        v.debit_house_for_payout(500).unwrap();
        assert_eq!(v.house_pool, 10_350);
        assert_eq!(v.total_rewards_paid, 500);

        // deposits (10_000 + 1_000) minus payouts (500)
        assert_eq!(v.pool_total(), 10_500);
    }

    #[test]
    fn payout_shortfall_leaves_pools_untouched() {
        let mut v = fresh_vault();
        v.credit_bet(850, 100, 50).unwrap();

        let err = v.debit_house_for_payout(900);
        assert!(err.is_err());
        assert_eq!(v.house_pool, 850);
        assert_eq!(v.total_rewards_paid, 0);
    }

    #[test]
    fn solvency_gate_uses_post_credit_house_pool() {
        let mut v = fresh_vault();
        v.credit_bet(850, 100, 50).unwrap();

        // worst case 1_000 * 2 = 2_000 > 850
        assert!(v.assert_solvent_for(1_000, 2).is_err());

        v.credit_house_funding(5_000).unwrap();
        assert!(v.assert_solvent_for(1_000, 2).is_ok());
    }

    #[test]
    fn jackpot_payout_is_ninety_percent_floor() {
        let mut v = fresh_vault();
        v.credit_jackpot_funding(1_001).unwrap();

        let paid = v.take_jackpot_payout();
        assert_eq!(paid, 900); // floor(1_001 * 90 / 100)
        assert_eq!(v.jackpot_pool, 101);
        assert_eq!(v.total_jackpots_paid, 900);

        v.jackpot_pool = 0;
        assert_eq!(v.take_jackpot_payout(), 0);
        assert_eq!(v.total_jackpots_paid, 900);
    }

    #[test]
    fn withdrawal_never_touches_jackpot_or_escrow() {
        let mut v = fresh_vault();
        v.credit_bet(850, 100, 50).unwrap();

        assert!(v.debit_house_for_withdrawal(851).is_err());
        v.debit_house_for_withdrawal(850).unwrap();
        assert_eq!(v.house_pool, 0);
        assert_eq!(v.jackpot_pool, 50);
        assert_eq!(v.owner_fee_escrow, 100);
    }
}
