use anchor_lang::prelude::*;

use crate::constants::PCT_DENOM;
use crate::errors::GameVaultErrorCode;

/// The three shares a bet splits into. Always sums exactly to the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetSplit {
    pub house: u64,
    pub owner_fee: u64,
    pub jackpot: u64,
}

/// Splits `amount` by whole-percent fees. Fee shares round down and the
/// house takes the remainder, so no dust is lost to independent rounding.
pub fn split_bet(amount: u64, owner_fee_pct: u8, jackpot_fee_pct: u8) -> Result<BetSplit> {
    let owner_fee = amount
        .checked_mul(owner_fee_pct as u64)
        .ok_or(GameVaultErrorCode::MathOverflow)?
        / PCT_DENOM;
    let jackpot = amount
        .checked_mul(jackpot_fee_pct as u64)
        .ok_or(GameVaultErrorCode::MathOverflow)?
        / PCT_DENOM;

    let house = amount
        .checked_sub(owner_fee)
        .and_then(|rest| rest.checked_sub(jackpot))
        .ok_or(GameVaultErrorCode::MathOverflow)?;

    Ok(BetSplit {
        house,
        owner_fee,
        jackpot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_split_1000_at_10_and_5() {
        let s = split_bet(1_000, 10, 5).unwrap();
        assert_eq!(s.owner_fee, 100);
        assert_eq!(s.jackpot, 50);
        assert_eq!(s.house, 850);
    }

    #[test]
    fn shares_always_sum_to_the_bet() {
        for amount in [1u64, 3, 99, 999, 12_345, u64::MAX / 100] {
            for (o, j) in [(0u8, 0u8), (10, 5), (7, 3), (33, 33), (100, 0)] {
                let s = split_bet(amount, o, j).unwrap();
                assert_eq!(
                    s.house + s.owner_fee + s.jackpot,
                    amount,
                    "dust lost at amount={amount} o={o} j={j}"
                );
            }
        }
    }

    #[test]
    fn fee_rounding_favors_the_house() {
        // 999 * 10% = 99.9 -> 99, 999 * 5% = 49.95 -> 49, house gets 851
        let s = split_bet(999, 10, 5).unwrap();
        assert_eq!(s.owner_fee, 99);
        assert_eq!(s.jackpot, 49);
        assert_eq!(s.house, 851);
    }

    #[test]
    fn oversized_amount_overflows_cleanly() {
        assert!(split_bet(u64::MAX, 10, 5).is_err());
    }
}
