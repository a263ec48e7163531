use anchor_lang::prelude::*;

// Every money movement gets an event so off-chain indexers can reconcile
// pool balances against the running totals on GameVault.

#[event]
pub struct BetRecorded {
    pub game_id: u64,
    pub player: Pubkey,
    pub amount: u64,
}

#[event]
pub struct FeesSplit {
    pub game_id: u64,
    pub bet_amount: u64,
    pub house_amount: u64,
    pub owner_fee_amount: u64,
    pub jackpot_amount: u64,
}

#[event]
pub struct EarningsPaid {
    pub game_id: u64,
    pub player: Pubkey,
    pub amount: u64,
    pub points: u64,
}

#[event]
pub struct JackpotPaid {
    pub game_id: u64,
    pub winner: Pubkey,
    pub amount: u64,
    pub period_number: u64,
}

#[event]
pub struct JackpotNoWinner {
    pub game_id: u64,
    pub period_number: u64,
}

#[event]
pub struct PeriodRolled {
    pub game_id: u64,
    pub new_period_number: u64,
    pub period_start: i64,
    pub period_end: i64,
}

#[event]
pub struct GameFunded {
    pub game_id: u64,
    pub funder: Pubkey,
    pub amount: u64,
}

#[event]
pub struct JackpotFunded {
    pub game_id: u64,
    pub funder: Pubkey,
    pub amount: u64,
}

#[event]
pub struct HouseWithdrawn {
    pub game_id: u64,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct OwnerFeesWithdrawn {
    pub game_id: u64,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct GameRegistered {
    pub game_id: u64,
    pub game_authority: Pubkey,
    pub creator: Pubkey,
}
