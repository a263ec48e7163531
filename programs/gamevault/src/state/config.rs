use anchor_lang::prelude::*;

/// Platform configuration PDA.
///
/// Holds the admin authority and the destination wallet for per-game owner
/// fees. This account holds no lamports of its own beyond rent.
#[account]
pub struct Config {
    /// Platform admin authority.
    pub authority: Pubkey,

    /// Wallet allowed to sweep `owner_fee_escrow` balances.
    pub fee_receiver: Pubkey,

    /// Number of games ever registered.
    pub games_registered: u64,

    /// PDA bump for Config.
    pub bump: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 16],
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32 + // authority
            32 + // fee_receiver
            8 +  // games_registered
            1 +  // bump
            16;  // reserved
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    #[test]
    fn config_size_matches_serialization() {
        let cfg = Config {
            authority: Pubkey::default(),
            fee_receiver: Pubkey::default(),
            games_registered: 0,
            bump: 0,
            _reserved: [0; 16],
        };

        let bytes = cfg.try_to_vec().unwrap();
        assert_eq!(bytes.len(), Config::SIZE);
    }
}
