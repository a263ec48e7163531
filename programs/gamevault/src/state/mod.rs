pub mod config;
pub mod game_entry;
pub mod game_vault;
pub mod jackpot;
pub mod player_stats;

pub use config::*;
pub use game_entry::*;
pub use game_vault::*;
pub use jackpot::*;
pub use player_stats::*;
