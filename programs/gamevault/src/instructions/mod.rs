pub mod bet_record;
pub mod earnings_pay;
pub mod fund_deposit;
pub mod game_register;
pub mod game_update;
pub mod initialize;
pub mod jackpot_configure;
pub mod jackpot_trigger;
pub mod score_add;
pub mod withdraw_fees;
pub mod withdraw_house;

pub use bet_record::*;
pub use earnings_pay::*;
pub use fund_deposit::*;
pub use game_register::*;
pub use game_update::*;
pub use initialize::*;
pub use jackpot_configure::*;
pub use jackpot_trigger::*;
pub use score_add::*;
pub use withdraw_fees::*;
pub use withdraw_house::*;
