pub mod initialize_exchange;
pub mod update_config;
pub mod set_paused;
pub mod fund_reserve;
pub mod withdraw_lock_proceeds;
pub mod lock_tokens;
pub mod claim_release;
pub mod query_position;

pub use initialize_exchange::*;
pub use update_config::*;
pub use set_paused::*;
pub use fund_reserve::*;
pub use withdraw_lock_proceeds::*;
pub use lock_tokens::*;
pub use claim_release::*;
pub use query_position::*;
