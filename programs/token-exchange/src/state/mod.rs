pub mod exchange_config;
pub mod lock_position;

pub use exchange_config::*;
pub use lock_position::*;
