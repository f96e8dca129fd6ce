pub mod initialize_factory;
pub mod create_token;
pub mod open_holder;
pub mod set_rewards_token;
pub mod set_rewards;
pub mod fund_rewards;
pub mod transfer;
pub mod claim;
pub mod emit_rewards_quote;

pub use initialize_factory::*;
pub use create_token::*;
pub use open_holder::*;
pub use set_rewards_token::*;
pub use set_rewards::*;
pub use fund_rewards::*;
pub use transfer::*;
pub use claim::*;
pub use emit_rewards_quote::*;
