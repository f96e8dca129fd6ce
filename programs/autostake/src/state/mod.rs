pub mod autostake_token;
pub mod creation_record;
pub mod factory;
pub mod holder;

pub use autostake_token::*;
pub use creation_record::*;
pub use factory::*;
pub use holder::*;
