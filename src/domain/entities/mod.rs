//! # Domain Entities
//!
//! ビジネスエンティティ

pub mod game_target;
pub mod session;

pub use game_target::GameTarget;
pub use session::{Credentials, Session};
