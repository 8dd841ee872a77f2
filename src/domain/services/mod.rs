//! # Domain Services
//!
//! Domain Service（ビジネスルール）

pub mod rerun_slot;

pub use rerun_slot::RerunSlot;
