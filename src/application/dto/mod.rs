//! # Data Transfer Objects

pub mod sync_options;

pub use sync_options::{LoginEnv, SyncOptions};
