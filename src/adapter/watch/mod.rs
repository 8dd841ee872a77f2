//! Watch Integration
//!
//! ファイル変更監視

pub mod fs_watcher;

pub use fs_watcher::{ChangeEvent, EventFilter, FsWatcher};
