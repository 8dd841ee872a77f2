//! # Ports
//!
//! 端末とのやり取り（進捗表示・対話入力）のインターフェース

pub mod prompter;
pub mod status_reporter;

pub use prompter::Prompter;
pub use status_reporter::StatusReporter;
