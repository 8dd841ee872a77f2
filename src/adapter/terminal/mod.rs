//! Terminal Integration
//!
//! 進捗表示と対話入力

pub mod prompt;
pub mod spinner;

pub use prompt::DialoguerPrompter;
pub use spinner::SpinnerReporter;
