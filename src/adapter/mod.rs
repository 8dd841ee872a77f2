//! Adapter Layer
//!
//! 外部システム（yare.io, esbuild, 端末, ファイルシステム）との統合

pub mod build;
pub mod config;
pub mod repositories;
pub mod terminal;
pub mod watch;
pub mod yare;
