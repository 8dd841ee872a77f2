//! Build Integration
//!
//! バンドラーとの統合

pub mod esbuild;

pub use esbuild::EsbuildRepository;
