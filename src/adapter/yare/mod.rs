//! yare.io Integration
//!
//! yare.io のHTTP API との統合

pub mod client;
pub mod models;

pub use client::HttpYareRepository;
