//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod env_file_credential_repository;
pub mod json_session_repository;
