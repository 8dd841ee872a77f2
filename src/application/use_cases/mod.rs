//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **AuthenticateUseCase**: 有効なセッションの取得
//! - **SyncCodeUseCase**: ビルドとアップロードの1サイクル
//! - **LogoutUseCase**: セッションの削除

pub mod authenticate;
pub mod logout;
pub mod sync_code;
