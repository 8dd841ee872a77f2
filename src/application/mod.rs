//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - Repository traitに依存（実装には依存しない）
//! - 外部システムの詳細は知らない
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **error**: 終了コードを伴うエラー
//! - **ports**: 進捗表示・対話入力のインターフェース
//! - **services**: セッションストア
//! - **use_cases**: ユースケース

pub mod dto;
pub mod error;
pub mod ports;
pub mod services;
pub mod use_cases;
