//! # Credential Repository Trait
//!
//! プロジェクトの env ファイルへの資格情報の追記を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::session::Credentials;

/// 資格情報リポジトリ
///
/// ユーザーが同意した場合のみ、平文で追記する。
/// 既存の行とのマージや重複排除は行わない
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// 資格情報を追記する
    async fn append(&self, credentials: &Credentials) -> Result<()>;

    /// 追記先の表示名
    fn location(&self) -> String;
}
