//! # Session Repository Trait
//!
//! 認証セッションの永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::session::Session;

/// セッションリポジトリ
///
/// 固定パスに保存された単一のセッションを扱う。
/// 検証は行わない（生の永続化のみ）
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// 保存済みセッションを読み込む
    ///
    /// # Returns
    ///
    /// ファイルが存在しない場合は `None`
    ///
    /// # Errors
    ///
    /// 読み込みまたはパースに失敗した場合にエラーを返す
    async fn load(&self) -> Result<Option<Session>>;

    /// セッションを保存する（既存のファイルは上書き）
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, session: &Session) -> Result<()>;

    /// 保存済みセッションを削除する
    ///
    /// # Returns
    ///
    /// 削除した場合は `true`、もともと存在しなかった場合は `false`
    ///
    /// # Errors
    ///
    /// 削除に失敗した場合にエラーを返す
    async fn clear(&self) -> Result<bool>;
}
