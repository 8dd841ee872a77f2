//! # Yare Repository Trait
//!
//! yare.io のゲームサービスとの通信を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::game_target::GameTarget;
use crate::domain::entities::session::Session;

/// yare.io リポジトリ
///
/// ログイン、セッション検証、ゲーム一覧取得、コード送信を担当する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait YareRepository: Send + Sync {
    /// セッションがまだ有効か確認する
    async fn verify_session(&self, session: &Session) -> Result<bool>;

    /// ユーザー名とパスワードでログインする
    ///
    /// # Errors
    ///
    /// 資格情報が誤っている、または通信に失敗した場合にエラーを返す
    async fn login(&self, username: &str, password: &str) -> Result<Session>;

    /// ユーザーの進行中ゲームを取得する
    async fn get_games(&self, user_id: &str) -> Result<Vec<GameTarget>>;

    /// コードを全ターゲットへ送信する
    ///
    /// # Returns
    ///
    /// 全体として成功したかどうか（ターゲット単位の結果は得られない）
    async fn send_code(
        &self,
        code: &str,
        targets: &[GameTarget],
        session: &Session,
    ) -> Result<bool>;
}
