//! # Session Entity
//!
//! 認証セッションと資格情報のドメインエンティティ

use serde::{Deserialize, Serialize};
use std::fmt;

/// 認証済みセッション
///
/// yare.io へのアップロードを認可するIDペア。
/// トークンの中身は解釈せず、丸ごと置き換えるだけ（部分更新はしない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub session_id: String,
}

impl Session {
    /// 新しいセッションを作成
    pub fn new(user_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            session_id: session_id.into(),
        }
    }
}

/// ログイン資格情報
///
/// 対話ログイン中のみメモリ上に保持する。
/// `Debug` 出力ではパスワードを伏せる
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
