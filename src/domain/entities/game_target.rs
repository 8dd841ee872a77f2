//! # GameTarget Entity
//!
//! アップロード先ゲームのドメインエンティティ

use serde::{Deserialize, Serialize};
use std::fmt;

/// アップロード先（サーバー + ゲームID）
///
/// 進行中のゲームは実行ごとに変わるため、同期サイクルのたびに取得し直す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTarget {
    pub server: String,
    pub id: String,
}

impl GameTarget {
    pub fn new(server: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            id: id.into(),
        }
    }

    /// 複数のターゲットを `a/1, b/2` 形式で列挙
    pub fn join(targets: &[GameTarget]) -> String {
        targets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for GameTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.server, self.id)
    }
}
