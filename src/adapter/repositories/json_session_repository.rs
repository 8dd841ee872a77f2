//! JSON Session Repository Implementation
//!
//! SessionRepositoryのJSON実装（セッションをJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::entities::session::Session;
use crate::domain::repositories::session_repository::SessionRepository;

/// JSONファイルベースのセッションリポジトリ
///
/// パスは構築時に渡され、以後変わらない
pub struct JsonSessionRepository {
    path: PathBuf,
}

/// セッション（JSON永続化用の内部表現）
#[derive(Debug, Deserialize, Serialize)]
struct SessionJson {
    user_id: String,
    session_id: String,
}

impl JsonSessionRepository {
    /// 新しいリポジトリを作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ファイルからセッションを読み込む（同期処理）
    fn load_sync(path: &Path) -> Result<Option<SessionJson>> {
        if !path.exists() {
            debug!("No session file at {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path).context("Failed to read session file")?;

        let session: SessionJson =
            serde_json::from_str(&content).context("Failed to parse session JSON")?;

        Ok(Some(session))
    }

    /// ファイルにセッションを保存する（同期処理）
    ///
    /// 1回の書き込みで丸ごと上書きする
    fn save_sync(path: &Path, session: &SessionJson) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create session directory")?;
        }

        let json = serde_json::to_string(session).context("Failed to serialize session")?;

        fs::write(path, json).context("Failed to write session file")?;

        info!("Saved session for user {}", session.user_id);

        Ok(())
    }

    /// セッションファイルを削除する（同期処理）
    fn clear_sync(path: &Path) -> Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => {
                info!("Removed session file {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).context("Failed to remove session file"),
        }
    }

    /// JSON形式からDomain形式に変換
    fn to_domain(json: SessionJson) -> Session {
        Session {
            user_id: json.user_id,
            session_id: json.session_id,
        }
    }

    /// Domain形式からJSON形式に変換
    fn from_domain(session: &Session) -> SessionJson {
        SessionJson {
            user_id: session.user_id.clone(),
            session_id: session.session_id.clone(),
        }
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn load(&self) -> Result<Option<Session>> {
        let path = self.path.clone();
        let json = tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(json.map(Self::to_domain))
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let path = self.path.clone();
        let json = Self::from_domain(session);
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &json))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(())
    }

    async fn clear(&self) -> Result<bool> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::clear_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_nonexistent_file() {
        let result = JsonSessionRepository::load_sync(Path::new("/nonexistent/session.json"));
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_load_valid_session() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"user_id": "user-1", "session_id": "abc"}"#)
            .unwrap();

        let session = JsonSessionRepository::load_sync(file.path())
            .unwrap()
            .unwrap();

        assert_eq!(session.user_id, "user-1");
        assert_eq!(session.session_id, "abc");
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        assert!(JsonSessionRepository::load_sync(file.path()).is_err());
    }

    #[test]
    fn test_save_overwrites_previous_session() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("session.json");

        let first = SessionJson {
            user_id: "user-1".to_string(),
            session_id: "old".to_string(),
        };
        let second = SessionJson {
            user_id: "user-1".to_string(),
            session_id: "new".to_string(),
        };
        JsonSessionRepository::save_sync(&path, &first).unwrap();
        JsonSessionRepository::save_sync(&path, &second).unwrap();

        let loaded = JsonSessionRepository::load_sync(&path).unwrap().unwrap();
        assert_eq!(loaded.session_id, "new");

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["user_id"], "user-1");
    }

    #[test]
    fn test_clear_missing_file_returns_false() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");

        assert!(!JsonSessionRepository::clear_sync(&path).unwrap());
    }

    #[tokio::test]
    async fn test_clear_then_load_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonSessionRepository::new(temp_dir.path().join("session.json"));

        repository.save(&Session::new("u", "s")).await.unwrap();
        assert!(repository.load().await.unwrap().is_some());

        assert!(repository.clear().await.unwrap());
        assert!(repository.load().await.unwrap().is_none());
        assert!(!repository.clear().await.unwrap());
    }

    #[test]
    fn test_domain_conversion() {
        let session = Session::new("u1", "s1");
        let json = JsonSessionRepository::from_domain(&session);
        assert_eq!(json.user_id, "u1");

        let back = JsonSessionRepository::to_domain(json);
        assert_eq!(back, session);
    }
}
