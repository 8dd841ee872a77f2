//! Env File Credential Repository Implementation
//!
//! CredentialRepositoryの実装（プロジェクトの .env に平文で追記）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::application::dto::sync_options::{LOGIN_VAR, PASSWORD_VAR};
use crate::domain::entities::session::Credentials;
use crate::domain::repositories::credential_repository::CredentialRepository;

/// .env ファイルへの追記を行うリポジトリ
///
/// 既存の行は読まない。何度も保存すると同じキーが重複して並ぶ
pub struct EnvFileCredentialRepository {
    path: PathBuf,
}

impl EnvFileCredentialRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 追記する行
    fn format_lines(credentials: &Credentials) -> String {
        format!(
            "\n{}={}\n{}={}\n",
            LOGIN_VAR, credentials.username, PASSWORD_VAR, credentials.password
        )
    }

    fn append_sync(path: &Path, lines: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        file.write_all(lines.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Appended login to {}", path.display());

        Ok(())
    }
}

#[async_trait]
impl CredentialRepository for EnvFileCredentialRepository {
    async fn append(&self, credentials: &Credentials) -> Result<()> {
        let path = self.path.clone();
        let lines = Self::format_lines(credentials);
        tokio::task::spawn_blocking(move || Self::append_sync(&path, &lines))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
