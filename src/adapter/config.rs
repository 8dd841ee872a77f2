//! Configuration
//!
//! 設定ファイル（JSON）の読み込み。ファイルが無ければ既定値を使う

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// セッションファイルの既定名（OSの一時ディレクトリ直下）
pub const SESSION_FILE_NAME: &str = "yare-sync-session.json";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// セッションファイルのパス
    pub session_path: PathBuf,
    /// ビルド成果物の出力先
    pub output_dir: PathBuf,
    /// esbuild の実行ファイル
    pub esbuild_bin: String,

    // yare.io
    pub api_url: String,
    /// ゲームサーバーのURL（`{server}` をサーバー名で置き換える）
    pub game_server_url: String,
    /// HTTPタイムアウト（秒）。未指定ならクライアントに任せる
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_path: std::env::temp_dir().join(SESSION_FILE_NAME),
            output_dir: PathBuf::from("dist"),
            esbuild_bin: "esbuild".to_string(),
            api_url: "https://yare.io".to_string(),
            game_server_url: "https://{server}.yare.io".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(expand_path(path))
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        Ok(config.expanded())
    }

    /// ファイルがあれば読み込み、無ければ既定値
    pub fn load_or_default(path: &str) -> Result<Self> {
        if expand_path(path).exists() {
            Self::load(path)
        } else {
            debug!("No config file at {}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// パス中の `~` を展開する
    fn expanded(mut self) -> Self {
        self.session_path = expand_path(&self.session_path.to_string_lossy());
        self.output_dir = expand_path(&self.output_dir.to_string_lossy());
        self
    }
}

/// Expands tilde in path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}
