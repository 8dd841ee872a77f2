//! Filesystem Watcher
//!
//! notify によるディレクトリの再帰監視。変更は tokio のチャネルへ流す

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::{debug, warn};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// ファイル変更の通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// 変更されたパス
    pub paths: Vec<PathBuf>,
    /// 検知した時刻
    pub detected_at: DateTime<Local>,
}

impl ChangeEvent {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            detected_at: Local::now(),
        }
    }

    /// 表示用の短い説明
    pub fn describe(&self) -> String {
        match self.paths.first() {
            Some(path) if self.paths.len() > 1 => {
                format!("{} (+{} more)", path.display(), self.paths.len() - 1)
            }
            Some(path) => path.display().to_string(),
            None => "unknown path".to_string(),
        }
    }
}

/// 同期のきっかけにしない変更の条件
///
/// 読み取りアクセスと、ビルド成果物など自分自身が書き込むディレクトリ以下の変更を除外する
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    ignored: Vec<PathBuf>,
}

impl EventFilter {
    /// `ignored` 以下の変更を無視するフィルタ
    ///
    /// パスは正規化して保持する（まだ存在しない場合は絶対パス化のみ）
    pub fn new(ignored: &[PathBuf]) -> Self {
        Self {
            ignored: ignored.iter().map(|path| normalize(path)).collect(),
        }
    }

    /// 同期のきっかけになるイベントか
    pub fn accepts(&self, kind: &EventKind, paths: &[PathBuf]) -> bool {
        if !triggers_sync(kind) {
            return false;
        }
        if paths.is_empty() || self.ignored.is_empty() {
            return true;
        }
        !paths
            .iter()
            .all(|path| self.ignored.iter().any(|dir| path.starts_with(dir)))
    }
}

fn normalize(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// 監視ハンドル
///
/// ドロップすると監視が止まる
pub struct FsWatcher {
    _watcher: RecommendedWatcher,
}

impl FsWatcher {
    /// `dir` 以下の変更監視を開始する
    ///
    /// # Arguments
    ///
    /// * `dir` - 監視するディレクトリ
    /// * `filter` - 通知しない変更の条件
    ///
    /// # Returns
    ///
    /// ハンドルと、変更通知を受け取るチャネル
    pub fn start(
        dir: &Path,
        filter: EventFilter,
    ) -> Result<(Self, mpsc::UnboundedReceiver<ChangeEvent>)> {
        let (tx, rx) = mpsc::unbounded_channel();

        // 除外パスと比較できるようにイベントのパスを正規化された形にそろえる
        let dir = std::fs::canonicalize(dir)
            .with_context(|| format!("Failed to resolve {}", dir.display()))?;

        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            match result {
                Ok(event) if filter.accepts(&event.kind, &event.paths) => {
                    // 受信側が閉じていれば何もしない
                    let _ = tx.send(ChangeEvent::new(event.paths));
                }
                Ok(event) => debug!("Ignoring {:?} {:?}", event.kind, event.paths),
                Err(e) => warn!("Watch error: {}", e),
            }
        })
        .context("Failed to create file watcher")?;

        watcher
            .watch(&dir, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;

        Ok((Self { _watcher: watcher }, rx))
    }
}

/// 同期のきっかけになるイベント種別か（読み取りアクセスは除外）
pub fn triggers_sync(kind: &EventKind) -> bool {
    !matches!(kind, EventKind::Access(_))
}
