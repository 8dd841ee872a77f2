//! Watch Loop
//!
//! ファイル変更のたびに同期サイクルを再実行する

use anyhow::Result;
use console::style;
use log::{debug, info};
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::adapter::watch::{ChangeEvent, EventFilter, FsWatcher};
use crate::application::error::SyncError;
use crate::application::ports::StatusReporter;
use crate::domain::services::rerun_slot::RerunSlot;

/// 監視モードに入る
///
/// 監視ディレクトリを確認して端末をクリアし、変更のたびに `cycle` を実行する。
/// `ignored` 以下の変更（ビルド成果物の書き込みなど）はきっかけにしない
///
/// # Errors
///
/// * 監視ディレクトリが無い場合は `SyncError::WatchDirNotFound`（`cycle` は呼ばれない）
/// * `cycle` が返した終了すべき失敗
pub async fn watch<F, Fut>(
    dir: &Path,
    ignored: &[PathBuf],
    reporter: &dyn StatusReporter,
    cycle: F,
) -> Result<()>
where
    F: FnMut(ChangeEvent) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let exists = tokio::fs::try_exists(dir).await.unwrap_or(false);
    if !exists {
        let error = SyncError::WatchDirNotFound(dir.to_path_buf());
        reporter.fail(&error.to_string());
        return Err(error.into());
    }

    let (_watcher, events) = FsWatcher::start(dir, EventFilter::new(ignored))?;

    reporter.clear();
    info!("Watching {} (ignoring {:?})", dir.display(), ignored);
    println!(
        "{} Watching {} for changes",
        style("👀").cyan(),
        dir.display()
    );

    run_watch_loop(events, cycle).await
}

/// 変更通知を受けてサイクルを実行し続ける
///
/// サイクルは重ならない。実行中に届いた通知はまとめて1回の再実行になる。
/// `cycle` がエラーを返した場合（終了すべき失敗）はそこで止まる。
/// チャネルが閉じると `Ok(())` で戻る
pub async fn run_watch_loop<F, Fut>(
    mut events: UnboundedReceiver<ChangeEvent>,
    mut cycle: F,
) -> Result<()>
where
    F: FnMut(ChangeEvent) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut slot = RerunSlot::new();

    while let Some(event) = events.recv().await {
        if !slot.trigger() {
            continue;
        }

        let mut latest = event;
        loop {
            let run = cycle(latest.clone());
            tokio::pin!(run);

            let result = loop {
                tokio::select! {
                    result = &mut run => break result,
                    Some(event) = events.recv() => {
                        debug!("Change during sync, queued: {}", event.describe());
                        slot.trigger();
                        latest = event;
                    }
                }
            };
            result?;

            if !slot.complete() {
                break;
            }
        }
    }

    Ok(())
}
