//! # Session Store Service
//!
//! 保存済みセッションの読み込み・保存・削除

use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::domain::entities::session::Session;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::domain::repositories::yare_repository::YareRepository;

/// セッションストア
///
/// 読み込み時に yare.io 側で検証し、無効なセッションは存在しないものとして扱う。
/// 無効なファイルを自動で削除することはしない
pub struct SessionStore<R: SessionRepository, Y: YareRepository> {
    repository: Arc<R>,
    yare: Arc<Y>,
}

impl<R: SessionRepository, Y: YareRepository> SessionStore<R, Y> {
    pub fn new(repository: Arc<R>, yare: Arc<Y>) -> Self {
        Self { repository, yare }
    }

    /// 有効なセッションを読み込む
    ///
    /// ファイルが無い、読めない、検証に通らない場合はいずれも `None`
    pub async fn load(&self) -> Option<Session> {
        let session = match self.repository.load().await {
            Ok(Some(session)) => session,
            Ok(None) => {
                debug!("No saved session");
                return None;
            }
            Err(e) => {
                debug!("Ignoring unreadable session file: {:#}", e);
                return None;
            }
        };

        match self.yare.verify_session(&session).await {
            Ok(true) => {
                info!("Reusing saved session for user {}", session.user_id);
                Some(session)
            }
            Ok(false) => {
                debug!("Saved session for user {} is no longer valid", session.user_id);
                None
            }
            Err(e) => {
                warn!("Could not verify saved session: {:#}", e);
                None
            }
        }
    }

    /// セッションを保存する
    pub async fn save(&self, session: &Session) -> Result<()> {
        self.repository.save(session).await
    }

    /// 保存済みセッションを削除する
    ///
    /// # Returns
    ///
    /// 削除した場合は `true`、ログインしていなかった場合は `false`
    pub async fn clear(&self) -> Result<bool> {
        self.repository.clear().await
    }
}
