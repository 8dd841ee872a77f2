//! # Sync Code Use Case
//!
//! ビルド → 認証 → ゲーム一覧取得 → アップロード の1サイクル

use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

use crate::application::dto::sync_options::SyncOptions;
use crate::application::error::SyncError;
use crate::application::ports::StatusReporter;
use crate::application::use_cases::authenticate::AuthenticateUseCase;
use crate::domain::entities::game_target::GameTarget;
use crate::domain::repositories::build_repository::{BuildRepository, BuildRequest};
use crate::domain::repositories::credential_repository::CredentialRepository;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::domain::repositories::yare_repository::YareRepository;

/// サイクルの結果
///
/// いずれもプロセスを終了させない結果（終了すべき失敗は `Err` で返す）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// 全ターゲットへのアップロードに成功
    Uploaded(Vec<GameTarget>),
    /// 進行中のゲームがない
    NoGames,
    /// ゲーム一覧を取得できなかった
    GamesUnavailable,
    /// アップロードに失敗（一部か全部かは区別できない）
    UploadFailed(Vec<GameTarget>),
}

impl SyncOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SyncOutcome::Uploaded(_) | SyncOutcome::NoGames)
    }
}

/// コード同期ユースケース
///
/// 各ステージは前のステージが成功した場合のみ実行する
pub struct SyncCodeUseCase<B, R, Y, C>
where
    B: BuildRepository,
    R: SessionRepository,
    Y: YareRepository,
    C: CredentialRepository,
{
    builder: Arc<B>,
    authenticate: Arc<AuthenticateUseCase<R, Y, C>>,
    yare: Arc<Y>,
    reporter: Arc<dyn StatusReporter>,
}

impl<B, R, Y, C> SyncCodeUseCase<B, R, Y, C>
where
    B: BuildRepository,
    R: SessionRepository,
    Y: YareRepository,
    C: CredentialRepository,
{
    pub fn new(
        builder: Arc<B>,
        authenticate: Arc<AuthenticateUseCase<R, Y, C>>,
        yare: Arc<Y>,
        reporter: Arc<dyn StatusReporter>,
    ) -> Self {
        Self {
            builder,
            authenticate,
            yare,
            reporter,
        }
    }

    /// 1サイクル実行する
    ///
    /// # Errors
    ///
    /// - エントリポイントが無い: [`SyncError::EntrypointNotFound`]
    /// - ビルド失敗: [`SyncError::Build`]
    /// - 認証の致命的な失敗: [`SyncError::Login`] など
    ///
    /// アップロードの失敗はエラーにせず [`SyncOutcome`] で返す
    pub async fn execute(&self, options: &SyncOptions) -> Result<SyncOutcome> {
        let file = options.file.display().to_string();

        let exists = tokio::fs::try_exists(&options.file).await.unwrap_or(false);
        if !exists {
            let error = SyncError::EntrypointNotFound(options.file.clone());
            self.reporter.fail(&error.to_string());
            return Err(error.into());
        }

        self.reporter.start(&format!("Building {}", file));
        let request = BuildRequest {
            entrypoint: options.file.clone(),
            minify: !options.no_minify,
        };
        let code = match self.build(&request).await {
            Ok(code) => code,
            Err(source) => {
                let error = SyncError::Build(source);
                self.reporter.fail(&error.to_string());
                return Err(error.into());
            }
        };
        self.reporter.succeed(&format!("Built {}", file));

        self.reporter.start("Checking session");
        let session = self.authenticate.execute().await?;
        self.reporter
            .succeed(&format!("Logged in as user {}", session.user_id));

        self.reporter.start("Fetching games");
        let games = match self.yare.get_games(&session.user_id).await {
            Ok(games) => games,
            Err(e) => {
                warn!("Failed to fetch games: {:#}", e);
                self.reporter.fail(&format!("Failed to fetch games: {:#}", e));
                return Ok(SyncOutcome::GamesUnavailable);
            }
        };

        if games.is_empty() {
            self.reporter.warn("No active games found");
            return Ok(SyncOutcome::NoGames);
        }

        self.reporter
            .start(&format!("Uploading code to {} game(s)", games.len()));
        let sent = match self.yare.send_code(&code, &games, &session).await {
            Ok(sent) => sent,
            Err(e) => {
                warn!("Upload request failed: {:#}", e);
                false
            }
        };

        if sent {
            info!("Uploaded {} bytes to {} game(s)", code.len(), games.len());
            self.reporter
                .succeed(&format!("Uploaded code to {}", GameTarget::join(&games)));
            Ok(SyncOutcome::Uploaded(games))
        } else {
            self.reporter
                .fail(&format!("Failed to upload code to {}", GameTarget::join(&games)));
            Ok(SyncOutcome::UploadFailed(games))
        }
    }

    /// ビルドして成果物の中身を返す
    async fn build(&self, request: &BuildRequest) -> Result<String> {
        let artifact = self.builder.build(request).await?;
        tokio::fs::read_to_string(&artifact)
            .await
            .with_context(|| format!("Failed to read build output {}", artifact.display()))
    }
}
