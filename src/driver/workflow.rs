//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション（依存性注入とコマンドの振り分け）

use anyhow::Result;
use console::style;
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::adapter::build::EsbuildRepository;
use crate::adapter::config::Config;
use crate::adapter::repositories::env_file_credential_repository::EnvFileCredentialRepository;
use crate::adapter::repositories::json_session_repository::JsonSessionRepository;
use crate::adapter::terminal::{DialoguerPrompter, SpinnerReporter};
use crate::adapter::watch::ChangeEvent;
use crate::adapter::yare::HttpYareRepository;
use crate::application::dto::sync_options::{LoginEnv, SyncOptions};
use crate::application::ports::StatusReporter;
use crate::application::services::session_store::SessionStore;
use crate::application::use_cases::authenticate::AuthenticateUseCase;
use crate::application::use_cases::logout::LogoutUseCase;
use crate::application::use_cases::sync_code::SyncCodeUseCase;

use super::cli::{Args, Command};
use super::watch::watch;

type Store = SessionStore<JsonSessionRepository, HttpYareRepository>;
type SyncCode = SyncCodeUseCase<
    EsbuildRepository,
    JsonSessionRepository,
    HttpYareRepository,
    EnvFileCredentialRepository,
>;

/// env ファイルを読み込む（既存の環境変数は上書きしない）
///
/// ファイルが無いのは正常
pub fn load_env_file(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => debug!("Loaded env file {}", path.display()),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No env file at {}", path.display());
        }
        Err(e) => warn!("Failed to load env file {}: {}", path.display(), e),
    }
}

/// 変更検知時に表示する1行
pub fn change_banner(event: &ChangeEvent) -> String {
    format!(
        "[{}] Change detected: {}",
        event.detected_at.format("%H:%M:%S"),
        event.describe()
    )
}

/// Yare Sync Workflow
pub struct SyncWorkflow {
    config: Config,
    reporter: Arc<dyn StatusReporter>,
    yare: Arc<HttpYareRepository>,
    session_store: Arc<Store>,
}

impl SyncWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Result<Self> {
        let reporter: Arc<dyn StatusReporter> = Arc::new(SpinnerReporter::new());
        let yare = Arc::new(HttpYareRepository::new(&config)?);
        let session_repo = Arc::new(JsonSessionRepository::new(config.session_path.clone()));
        let session_store = Arc::new(SessionStore::new(session_repo, yare.clone()));

        Ok(Self {
            config,
            reporter,
            yare,
            session_store,
        })
    }

    /// Execute the selected command
    pub async fn execute(&self, args: Args) -> Result<()> {
        match args.command {
            Command::Sync(sync_args) => self.sync(sync_args.to_options()).await,
            Command::Logout => {
                LogoutUseCase::new(self.session_store.clone(), self.reporter.clone())
                    .execute()
                    .await
            }
        }
    }

    fn sync_use_case(&self, options: &SyncOptions) -> SyncCode {
        let login_env = LoginEnv::from_process_env();
        debug!("Login environment: {:?}", login_env);

        let authenticate = Arc::new(AuthenticateUseCase::new(
            self.session_store.clone(),
            self.yare.clone(),
            Arc::new(EnvFileCredentialRepository::new(options.env.clone())),
            Arc::new(DialoguerPrompter::new()),
            self.reporter.clone(),
            login_env,
        ));
        let builder = Arc::new(EsbuildRepository::new(
            self.config.esbuild_bin.clone(),
            self.config.output_dir.clone(),
        ));

        SyncCodeUseCase::new(builder, authenticate, self.yare.clone(), self.reporter.clone())
    }

    async fn sync(&self, options: SyncOptions) -> Result<()> {
        info!("Starting sync: {:?}", options);
        load_env_file(&options.env);

        let use_case = self.sync_use_case(&options);

        let outcome = use_case.execute(&options).await?;
        debug!("First cycle finished: {:?}", outcome);

        if !options.watch {
            return Ok(());
        }

        let use_case = &use_case;
        let options = &options;
        watch(
            &options.watch_dir,
            std::slice::from_ref(&self.config.output_dir),
            self.reporter.as_ref(),
            move |event| async move {
                println!("{}", style(change_banner(&event)).dim());
                let outcome = use_case.execute(options).await?;
                debug!("Cycle finished: {:?}", outcome);
                Ok(())
            },
        )
        .await
    }
}
