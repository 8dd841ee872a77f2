//! # Authenticate Use Case
//!
//! 有効なセッションを取得するユースケース

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::application::dto::sync_options::LoginEnv;
use crate::application::error::SyncError;
use crate::application::ports::{Prompter, StatusReporter};
use crate::application::services::session_store::SessionStore;
use crate::domain::entities::session::{Credentials, Session};
use crate::domain::repositories::credential_repository::CredentialRepository;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::domain::repositories::yare_repository::YareRepository;

/// 認証ユースケース
///
/// 1. 保存済みの有効なセッションがあれば再利用
/// 2. `YARE_LOGIN` / `YARE_PASSWORD` が両方あれば1回だけログイン（失敗は致命的）
/// 3. それ以外は成功するまで対話ログインを繰り返す
///
/// 新しく取得したセッションは経路にかかわらず保存する
pub struct AuthenticateUseCase<R, Y, C>
where
    R: SessionRepository,
    Y: YareRepository,
    C: CredentialRepository,
{
    session_store: Arc<SessionStore<R, Y>>,
    yare: Arc<Y>,
    credentials: Arc<C>,
    prompter: Arc<dyn Prompter>,
    reporter: Arc<dyn StatusReporter>,
    login_env: LoginEnv,
}

impl<R, Y, C> AuthenticateUseCase<R, Y, C>
where
    R: SessionRepository,
    Y: YareRepository,
    C: CredentialRepository,
{
    pub fn new(
        session_store: Arc<SessionStore<R, Y>>,
        yare: Arc<Y>,
        credentials: Arc<C>,
        prompter: Arc<dyn Prompter>,
        reporter: Arc<dyn StatusReporter>,
        login_env: LoginEnv,
    ) -> Self {
        Self {
            session_store,
            yare,
            credentials,
            prompter,
            reporter,
            login_env,
        }
    }

    /// 有効なセッションを返す
    ///
    /// # Errors
    ///
    /// 環境変数でのログインに失敗した場合は [`SyncError::Login`]。
    /// 対話入力が中断された場合はそのエラー
    pub async fn execute(&self) -> Result<Session> {
        if let Some(session) = self.session_store.load().await {
            return Ok(session);
        }

        let session = match self.login_env.credentials() {
            Some(credentials) => self.login_from_env(&credentials).await?,
            None => self.login_interactive().await?,
        };

        if let Err(e) = self.session_store.save(&session).await {
            // セッション自体は使えるので続行する
            warn!("Failed to save session: {:#}", e);
            self.reporter
                .warn("Could not save the session, you will be asked to log in again next time");
        }

        Ok(session)
    }

    async fn login_from_env(&self, credentials: &Credentials) -> Result<Session> {
        self.reporter
            .start(&format!("Logging in as {}", credentials.username));

        match self
            .yare
            .login(&credentials.username, &credentials.password)
            .await
        {
            Ok(session) => {
                info!("Logged in from environment as {}", credentials.username);
                Ok(session)
            }
            Err(source) => {
                let error = SyncError::Login { source };
                self.reporter.fail(&error.to_string());
                Err(error.into())
            }
        }
    }

    async fn login_interactive(&self) -> Result<Session> {
        self.reporter.warn("Not logged in");

        // 回数制限なし（ユーザーが中断するまで繰り返す）
        let (credentials, session) = loop {
            let username = self.prompter.input("Username").await?;
            let password = self.prompter.password("Password").await?;

            match self.yare.login(&username, &password).await {
                Ok(session) => break (Credentials::new(username, password), session),
                Err(e) => {
                    info!("Interactive login failed: {:#}", e);
                    self.reporter.warn("Invalid username or password, try again");
                }
            }
        };

        self.offer_to_save(&credentials).await?;

        Ok(session)
    }

    async fn offer_to_save(&self, credentials: &Credentials) -> Result<()> {
        let location = self.credentials.location();
        let prompt = format!(
            "Save login to {}? (stored unencrypted, in plain text)",
            location
        );

        if !self.prompter.confirm(&prompt, false).await? {
            return Ok(());
        }

        match self.credentials.append(credentials).await {
            Ok(()) => self
                .reporter
                .succeed(&format!("Saved login to {}", location)),
            Err(e) => {
                warn!("Failed to append credentials: {:#}", e);
                self.reporter
                    .warn(&format!("Could not save login to {}", location));
            }
        }

        Ok(())
    }
}
