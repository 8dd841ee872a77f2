//! # Logout Use Case
//!
//! 保存済みセッションを削除するユースケース

use anyhow::Result;
use std::sync::Arc;

use crate::application::error::SyncError;
use crate::application::ports::StatusReporter;
use crate::application::services::session_store::SessionStore;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::domain::repositories::yare_repository::YareRepository;

/// ログアウトユースケース
///
/// セッションファイルが無い場合は何もせず「ログインしていない」と表示する
pub struct LogoutUseCase<R: SessionRepository, Y: YareRepository> {
    session_store: Arc<SessionStore<R, Y>>,
    reporter: Arc<dyn StatusReporter>,
}

impl<R: SessionRepository, Y: YareRepository> LogoutUseCase<R, Y> {
    pub fn new(session_store: Arc<SessionStore<R, Y>>, reporter: Arc<dyn StatusReporter>) -> Self {
        Self {
            session_store,
            reporter,
        }
    }

    /// ログアウトする
    ///
    /// # Errors
    ///
    /// 削除に失敗した場合は失敗を表示したうえでエラーを返す
    pub async fn execute(&self) -> Result<()> {
        self.reporter.start("Logging out");

        match self.session_store.clear().await {
            Ok(true) => {
                self.reporter.succeed("Logged out");
                Ok(())
            }
            Ok(false) => {
                self.reporter.warn("Not logged in");
                Ok(())
            }
            Err(source) => {
                let error = SyncError::Logout { source };
                self.reporter.fail(&error.to_string());
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::status_reporter::recording::RecordingReporter;
    use crate::domain::repositories::session_repository::MockSessionRepository;
    use crate::domain::repositories::yare_repository::MockYareRepository;

    fn use_case(
        repository: MockSessionRepository,
        reporter: Arc<RecordingReporter>,
    ) -> LogoutUseCase<MockSessionRepository, MockYareRepository> {
        let store = SessionStore::new(Arc::new(repository), Arc::new(MockYareRepository::new()));
        LogoutUseCase::new(Arc::new(store), reporter)
    }

    #[tokio::test]
    async fn test_logout_removes_session() {
        let mut repository = MockSessionRepository::new();
        repository.expect_clear().times(1).returning(|| Ok(true));
        let reporter = Arc::new(RecordingReporter::new());

        use_case(repository, reporter.clone()).execute().await.unwrap();

        assert_eq!(reporter.succeeded(), vec!["Logged out".to_string()]);
    }

    #[tokio::test]
    async fn test_logout_without_session_is_noop() {
        let mut repository = MockSessionRepository::new();
        repository.expect_clear().returning(|| Ok(false));
        let reporter = Arc::new(RecordingReporter::new());

        use_case(repository, reporter.clone()).execute().await.unwrap();

        assert_eq!(reporter.warned(), vec!["Not logged in".to_string()]);
    }

    #[tokio::test]
    async fn test_logout_failure_is_reported() {
        let mut repository = MockSessionRepository::new();
        repository
            .expect_clear()
            .returning(|| Err(anyhow::anyhow!("permission denied")));
        let reporter = Arc::new(RecordingReporter::new());

        let result = use_case(repository, reporter.clone()).execute().await;

        let err = result.unwrap_err();
        assert_eq!(crate::application::error::exit_code_for(&err), 1);
        assert_eq!(
            reporter.failed(),
            vec!["Failed to log out: permission denied".to_string()]
        );
    }
}
