//! # Sync Errors
//!
//! 終了コードを伴う失敗の分類

use std::path::PathBuf;
use thiserror::Error;

/// 「リソースが見つからない」系の終了コード
pub const EXIT_NOT_FOUND: i32 = 9;
/// ビルドツールの失敗などの終了コード
pub const EXIT_FAILURE: i32 = 1;

/// プロセスを終了させる失敗
#[derive(Debug, Error)]
pub enum SyncError {
    /// エントリポイントが存在しない
    #[error("Entrypoint not found: {}", .0.display())]
    EntrypointNotFound(PathBuf),

    /// 監視ディレクトリが存在しない
    #[error("Watch directory not found: {}", .0.display())]
    WatchDirNotFound(PathBuf),

    /// バンドラーの失敗
    #[error("Build failed: {0:#}")]
    Build(#[source] anyhow::Error),

    /// 環境変数の資格情報でのログイン失敗
    #[error("Login with YARE_LOGIN/YARE_PASSWORD failed: {source:#}")]
    Login {
        #[source]
        source: anyhow::Error,
    },

    /// セッションファイルの削除失敗
    #[error("Failed to log out: {source:#}")]
    Logout {
        #[source]
        source: anyhow::Error,
    },
}

impl SyncError {
    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::EntrypointNotFound(_) | SyncError::WatchDirNotFound(_) => EXIT_NOT_FOUND,
            SyncError::Build(_) | SyncError::Login { .. } | SyncError::Logout { .. } => {
                EXIT_FAILURE
            }
        }
    }
}

/// 任意のエラーから終了コードを決める
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<SyncError>()
        .map(SyncError::exit_code)
        .unwrap_or(EXIT_FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_exit_codes() {
        assert_eq!(
            SyncError::EntrypointNotFound(PathBuf::from("src/index.ts")).exit_code(),
            9
        );
        assert_eq!(SyncError::WatchDirNotFound(PathBuf::from("src")).exit_code(), 9);
    }

    #[test]
    fn test_failure_exit_codes() {
        assert_eq!(SyncError::Build(anyhow::anyhow!("boom")).exit_code(), 1);
        assert_eq!(
            SyncError::Login {
                source: anyhow::anyhow!("bad password")
            }
            .exit_code(),
            1
        );
        assert_eq!(
            SyncError::Logout {
                source: anyhow::anyhow!("permission denied")
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_exit_code_for_downcasts() {
        let err: anyhow::Error = SyncError::EntrypointNotFound(PathBuf::from("x")).into();
        assert_eq!(exit_code_for(&err), 9);

        let other = anyhow::anyhow!("unexpected");
        assert_eq!(exit_code_for(&other), 1);
    }

    #[test]
    fn test_error_messages() {
        let err = SyncError::EntrypointNotFound(PathBuf::from("src/index.ts"));
        assert_eq!(err.to_string(), "Entrypoint not found: src/index.ts");

        let err = SyncError::Login {
            source: anyhow::anyhow!("invalid credentials"),
        };
        assert_eq!(
            err.to_string(),
            "Login with YARE_LOGIN/YARE_PASSWORD failed: invalid credentials"
        );
    }
}
