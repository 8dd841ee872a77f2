//! # Sync Options DTO
//!
//! 同期コマンドのオプションと環境変数由来のログイン情報

use std::path::PathBuf;

use crate::domain::entities::session::Credentials;

/// 同期オプション
///
/// CLI から1回の起動につき1つ渡され、以後変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// 変更監視を行うかどうか
    pub watch: bool,
    /// 監視対象ディレクトリ
    pub watch_dir: PathBuf,
    /// 最小化を無効にするかどうか
    pub no_minify: bool,
    /// エントリポイントのファイル
    pub file: PathBuf,
    /// プロジェクトの env ファイル
    pub env: PathBuf,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            watch: false,
            watch_dir: PathBuf::from("src"),
            no_minify: false,
            file: PathBuf::from("src/index.ts"),
            env: PathBuf::from(".env"),
        }
    }
}

/// 環境変数 `YARE_LOGIN` / `YARE_PASSWORD` の値
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginEnv {
    pub login: Option<String>,
    pub password: Option<String>,
}

pub const LOGIN_VAR: &str = "YARE_LOGIN";
pub const PASSWORD_VAR: &str = "YARE_PASSWORD";

impl LoginEnv {
    pub fn new(login: Option<String>, password: Option<String>) -> Self {
        Self { login, password }
    }

    /// プロセスの環境変数から読み込む
    pub fn from_process_env() -> Self {
        Self {
            login: std::env::var(LOGIN_VAR).ok(),
            password: std::env::var(PASSWORD_VAR).ok(),
        }
    }

    /// 両方が設定されている場合のみ資格情報を返す（空文字列は未設定扱い）
    pub fn credentials(&self) -> Option<Credentials> {
        match (self.login.as_deref(), self.password.as_deref()) {
            (Some(login), Some(password)) if !login.is_empty() && !password.is_empty() => {
                Some(Credentials::new(login, password))
            }
            _ => None,
        }
    }
}

impl std::fmt::Debug for LoginEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginEnv")
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SyncOptions::default();
        assert!(!options.watch);
        assert!(!options.no_minify);
        assert_eq!(options.file, PathBuf::from("src/index.ts"));
        assert_eq!(options.watch_dir, PathBuf::from("src"));
        assert_eq!(options.env, PathBuf::from(".env"));
    }

    #[test]
    fn test_credentials_require_both_values() {
        let both = LoginEnv::new(Some("alice".into()), Some("pw".into()));
        assert_eq!(both.credentials(), Some(Credentials::new("alice", "pw")));

        let login_only = LoginEnv::new(Some("alice".into()), None);
        assert!(login_only.credentials().is_none());

        let password_only = LoginEnv::new(None, Some("pw".into()));
        assert!(password_only.credentials().is_none());
    }

    #[test]
    fn test_empty_values_are_unset() {
        let env = LoginEnv::new(Some(String::new()), Some("pw".into()));
        assert!(env.credentials().is_none());
    }

    #[test]
    fn test_debug_hides_password() {
        let env = LoginEnv::new(Some("alice".into()), Some("secret".into()));
        assert!(!format!("{:?}", env).contains("secret"));
    }
}
