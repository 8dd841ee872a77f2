//! yare.io HTTP Client
//!
//! YareRepositoryのHTTP実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;

use super::models::{
    GamesResponse, LoginRequest, LoginResponse, SessionRequest, UpdateCodeRequest,
};
use crate::adapter::config::Config;
use crate::domain::entities::game_target::GameTarget;
use crate::domain::entities::session::Session;
use crate::domain::repositories::yare_repository::YareRepository;

/// ゲームサーバーURLのテンプレート中のプレースホルダ
const SERVER_PLACEHOLDER: &str = "{server}";

/// HTTPベースの yare.io リポジトリ
pub struct HttpYareRepository {
    client: reqwest::Client,
    api_url: String,
    game_server_url: String,
}

impl HttpYareRepository {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            game_server_url: config.game_server_url.trim_end_matches('/').to_string(),
        })
    }

    fn api(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// ゲームサーバーのURL（例: `https://eu1.yare.io/update-code`）
    fn server_endpoint(&self, server: &str, path: &str) -> String {
        format!(
            "{}/{}",
            self.game_server_url.replace(SERVER_PLACEHOLDER, server),
            path
        )
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl YareRepository for HttpYareRepository {
    async fn verify_session(&self, session: &Session) -> Result<bool> {
        let response = self
            .client
            .post(self.api("validate-session"))
            .json(&SessionRequest {
                user_id: &session.user_id,
                session_id: &session.session_id,
            })
            .send()
            .await
            .context("Session check request failed")?;

        Ok(response.status().is_success())
    }

    async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let response = self
            .client
            .post(self.api("validate"))
            .json(&LoginRequest {
                user_name: username,
                password,
            })
            .send()
            .await
            .context("Login request failed")?
            .error_for_status()
            .context("Login rejected")?;

        let body: LoginResponse = response
            .json()
            .await
            .context("Failed to parse login response")?;

        Ok(body.into())
    }

    async fn get_games(&self, user_id: &str) -> Result<Vec<GameTarget>> {
        let response = self
            .client
            .get(self.api(&format!("active-games/{}", user_id)))
            .send()
            .await
            .context("Game list request failed")?
            .error_for_status()
            .context("Game list rejected")?;

        let body: GamesResponse = response
            .json()
            .await
            .context("Failed to parse game list")?;

        Ok(body.data.into_iter().map(Into::into).collect())
    }

    async fn send_code(
        &self,
        code: &str,
        targets: &[GameTarget],
        session: &Session,
    ) -> Result<bool> {
        let mut all_ok = true;

        for target in targets {
            let result = self
                .client
                .post(self.server_endpoint(&target.server, "update-code"))
                .json(&UpdateCodeRequest {
                    user_id: &session.user_id,
                    session_id: &session.session_id,
                    game_id: &target.id,
                    code,
                })
                .send()
                .await;

            match result {
                Ok(response) if response.status().is_success() => {
                    debug!("Sent code to {}", target);
                }
                Ok(response) => {
                    warn!("{} rejected code: {}", target, response.status());
                    all_ok = false;
                }
                Err(e) => {
                    warn!("Failed to send code to {}: {}", target, e);
                    all_ok = false;
                }
            }
        }

        Ok(all_ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> HttpYareRepository {
        let config = Config {
            api_url: "https://yare.io/".to_string(),
            ..Config::default()
        };
        HttpYareRepository::new(&config).unwrap()
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        assert_eq!(repository().api("validate"), "https://yare.io/validate");
    }

    #[test]
    fn test_server_endpoint_substitutes_server() {
        assert_eq!(
            repository().server_endpoint("eu1", "update-code"),
            "https://eu1.yare.io/update-code"
        );
    }

    #[test]
    fn test_timeout_config_builds_client() {
        let config = Config {
            request_timeout_secs: Some(5),
            ..Config::default()
        };
        assert!(HttpYareRepository::new(&config).is_ok());
    }
}
