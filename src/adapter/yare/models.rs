//! yare.io API Models
//!
//! リクエスト・レスポンスのJSON表現

use serde::{Deserialize, Serialize};

use crate::domain::entities::game_target::GameTarget;
use crate::domain::entities::session::Session;

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub user_name: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user_id: String,
    /// セッションID
    pub data: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Session::new(response.user_id, response.data)
    }
}

#[derive(Debug, Serialize)]
pub struct SessionRequest<'a> {
    pub user_id: &'a str,
    pub session_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GamesResponse {
    #[serde(default)]
    pub data: Vec<GameJson>,
}

#[derive(Debug, Deserialize)]
pub struct GameJson {
    pub server: String,
    #[serde(alias = "game_id")]
    pub id: String,
}

impl From<GameJson> for GameTarget {
    fn from(game: GameJson) -> Self {
        GameTarget::new(game.server, game.id)
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateCodeRequest<'a> {
    pub user_id: &'a str,
    pub session_id: &'a str,
    pub game_id: &'a str,
    pub code: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_to_session() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"user_id":"u1","data":"sess"}"#).unwrap();
        assert_eq!(Session::from(response), Session::new("u1", "sess"));
    }

    #[test]
    fn test_games_response_accepts_game_id_alias() {
        let response: GamesResponse = serde_json::from_str(
            r#"{"data":[{"server":"eu1","game_id":"g1"},{"server":"us1","id":"g2"}]}"#,
        )
        .unwrap();

        let targets: Vec<GameTarget> = response.data.into_iter().map(Into::into).collect();
        assert_eq!(
            targets,
            vec![GameTarget::new("eu1", "g1"), GameTarget::new("us1", "g2")]
        );
    }

    #[test]
    fn test_games_response_missing_data_is_empty() {
        let response: GamesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_login_request_field_names() {
        let json = serde_json::to_value(LoginRequest {
            user_name: "alice",
            password: "pw",
        })
        .unwrap();
        assert_eq!(json["user_name"], "alice");
        assert_eq!(json["password"], "pw");
    }
}
