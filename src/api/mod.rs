//! REST client for the games backend
//!
//! The backend exposes a single collection:
//!
//! - `GET    /games`           list every game
//! - `GET    /games/{game_id}` fetch one game
//! - `POST   /games`           create a game
//! - `PUT    /games/{game_id}` update a game
//! - `DELETE /games/{game_id}` delete a game
//!
//! Every non-2xx response is turned into [`Error::Status`] carrying the
//! status reason text. Response bodies of failed requests are not parsed.

use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::{Error, Result};

const GAMES_PATH: &str = "games";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub game: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    /// Server-assigned creation timestamp (RFC 3339), empty if unknown
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub deleted: bool,
}

/// Body sent on create and update.
///
/// `game_id` is left out of the JSON entirely on create so the server never
/// sees a stale or accidental identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GamePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    pub game: String,
    pub description: String,
    pub status: String,
}

/// A validated save, either against the collection or against one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(GamePayload),
    Update { game_id: String, payload: GamePayload },
}

impl SaveRequest {
    pub fn method(&self) -> Method {
        match self {
            SaveRequest::Create(_) => Method::POST,
            SaveRequest::Update { .. } => Method::PUT,
        }
    }

    pub fn game_id(&self) -> Option<&str> {
        match self {
            SaveRequest::Create(_) => None,
            SaveRequest::Update { game_id, .. } => Some(game_id.as_str()),
        }
    }

    /// Request path relative to the server root, e.g. `/games/42`
    pub fn path(&self) -> String {
        match self.game_id() {
            Some(game_id) => format!("/{}/{}", GAMES_PATH, game_id),
            None => format!("/{}", GAMES_PATH),
        }
    }

    pub fn payload(&self) -> &GamePayload {
        match self {
            SaveRequest::Create(payload) => payload,
            SaveRequest::Update { payload, .. } => payload,
        }
    }
}

/// The operations the controller needs from a games backend.
#[async_trait]
pub trait GamesBackend: Send + Sync {
    async fn list_games(&self) -> Result<Vec<Game>>;

    async fn get_game(&self, game_id: &str) -> Result<Game>;

    /// Issue a create or update. The returned game is whatever the server
    /// echoed back, if it was parseable.
    async fn save(&self, request: &SaveRequest) -> Result<Option<Game>>;

    async fn delete_game(&self, game_id: &str) -> Result<()>;
}

/// Turn any non-success status into an error carrying its reason text.
pub fn check_response(response: Response) -> Result<Response> {
    let status = response.status();

    if !status.is_success() {
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        return Err(Error::Status {
            code: status.as_u16(),
            reason,
        });
    }

    Ok(response)
}

#[derive(Debug, Clone)]
pub struct GamesClient {
    client: Client,
    base_url: Url,
}

impl GamesClient {
    pub fn new(server_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(server_url)
            .map_err(|e| Error::Config(format!("Invalid server URL '{}': {}", server_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Server URL cannot be used as a base: {}",
                server_url
            )));
        }

        let mut builder =
            Client::builder().user_agent(concat!("game-crud/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.server_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the collection, or of one item when `game_id` is given.
    /// The identifier is pushed as a single encoded path segment.
    pub fn games_url(&self, game_id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::Config(format!("Invalid server URL: {}", self.base_url)))?;
            segments.pop_if_empty().push(GAMES_PATH);
            if let Some(game_id) = game_id {
                segments.push(game_id);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl GamesBackend for GamesClient {
    async fn list_games(&self) -> Result<Vec<Game>> {
        let url = self.games_url(None)?;
        log::debug!("GET {}", url);

        let response = check_response(self.client.get(url).send().await?)?;

        // An empty collection may come back as JSON null
        let games: Option<Vec<Game>> = response.json().await?;
        let games = games.unwrap_or_default();

        log::info!("Fetched {} games", games.len());
        Ok(games)
    }

    async fn get_game(&self, game_id: &str) -> Result<Game> {
        let url = self.games_url(Some(game_id))?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::GameNotFound(game_id.to_string()));
        }

        let game = check_response(response)?.json().await?;
        Ok(game)
    }

    async fn save(&self, request: &SaveRequest) -> Result<Option<Game>> {
        let url = self.games_url(request.game_id())?;
        log::info!("{} {}", request.method(), url);

        let response = self
            .client
            .request(request.method(), url)
            .json(request.payload())
            .send()
            .await?;
        let body = check_response(response)?.bytes().await?;

        if body.is_empty() {
            return Ok(None);
        }

        match serde_json::from_slice::<Game>(&body) {
            Ok(game) => Ok(Some(game)),
            Err(e) => {
                log::debug!("Ignoring unparseable save response body: {}", e);
                Ok(None)
            }
        }
    }

    async fn delete_game(&self, game_id: &str) -> Result<()> {
        let url = self.games_url(Some(game_id))?;
        log::info!("DELETE {}", url);

        check_response(self.client.delete(url).send().await?)?;
        Ok(())
    }
}
