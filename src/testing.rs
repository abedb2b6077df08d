//! In-memory backend used by the controller tests.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::sync::Mutex;

use crate::api::{Game, GamePayload, GamesBackend, SaveRequest};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub payload: Option<GamePayload>,
}

/// Stores games in a `Vec` and records every request it receives.
#[derive(Default)]
pub struct RecordingBackend {
    games: Mutex<Vec<Game>>,
    calls: Mutex<Vec<RecordedCall>>,
    fail_status: Mutex<Option<u16>>,
}

impl RecordingBackend {
    pub fn with_games(games: Vec<Game>) -> Self {
        Self {
            games: Mutex::new(games),
            ..Self::default()
        }
    }

    /// Make every following request fail with this HTTP status.
    pub fn fail_with(&self, code: u16) {
        *self.fail_status.lock().unwrap() = Some(code);
    }

    pub fn recover(&self) {
        *self.fail_status.lock().unwrap() = None;
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn games(&self) -> Vec<Game> {
        self.games.lock().unwrap().clone()
    }

    fn record(&self, method: Method, path: String, payload: Option<GamePayload>) -> Result<()> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path,
            payload,
        });

        match *self.fail_status.lock().unwrap() {
            Some(code) => {
                let status = StatusCode::from_u16(code).unwrap();
                Err(Error::Status {
                    code,
                    reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                })
            }
            None => Ok(()),
        }
    }
}

pub fn game(id: &str, name: &str, status: &str) -> Game {
    Game {
        game_id: id.to_string(),
        game: name.to_string(),
        description: String::new(),
        status: status.to_string(),
        created: String::new(),
        deleted: false,
    }
}

#[async_trait]
impl GamesBackend for RecordingBackend {
    async fn list_games(&self) -> Result<Vec<Game>> {
        self.record(Method::GET, "/games".to_string(), None)?;
        Ok(self.games())
    }

    async fn get_game(&self, game_id: &str) -> Result<Game> {
        self.record(Method::GET, format!("/games/{}", game_id), None)?;
        self.games()
            .into_iter()
            .find(|g| g.game_id == game_id)
            .ok_or_else(|| Error::GameNotFound(game_id.to_string()))
    }

    async fn save(&self, request: &SaveRequest) -> Result<Option<Game>> {
        self.record(
            request.method(),
            request.path(),
            Some(request.payload().clone()),
        )?;

        let payload = request.payload();
        let mut games = self.games.lock().unwrap();
        let saved = match request.game_id() {
            Some(game_id) => {
                let existing = games
                    .iter_mut()
                    .find(|g| g.game_id == game_id)
                    .ok_or_else(|| Error::Status {
                        code: 404,
                        reason: "Not Found".to_string(),
                    })?;
                existing.game = payload.game.clone();
                existing.description = payload.description.clone();
                existing.status = payload.status.clone();
                existing.clone()
            }
            None => {
                let mut created = game(
                    &(games.len() + 1).to_string(),
                    &payload.game,
                    &payload.status,
                );
                created.description = payload.description.clone();
                games.push(created.clone());
                created
            }
        };

        Ok(Some(saved))
    }

    async fn delete_game(&self, game_id: &str) -> Result<()> {
        self.record(Method::DELETE, format!("/games/{}", game_id), None)?;
        self.games.lock().unwrap().retain(|g| g.game_id != game_id);
        Ok(())
    }
}
