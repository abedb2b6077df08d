use crate::api::{GamePayload, SaveRequest};
use crate::controller::list::EditTarget;
use crate::{Error, Result};

/// Whether a submit creates a new game or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

/// Field values of the game form.
///
/// The identifier can be typed freely until an edit is activated, after
/// which it stays read-only until the form is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameForm {
    game_id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    id_locked: bool,
    default_status: String,
}

impl GameForm {
    pub fn new(default_status: impl Into<String>) -> Self {
        let default_status = default_status.into();
        Self {
            game_id: String::new(),
            name: String::new(),
            description: String::new(),
            status: default_status.clone(),
            id_locked: false,
            default_status,
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// Mutable access to the identifier, `None` while it is locked.
    pub fn game_id_mut(&mut self) -> Option<&mut String> {
        if self.id_locked {
            None
        } else {
            Some(&mut self.game_id)
        }
    }

    pub fn is_id_locked(&self) -> bool {
        self.id_locked
    }

    pub fn mode(&self) -> FormMode {
        if self.game_id.trim().is_empty() {
            FormMode::Create
        } else {
            FormMode::Update
        }
    }

    /// Validate the fields and build the request a submit would issue.
    pub fn save_request(&self) -> Result<SaveRequest> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::Validation("Game name is required".to_string()));
        }

        let game_id = self.game_id.trim();
        let payload = GamePayload {
            game_id: (!game_id.is_empty()).then(|| game_id.to_string()),
            game: name.to_string(),
            description: self.description.trim().to_string(),
            status: self.status.clone(),
        };

        Ok(match self.mode() {
            FormMode::Create => SaveRequest::Create(payload),
            FormMode::Update => SaveRequest::Update {
                game_id: game_id.to_string(),
                payload,
            },
        })
    }

    pub fn begin_edit(&mut self, target: &EditTarget) {
        self.game_id = target.game_id.clone();
        self.name = target.game.clone();
        self.description = target.description.clone();
        self.status = target.status.clone();
        self.id_locked = true;
    }

    pub fn reset(&mut self) {
        self.game_id.clear();
        self.name.clear();
        self.description.clear();
        self.status = self.default_status.clone();
        self.id_locked = false;
    }
}
