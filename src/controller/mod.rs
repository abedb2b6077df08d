//! Game list controller
//!
//! Owns the whole view state of the client: the form, the rendered list,
//! the error region and a pending delete confirmation. Front ends only read
//! this state and forward user actions; every network operation goes
//! through the [`GamesBackend`] the controller was built with.
//!
//! Each operation runs its steps strictly in order (request, validate,
//! parse, update state). Any failure ends the operation and lands in the
//! error region.

mod form;
mod list;

pub use form::{FormMode, GameForm};
pub use list::{render, EditTarget, ListAction, ListEntry};

use crate::api::GamesBackend;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub form: GameForm,
    entries: Vec<ListEntry>,
    error: Option<String>,
    pending_delete: Option<String>,
}

impl ViewState {
    pub fn new(default_status: impl Into<String>) -> Self {
        Self {
            form: GameForm::new(default_status),
            entries: Vec::new(),
            error: None,
            pending_delete: None,
        }
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Message shown in the error region, `None` while it is hidden.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Identifier awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn show_error(&mut self, error: &Error) {
        log::warn!("{}", error);
        self.error = Some(error.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

pub struct GameListController<B> {
    backend: B,
    state: ViewState,
}

impl<B: GamesBackend> GameListController<B> {
    pub fn new(backend: B, default_status: impl Into<String>) -> Self {
        Self {
            backend,
            state: ViewState::new(default_status),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Fetch the collection and rebuild the list from scratch.
    pub async fn load(&mut self) {
        match self.backend.list_games().await {
            Ok(games) => self.state.entries = render(games),
            Err(e) => self.state.show_error(&e),
        }
    }

    /// Create or update depending on the identifier field, then reset the
    /// form and reload the list. Nothing is sent if validation fails.
    pub async fn submit(&mut self) {
        let request = match self.state.form.save_request() {
            Ok(request) => request,
            Err(e) => {
                self.state.show_error(&e);
                return;
            }
        };

        match self.backend.save(&request).await {
            Ok(saved) => {
                if let Some(game) = saved {
                    log::debug!("Saved game {} ({})", game.game, game.game_id);
                }
                self.state.form.reset();
                self.state.clear_error();
                self.load().await;
            }
            Err(e) => self.state.show_error(&e),
        }
    }

    /// Route an entry control. Delete only asks for confirmation.
    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::Edit(target) => self.edit(&target),
            ListAction::Delete { game_id } => self.request_delete(game_id),
        }
    }

    pub fn edit(&mut self, target: &EditTarget) {
        log::debug!("Editing game {}", target.game_id);
        self.state.form.begin_edit(target);
    }

    /// Activate edit for a game in the currently rendered list.
    pub fn edit_game(&mut self, game_id: &str) -> Result<()> {
        let action = self
            .state
            .entries
            .iter()
            .find(|entry| entry.game_id() == game_id)
            .map(ListEntry::edit_action)
            .ok_or_else(|| Error::GameNotFound(game_id.to_string()))?;
        self.apply(action);
        Ok(())
    }

    pub fn request_delete(&mut self, game_id: impl Into<String>) {
        self.state.pending_delete = Some(game_id.into());
    }

    pub fn cancel_delete(&mut self) {
        self.state.pending_delete = None;
    }

    /// Delete the game awaiting confirmation and reload the list.
    pub async fn confirm_delete(&mut self) {
        let Some(game_id) = self.state.pending_delete.take() else {
            return;
        };

        match self.backend.delete_game(&game_id).await {
            Ok(()) => self.load().await,
            Err(e) => self.state.show_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{game, RecordingBackend};
    use reqwest::Method;

    fn controller(backend: RecordingBackend) -> GameListController<RecordingBackend> {
        GameListController::new(backend, "active")
    }

    #[tokio::test]
    async fn test_load_renders_every_game() {
        let mut ctl = controller(RecordingBackend::with_games(vec![
            game("1", "Chess", "active"),
            game("2", "Go", "inactive"),
            game("3", "Shogi", "active"),
        ]));

        ctl.load().await;

        let entries = ctl.state().entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].title(), "Go");
        assert_eq!(entries[1].game_id(), "2");
        assert!(ctl.state().error().is_none());
    }

    #[tokio::test]
    async fn test_submit_without_id_creates() {
        let mut ctl = controller(RecordingBackend::default());
        ctl.state_mut().form.name = "Chess".to_string();

        ctl.submit().await;

        let calls = ctl.backend().calls();
        assert_eq!(calls[0].method, Method::POST);
        assert_eq!(calls[0].path, "/games");
        assert!(calls[0].payload.as_ref().unwrap().game_id.is_none());
        assert_eq!(calls[1].method, Method::GET);
        assert_eq!(ctl.state().entries().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_with_id_updates() {
        let mut ctl = controller(RecordingBackend::with_games(vec![game(
            "1", "Chess", "active",
        )]));
        ctl.load().await;
        ctl.edit_game("1").unwrap();
        ctl.state_mut().form.name = "Chess960".to_string();

        ctl.submit().await;

        let calls = ctl.backend().calls();
        let update = &calls[1];
        assert_eq!(update.method, Method::PUT);
        assert_eq!(update.path, "/games/1");
        assert_eq!(update.payload.as_ref().unwrap().game_id.as_deref(), Some("1"));
        assert_eq!(ctl.state().entries()[0].title(), "Chess960");
    }

    #[tokio::test]
    async fn test_blank_name_sends_nothing() {
        let mut ctl = controller(RecordingBackend::default());
        ctl.state_mut().form.name = "   ".to_string();

        ctl.submit().await;

        assert!(ctl.backend().calls().is_empty());
        assert_eq!(ctl.state().error(), Some("Game name is required"));
    }

    #[tokio::test]
    async fn test_successful_save_resets_form_and_hides_error() {
        let mut ctl = controller(RecordingBackend::with_games(vec![game(
            "1", "Chess", "inactive",
        )]));
        ctl.load().await;
        ctl.state_mut().show_error(&Error::Other("stale".to_string()));
        ctl.edit_game("1").unwrap();

        ctl.submit().await;

        let form = &ctl.state().form;
        assert_eq!(form.game_id(), "");
        assert_eq!(form.name, "");
        assert_eq!(form.description, "");
        assert_eq!(form.status, "active");
        assert!(!form.is_id_locked());
        assert!(ctl.state().error().is_none());
    }

    #[tokio::test]
    async fn test_failed_save_shows_status_reason() {
        let backend = RecordingBackend::default();
        backend.fail_with(500);
        let mut ctl = controller(backend);
        ctl.state_mut().form.name = "Chess".to_string();

        ctl.submit().await;

        assert_eq!(ctl.state().error(), Some("Error: Internal Server Error"));
        // Failed save keeps what the user typed
        assert_eq!(ctl.state().form.name, "Chess");
    }

    #[tokio::test]
    async fn test_failed_load_shows_error() {
        let backend = RecordingBackend::default();
        backend.fail_with(503);
        let mut ctl = controller(backend);

        ctl.load().await;

        assert_eq!(ctl.state().error(), Some("Error: Service Unavailable"));
    }

    #[tokio::test]
    async fn test_edit_populates_form_and_locks_id() {
        let mut ctl = controller(RecordingBackend::with_games(vec![game(
            "1", "Chess", "inactive",
        )]));
        ctl.load().await;

        let action = ctl.state().entries()[0].edit_action();
        ctl.apply(action);

        let form = &ctl.state().form;
        assert_eq!(form.game_id(), "1");
        assert_eq!(form.name, "Chess");
        assert_eq!(form.status, "inactive");
        assert!(form.is_id_locked());
        assert_eq!(form.mode(), FormMode::Update);
    }

    #[tokio::test]
    async fn test_edit_unknown_game_fails() {
        let mut ctl = controller(RecordingBackend::default());
        assert!(matches!(ctl.edit_game("42"), Err(Error::GameNotFound(_))));
    }

    #[tokio::test]
    async fn test_confirmed_delete_issues_request_and_reloads() {
        let mut ctl = controller(RecordingBackend::with_games(vec![game(
            "1", "Chess", "active",
        )]));
        ctl.load().await;

        let action = ctl.state().entries()[0].delete_action();
        ctl.apply(action);
        assert_eq!(ctl.state().pending_delete(), Some("1"));

        ctl.confirm_delete().await;

        let calls = ctl.backend().calls();
        assert_eq!(calls[1].method, Method::DELETE);
        assert_eq!(calls[1].path, "/games/1");
        assert_eq!(calls[2].method, Method::GET);
        assert!(ctl.state().entries().is_empty());
        assert!(ctl.state().pending_delete().is_none());
    }

    #[tokio::test]
    async fn test_cancelled_delete_sends_nothing() {
        let mut ctl = controller(RecordingBackend::with_games(vec![game(
            "1", "Chess", "active",
        )]));
        ctl.request_delete("1");
        ctl.cancel_delete();
        ctl.confirm_delete().await;

        assert!(ctl.backend().calls().is_empty());
        assert_eq!(ctl.backend().games().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_delete_shows_error() {
        let backend = RecordingBackend::with_games(vec![game("1", "Chess", "active")]);
        backend.fail_with(404);
        let mut ctl = controller(backend);

        ctl.request_delete("1");
        ctl.confirm_delete().await;

        assert_eq!(ctl.state().error(), Some("Error: Not Found"));
        assert_eq!(ctl.backend().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_error_stays_visible_after_later_load() {
        let backend = RecordingBackend::default();
        backend.fail_with(500);
        let mut ctl = controller(backend);
        ctl.load().await;

        ctl.backend().recover();
        ctl.load().await;

        assert!(ctl.state().error().is_some());
    }
}
