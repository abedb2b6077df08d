use crate::api::Game;

/// Values handed to the form when an entry's Edit control is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub game_id: String,
    pub game: String,
    pub description: String,
    pub status: String,
}

/// What an entry's controls do when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Edit(EditTarget),
    Delete { game_id: String },
}

/// One rendered row of the game list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    game: Game,
}

impl ListEntry {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_id(&self) -> &str {
        &self.game.game_id
    }

    pub fn title(&self) -> &str {
        &self.game.game
    }

    pub fn id_label(&self) -> String {
        format!("(ID: {})", self.game.game_id)
    }

    pub fn description_line(&self) -> String {
        format!("Description: {}", self.game.description)
    }

    pub fn status_line(&self) -> String {
        format!("Status: {}", self.game.status)
    }

    pub fn edit_action(&self) -> ListAction {
        ListAction::Edit(EditTarget {
            game_id: self.game.game_id.clone(),
            game: self.game.game.clone(),
            description: self.game.description.clone(),
            status: self.game.status.clone(),
        })
    }

    pub fn delete_action(&self) -> ListAction {
        ListAction::Delete {
            game_id: self.game.game_id.clone(),
        }
    }
}

/// Rebuild the whole list in backend order.
pub fn render(games: Vec<Game>) -> Vec<ListEntry> {
    games.into_iter().map(ListEntry::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, name: &str) -> Game {
        Game {
            game_id: id.to_string(),
            game: name.to_string(),
            description: format!("{} description", name),
            status: "active".to_string(),
            created: String::new(),
            deleted: false,
        }
    }

    #[test]
    fn test_render_keeps_backend_order() {
        let entries = render(vec![game("2", "Go"), game("1", "Chess"), game("3", "Shogi")]);
        let titles: Vec<_> = entries.iter().map(ListEntry::title).collect();
        assert_eq!(titles, ["Go", "Chess", "Shogi"]);
    }

    #[test]
    fn test_entry_lines() {
        let entry = ListEntry::new(game("1", "Chess"));
        assert_eq!(entry.id_label(), "(ID: 1)");
        assert_eq!(entry.description_line(), "Description: Chess description");
        assert_eq!(entry.status_line(), "Status: active");
    }

    #[test]
    fn test_entry_actions_carry_own_values() {
        let entries = render(vec![game("1", "Chess"), game("2", "Go")]);

        assert_eq!(
            entries[1].delete_action(),
            ListAction::Delete {
                game_id: "2".to_string()
            }
        );
        match entries[0].edit_action() {
            ListAction::Edit(target) => {
                assert_eq!(target.game_id, "1");
                assert_eq!(target.game, "Chess");
                assert_eq!(target.description, "Chess description");
                assert_eq!(target.status, "active");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }
}
