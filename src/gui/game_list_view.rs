use egui::{Color32, RichText, ScrollArea};

use super::components::GameCard;
use crate::controller::{ListAction, ListEntry};

pub struct GameListView;

impl GameListView {
    pub fn ui(ui: &mut egui::Ui, entries: &[ListEntry], enabled: bool) -> Option<ListAction> {
        let mut action = None;

        ScrollArea::vertical().show(ui, |ui| {
            if entries.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.label(RichText::new("No games yet").size(18.0).color(Color32::GRAY));
                });
                return;
            }

            ui.add_enabled_ui(enabled, |ui| {
                for entry in entries {
                    if let Some(entry_action) = GameCard::show(ui, entry) {
                        action = Some(entry_action);
                    }
                    ui.add_space(8.0);
                }
            });
        });

        action
    }
}
