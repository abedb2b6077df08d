use egui::RichText;

use crate::gui::styles::{ERROR_RED, TEXT_SECONDARY};

pub struct ConfirmDialog;

impl ConfirmDialog {
    /// `Some(true)` on confirm, `Some(false)` on cancel, `None` while open.
    pub fn show(ctx: &egui::Context, game_id: &str) -> Option<bool> {
        let mut answer = None;

        egui::Window::new("Delete game")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to delete this game?");
                ui.label(RichText::new(format!("ID: {}", game_id)).color(TEXT_SECONDARY));

                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    let delete_button =
                        egui::Button::new(RichText::new("Delete").color(egui::Color32::WHITE))
                            .fill(ERROR_RED);
                    if ui.add(delete_button).clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                });
            });

        answer
    }
}
