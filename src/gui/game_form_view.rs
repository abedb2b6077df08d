use egui::{RichText, TextEdit};

use super::styles::TEXT_SECONDARY;
use crate::controller::{FormMode, GameForm};

pub struct GameFormView;

impl GameFormView {
    /// Draw the form. Returns true when the user asked to save.
    pub fn ui(ui: &mut egui::Ui, form: &mut GameForm, statuses: &[String], enabled: bool) -> bool {
        let mut submit = false;

        ui.add_space(10.0);
        ui.heading(match form.mode() {
            FormMode::Create => "New Game",
            FormMode::Update => "Edit Game",
        });
        ui.add_space(15.0);

        ui.add_enabled_ui(enabled, |ui| {
            ui.label("Game ID");
            if form.is_id_locked() {
                let mut locked_id = form.game_id().to_string();
                ui.add_enabled(false, TextEdit::singleline(&mut locked_id));
                ui.label(
                    RichText::new("The ID cannot change while editing")
                        .size(12.0)
                        .color(TEXT_SECONDARY),
                );
            } else if let Some(game_id) = form.game_id_mut() {
                ui.add(TextEdit::singleline(game_id).hint_text("Leave empty to create"));
            }

            ui.add_space(10.0);

            ui.label("Name");
            let name_response = ui.text_edit_singleline(&mut form.name);

            ui.add_space(10.0);

            ui.label("Description");
            ui.add(TextEdit::multiline(&mut form.description).desired_rows(3));

            ui.add_space(10.0);

            ui.label("Status");
            egui::ComboBox::from_id_salt("status")
                .selected_text(form.status.as_str())
                .show_ui(ui, |ui| {
                    for status in statuses {
                        ui.selectable_value(&mut form.status, status.clone(), status.as_str());
                    }
                });

            ui.add_space(20.0);

            let label = match form.mode() {
                FormMode::Create => "Create",
                FormMode::Update => "Update",
            };
            if ui.button(RichText::new(label).size(16.0)).clicked() {
                submit = true;
            }

            if name_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
        });

        submit
    }
}
