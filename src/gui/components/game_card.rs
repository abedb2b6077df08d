use egui::{Color32, RichText, Vec2};

use crate::controller::{ListAction, ListEntry};
use crate::gui::styles::{ACCENT_BLUE, CARD_BG, CARD_BORDER, ERROR_RED, TEXT_SECONDARY};

pub struct GameCard;

impl GameCard {
    /// Draw one list entry. Returns the entry's own action when one of its
    /// buttons is clicked.
    pub fn show(ui: &mut egui::Ui, entry: &ListEntry) -> Option<ListAction> {
        let mut action = None;

        egui::Frame::none()
            .fill(CARD_BG)
            .stroke(egui::Stroke::new(1.0, CARD_BORDER))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(entry.title())
                            .size(16.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.label(RichText::new(entry.id_label()).color(TEXT_SECONDARY));
                });

                ui.label(RichText::new(entry.description_line()).size(13.0));
                ui.label(RichText::new(entry.status_line()).size(13.0));

                ui.add_space(5.0);

                ui.horizontal(|ui| {
                    let edit_button = egui::Button::new(
                        RichText::new("Edit").size(13.0).color(Color32::WHITE),
                    )
                    .fill(ACCENT_BLUE)
                    .min_size(Vec2::new(80.0, 28.0));

                    if ui.add(edit_button).clicked() {
                        action = Some(entry.edit_action());
                    }

                    let delete_button = egui::Button::new(
                        RichText::new("Delete").size(13.0).color(Color32::WHITE),
                    )
                    .fill(ERROR_RED)
                    .min_size(Vec2::new(80.0, 28.0));

                    if ui.add(delete_button).clicked() {
                        action = Some(entry.delete_action());
                    }
                });
            });

        action
    }
}
