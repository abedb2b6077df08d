use egui::RichText;

use crate::gui::styles::{ERROR_BG, ERROR_RED};

/// The error region. Hidden while there is no message.
pub struct ErrorBanner;

impl ErrorBanner {
    pub fn show(ui: &mut egui::Ui, message: Option<&str>) {
        let Some(message) = message else {
            return;
        };

        egui::Frame::none()
            .fill(ERROR_BG)
            .stroke(egui::Stroke::new(1.0, ERROR_RED))
            .rounding(egui::Rounding::same(5.0))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(message).size(14.0).color(ERROR_RED));
            });

        ui.add_space(10.0);
    }
}
