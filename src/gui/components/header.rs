use egui::RichText;

pub struct Header;

impl Header {
    pub fn show(ui: &mut egui::Ui, busy: bool, on_refresh: &mut bool) {
        ui.horizontal(|ui| {
            ui.heading(
                RichText::new("Games")
                    .size(22.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled_ui(!busy, |ui| {
                    if ui.button(RichText::new("Refresh").size(14.0)).clicked() {
                        *on_refresh = true;
                    }
                });

                if busy {
                    ui.spinner();
                }
            });
        });
    }
}
