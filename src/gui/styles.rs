use egui::{Color32, Rounding, Stroke, Style, Visuals};

pub fn setup_custom_style(ctx: &egui::Context) {
    let mut style = Style {
        visuals: Visuals::dark(),
        ..Default::default()
    };

    style.visuals.window_fill = Color32::from_rgb(16, 18, 22);
    style.visuals.panel_fill = Color32::from_rgb(22, 24, 28);
    style.visuals.faint_bg_color = Color32::from_rgb(28, 30, 34);
    style.visuals.extreme_bg_color = Color32::from_rgb(12, 14, 18);

    style.visuals.override_text_color = Some(Color32::from_rgb(245, 245, 245));

    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(50, 52, 58);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(200, 200, 200));
    style.visuals.widgets.inactive.rounding = Rounding::same(5.0);

    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(65, 68, 75);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::from_rgb(240, 240, 240));
    style.visuals.widgets.hovered.rounding = Rounding::same(5.0);

    style.visuals.widgets.active.bg_fill = ACCENT_BLUE;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.rounding = Rounding::same(5.0);

    style.visuals.selection.bg_fill = ACCENT_BLUE;
    style.visuals.selection.stroke = Stroke::new(1.5, ACCENT_BLUE);

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

pub const CARD_BG: Color32 = Color32::from_rgb(28, 28, 32);
pub const CARD_BORDER: Color32 = Color32::from_rgb(45, 45, 50);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(0, 121, 214);
pub const ERROR_RED: Color32 = Color32::from_rgb(244, 67, 54);
pub const ERROR_BG: Color32 = Color32::from_rgb(60, 24, 24);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
