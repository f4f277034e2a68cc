//! Light purple/pink palette applied once at startup.

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(243, 232, 255);
pub const PINK: egui::Color32 = egui::Color32::from_rgb(219, 39, 119);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(233, 213, 255);

const PAGE_FILL: egui::Color32 = egui::Color32::from_rgb(250, 245, 255);
const RADIUS: u8 = 10;

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PAGE_FILL;
    visuals.window_fill = CARD_FILL;
    visuals.faint_bg_color = ACCENT_SOFT;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);

    let radius = egui::CornerRadius::same(RADIUS);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;
    visuals
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(1.5, CARD_STROKE))
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::same(20))
}

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new(text).size(36.0).strong().color(ACCENT));
        ui.add_space(20.0);
    });
}
