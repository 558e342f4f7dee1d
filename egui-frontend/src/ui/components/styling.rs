//! # Styling Module
//!
//! Window-level styling and the card container the chart sits in.

use eframe::egui;

use crate::ui::components::theme::colors;

/// Apply the app-wide visual style.
pub fn setup_chart_style(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = colors::WINDOW_BACKGROUND;
    ctx.set_visuals(visuals);
}

/// Draw a card background with a soft shadow and border.
pub fn draw_card_background(ui: &mut egui::Ui, rect: egui::Rect) {
    let painter = ui.painter();

    // Shadow first, offset down-right
    let shadow_rect = egui::Rect::from_min_size(rect.min + egui::vec2(2.0, 2.0), rect.size());
    painter.rect_filled(shadow_rect, egui::Rounding::same(10.0), colors::CARD_SHADOW);

    painter.rect_filled(rect, egui::Rounding::same(10.0), colors::CARD_BACKGROUND);
    painter.rect_stroke(
        rect,
        egui::Rounding::same(10.0),
        egui::Stroke::new(1.0, colors::CARD_BORDER),
    );
}
