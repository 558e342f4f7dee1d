//! # App Coordinator Module
//!
//! The main update loop: advances the animation clock, renders the heading
//! and the pour button, and paints the chart card.
//!
//! ## Application Flow:
//! 1. Apply window styling
//! 2. Replay the timeline at the current frame time (if the pour started)
//! 3. Render the heading and the trigger button
//! 4. Paint the chart scene inside its card
//!
//! The timeline is resampled from the frame clock every pass, so playback
//! speed is independent of frame rate, and the scene is left untouched on
//! frames where nothing animates.

use eframe::egui;

use crate::ui::app_state::FabricWaterVizApp;
use crate::ui::components::theme::colors;
use crate::ui::components::water_chart::renderer::draw_water_chart;
use crate::ui::components::{draw_card_background, setup_chart_style};

const CARD_PADDING: f32 = 16.0;

impl eframe::App for FabricWaterVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_chart_style(ctx);

        // Animation clock: elapsed time since the trigger, from egui's
        // per-frame time rather than the wall clock.
        let now = ctx.input(|i| i.time);
        if let Some(elapsed_ms) = self.animation.elapsed_ms(now) {
            self.timeline.apply(&mut self.scene, elapsed_ms);
            if !self.timeline.is_finished(elapsed_ms) {
                ctx.request_repaint();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new("Fabric Water Use")
                        .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_HEADING),
                );
                ui.add_space(8.0);
                self.draw_pour_button(ui);
                ui.add_space(12.0);
            });

            // Chart card, centered horizontally
            let canvas = egui::vec2(
                self.context.size.canvas_width(&self.context.margin),
                self.context.size.canvas_height(&self.context.margin),
            );
            let card_size = canvas + egui::vec2(CARD_PADDING * 2.0, CARD_PADDING * 2.0);
            let left = (ui.available_width() - card_size.x).max(0.0) / 2.0;
            let card_rect = egui::Rect::from_min_size(
                ui.cursor().min + egui::vec2(left, 0.0),
                card_size,
            );
            draw_card_background(ui, card_rect);
            ui.allocate_rect(card_rect, egui::Sense::hover());

            let chart_rect = egui::Rect::from_min_size(
                card_rect.min + egui::vec2(CARD_PADDING, CARD_PADDING),
                canvas,
            );
            let mut chart_ui =
                ui.child_ui(chart_rect, egui::Layout::top_down(egui::Align::Min), None);
            draw_water_chart(&mut chart_ui, &self.scene, &self.context);
        });
    }
}

impl FabricWaterVizApp {
    /// Draw the one-shot trigger button; disabled forever once fired.
    fn draw_pour_button(&mut self, ui: &mut egui::Ui) {
        let armed = !self.animation.is_fired();

        let button = egui::Button::new(
            egui::RichText::new("Pour water.")
                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                .color(egui::Color32::WHITE),
        )
        .min_size(egui::vec2(120.0, 32.0))
        .rounding(egui::Rounding::same(6.0))
        .fill(if armed {
            colors::ACTIVE_BACKGROUND
        } else {
            colors::INACTIVE_BACKGROUND
        });

        let now = ui.input(|i| i.time);
        if ui.add_enabled(armed, button).clicked() {
            self.pour_water(now);
            ui.ctx().request_repaint();
        }
    }
}
