//! # Chart Renderer
//!
//! The painting pass over the retained chart scene. The renderer walks the
//! scene in paint order and draws each element with egui's painter
//! primitives; it never mutates the scene, so everything visual is decided
//! by the builders and the timeline.

use eframe::egui;

use crate::ui::components::water_chart::scene::{ElementKind, Scene, VisualElement};
use crate::ui::components::water_chart::ChartContext;

/// Allocate the chart canvas and paint the scene into it.
pub fn draw_water_chart(ui: &mut egui::Ui, scene: &Scene, ctx: &ChartContext) {
    let canvas = egui::vec2(
        ctx.size.canvas_width(&ctx.margin),
        ctx.size.canvas_height(&ctx.margin),
    );
    let (rect, _response) = ui.allocate_exact_size(canvas, egui::Sense::hover());
    let painter = ui.painter_at(rect);

    for element in scene.paint_order() {
        match element.kind {
            ElementKind::Rect => draw_rect(&painter, rect.min, element),
            ElementKind::Text {
                font_size,
                anchor,
                angle,
            } => draw_text(&painter, rect.min, element, font_size, anchor, angle),
        }
    }
}

fn draw_rect(painter: &egui::Painter, origin: egui::Pos2, element: &VisualElement) {
    let attrs = &element.attrs;
    if attrs.width <= 0.0 || attrs.height <= 0.0 || attrs.opacity <= 0.0 {
        return;
    }

    let rect = egui::Rect::from_min_size(
        origin + egui::vec2(attrs.x, attrs.y),
        egui::vec2(attrs.width, attrs.height),
    );

    painter.rect_filled(rect, 0.0, attrs.fill.gamma_multiply(attrs.opacity));

    let stroke = attrs.stroke.gamma_multiply(attrs.opacity);
    if stroke.a() > 0 {
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, stroke));
    }
}

fn draw_text(
    painter: &egui::Painter,
    origin: egui::Pos2,
    element: &VisualElement,
    font_size: f32,
    anchor: egui::Align2,
    angle: f32,
) {
    let attrs = &element.attrs;
    let Some(ref text) = attrs.text else {
        return;
    };
    if attrs.opacity <= 0.0 {
        return;
    }

    let color = attrs.fill.gamma_multiply(attrs.opacity);
    let font_id = egui::FontId::proportional(font_size);
    let pos = origin + egui::vec2(attrs.x, attrs.y);

    if angle == 0.0 {
        painter.text(pos, anchor, text, font_id, color);
    } else {
        // Rotated text, only used for the vertical axis caption's quarter
        // turn. TextShape rotates about the galley's top-left corner, so
        // place that corner where the turned galley ends up centered on
        // `pos`.
        let galley = painter.layout_no_wrap(text.clone(), font_id, color);
        let size = galley.size();
        let corner = egui::pos2(pos.x - size.y / 2.0, pos.y + size.x / 2.0);
        painter.add(egui::epaint::TextShape::new(corner, galley, color).with_angle(angle));
    }
}
