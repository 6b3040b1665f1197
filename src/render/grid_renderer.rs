//! Festes Gitter, Achsen durch den Ursprung und Achsenbeschriftung.

use super::types::{color32, RenderContext};
use crate::core::view_transform::tick_positions;
use crate::core::format_label;
use eframe::egui;
use glam::DVec2;

const LABEL_FONT_SIZE: f32 = 11.0;
const CAPTION_FONT_SIZE: f32 = 14.0;
const LABEL_MARGIN_PX: f32 = 3.0;

/// Zeichnet Gitterlinien, Achsen und die Beschriftungen beider Achsen.
pub(crate) fn render(
    ctx: &RenderContext<'_>,
    labels_x: &[(f64, f64)],
    labels_y: &[(f64, f64)],
) {
    let grid_stroke = egui::Stroke::new(
        ctx.options.grid_line_width_px,
        color32(ctx.options.grid_color),
    );
    let axis_color = color32(ctx.options.axis_color);
    let axis_stroke = egui::Stroke::new(ctx.options.grid_line_width_px * 1.5, axis_color);

    for t in tick_positions() {
        let vertical = [
            ctx.to_screen(DVec2::new(t, -1.0)),
            ctx.to_screen(DVec2::new(t, 1.0)),
        ];
        let horizontal = [
            ctx.to_screen(DVec2::new(-1.0, t)),
            ctx.to_screen(DVec2::new(1.0, t)),
        ];
        ctx.painter.line_segment(vertical, grid_stroke);
        ctx.painter.line_segment(horizontal, grid_stroke);
    }

    // Achsen
    let x_axis = [
        ctx.to_screen(DVec2::new(-1.0, 0.0)),
        ctx.to_screen(DVec2::new(1.0, 0.0)),
    ];
    let y_axis = [
        ctx.to_screen(DVec2::new(0.0, -1.0)),
        ctx.to_screen(DVec2::new(0.0, 1.0)),
    ];
    ctx.painter.line_segment(x_axis, axis_stroke);
    ctx.painter.line_segment(y_axis, axis_stroke);

    let caption_font = egui::FontId::proportional(CAPTION_FONT_SIZE);
    ctx.painter.text(
        x_axis[1] + egui::vec2(-LABEL_MARGIN_PX, -LABEL_MARGIN_PX),
        egui::Align2::RIGHT_BOTTOM,
        "x",
        caption_font.clone(),
        axis_color,
    );
    ctx.painter.text(
        y_axis[1] + egui::vec2(LABEL_MARGIN_PX * 2.0, LABEL_MARGIN_PX),
        egui::Align2::LEFT_TOP,
        "y",
        caption_font,
        axis_color,
    );

    // Beschriftung entlang unterem und linkem Rand
    let label_font = egui::FontId::proportional(LABEL_FONT_SIZE);
    for &(t, label) in labels_x {
        let anchor = ctx.to_screen(DVec2::new(t, -1.0));
        ctx.painter.text(
            anchor + egui::vec2(0.0, -LABEL_MARGIN_PX),
            egui::Align2::CENTER_BOTTOM,
            format_label(label),
            label_font.clone(),
            axis_color,
        );
    }
    for &(t, label) in labels_y {
        let anchor = ctx.to_screen(DVec2::new(-1.0, t));
        ctx.painter.text(
            anchor + egui::vec2(LABEL_MARGIN_PX, 0.0),
            egui::Align2::LEFT_CENTER,
            format_label(label),
            label_font.clone(),
            axis_color,
        );
    }
}
