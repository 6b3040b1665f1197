//! Kurven-Polyline bzw. Hinweistext ohne gültige Kurve.

use super::types::{color32, RenderContext};
use crate::core::CurveStatus;
use eframe::egui;
use glam::DVec2;

/// Zeichnet die Polyline um `pan` verschoben oder den Status-Text.
pub(crate) fn render(
    ctx: &RenderContext<'_>,
    curve: &[DVec2],
    pan: DVec2,
    status: &CurveStatus,
) {
    if curve.is_empty() {
        ctx.painter.text(
            ctx.rect.center_top() + egui::vec2(0.0, 12.0),
            egui::Align2::CENTER_TOP,
            status.message(),
            egui::FontId::proportional(16.0),
            color32(ctx.options.axis_color),
        );
        return;
    }

    let points: Vec<egui::Pos2> = curve.iter().map(|&p| ctx.to_screen(p + pan)).collect();
    ctx.painter.add(egui::Shape::line(
        points,
        egui::Stroke::new(
            ctx.options.curve_line_width_px,
            color32(ctx.options.curve_color),
        ),
    ));
}
