//! Eingegebene Punkte als gefüllte Kreise.

use super::types::{color32, RenderContext};
use glam::DVec2;

/// Zeichnet alle Punkte um `pan` verschoben.
pub(crate) fn render(ctx: &RenderContext<'_>, points: &[DVec2], pan: DVec2) {
    let radius = ctx.options.point_size_px * 0.5;
    let color = color32(ctx.options.point_color);
    for &point in points {
        ctx.painter
            .circle_filled(ctx.to_screen(point + pan), radius, color);
    }
}
