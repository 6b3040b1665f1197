//! Gemeinsame Rendering-Typen.

use crate::core::ViewTransform;
use crate::shared::EditorOptions;
use eframe::egui;
use glam::{DVec2, Vec2};

/// Gemeinsamer Kontext für alle Sub-Renderer eines Frames.
pub(crate) struct RenderContext<'a> {
    /// Painter, auf den Viewport geclippt
    pub painter: &'a egui::Painter,
    /// Viewport-Rechteck in Bildschirmkoordinaten
    pub rect: egui::Rect,
    /// Editor-Optionen (Farben, Größen, etc.)
    pub options: &'a EditorOptions,
}

impl RenderContext<'_> {
    /// Normalisierte Koordinate → Bildschirmposition im Viewport.
    pub fn to_screen(&self, normalized: DVec2) -> egui::Pos2 {
        to_screen(self.rect, normalized)
    }
}

/// Normalisierte Koordinate [-1, 1]² → Bildschirmposition in `rect`.
pub(crate) fn to_screen(rect: egui::Rect, normalized: DVec2) -> egui::Pos2 {
    let local =
        ViewTransform::normalized_to_screen(normalized, Vec2::new(rect.width(), rect.height()));
    egui::pos2(rect.min.x + local.x, rect.min.y + local.y)
}

/// RGBA-Array aus den Optionen → egui-Farbe.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_screen_maps_into_offset_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, 100.0));

        let center = to_screen(rect, DVec2::ZERO);
        let top_left = to_screen(rect, DVec2::new(-1.0, 1.0));

        assert!((center.x - 110.0).abs() < 1e-4);
        assert!((center.y - 70.0).abs() < 1e-4);
        assert!((top_left.x - 10.0).abs() < 1e-4);
        assert!((top_left.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn color32_converts_opaque_white() {
        assert_eq!(color32([1.0, 1.0, 1.0, 1.0]), egui::Color32::WHITE);
    }
}
