//! Rendering mit dem egui-Painter.

mod curve_renderer;
mod grid_renderer;
mod point_renderer;
mod types;

pub use crate::shared::RenderScene;
use types::RenderContext;

use eframe::egui;

/// Haupt-Renderer für Gitter, Punkte und Kurve.
///
/// Zustandslos: jeder Frame zeichnet die komplette `RenderScene` neu.
#[derive(Default)]
pub struct Renderer;

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self
    }

    /// Rendert die komplette Szene in `rect`.
    pub fn render_scene(&self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        let ctx = RenderContext {
            painter,
            rect,
            options: &scene.options,
        };

        painter.rect_filled(rect, 0.0, types::color32(scene.options.background_color));

        // 1. Gitter, Achsen und Beschriftung (fest, ohne Pan)
        grid_renderer::render(&ctx, &scene.labels_x, &scene.labels_y);

        // 2. Kurve bzw. Fallback-Text
        curve_renderer::render(&ctx, &scene.curve_vertices, scene.pan, &scene.status);

        // 3. Punkte zuoberst
        point_renderer::render(&ctx, &scene.point_vertices, scene.pan);
    }
}
