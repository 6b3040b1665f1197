//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::CurveStatus;
use glam::DVec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Gespeicherte Punkte (nach Zoom, ohne Pan)
    pub point_vertices: Vec<DVec2>,
    /// Kurven-Polyline, leer ohne gültigen Fit
    pub curve_vertices: Vec<DVec2>,
    /// (Gitterposition, Beschriftung) der x-Achse; Positionen fest bei -1.0 … 1.0
    pub labels_x: Vec<(f64, f64)>,
    /// (Gitterposition, Beschriftung) der y-Achse
    pub labels_y: Vec<(f64, f64)>,
    /// Zeichen-Offset für Punkte und Kurve
    pub pan: DVec2,
    /// Status der Kurve (für Fallback-Text)
    pub status: CurveStatus,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve gezeichnet werden kann.
    pub fn has_curve(&self) -> bool {
        !self.curve_vertices.is_empty()
    }
}
