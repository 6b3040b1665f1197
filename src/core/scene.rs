//! Scene: Punktmenge + Ansicht + abgeleitete Kurve.
//!
//! Jede Mutation der Punktmenge berechnet die Kurve synchron neu.
//! Fehlerhafte Kommandos werden vor der ersten Mutation abgelehnt.

use super::error::{CurveError, SceneError};
use super::periodic_spline::{PeriodicCurveFitter, MIN_POINTS};
use super::point_set::PointSet;
use super::view_transform::{PanDirection, ViewTransform};
use glam::DVec2;

/// Zustand der abgeleiteten Kurve.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveStatus {
    /// Weniger als drei Punkte: nur Punkte zeichnen
    NotEnoughPoints { count: usize },
    /// Polyline mit `samples` Abtastwerten vorhanden
    Fitted { samples: usize },
    /// Interpolation nicht möglich (z.B. nur zwei verschiedene Punkte)
    Degenerate { reason: String },
}

impl CurveStatus {
    pub fn has_curve(&self) -> bool {
        matches!(self, CurveStatus::Fitted { .. })
    }

    /// Kurztext für Status-Anzeigen.
    pub fn message(&self) -> String {
        match self {
            CurveStatus::NotEnoughPoints { .. } => "Not enough points".to_string(),
            CurveStatus::Fitted { samples } => format!("Curve: {samples} samples"),
            CurveStatus::Degenerate { reason } => format!("Degenerate input: {reason}"),
        }
    }
}

/// Ergebnis eines Bulk-Loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkLoadOutcome {
    /// Punkte übernommen
    Loaded { added: usize },
    /// Bereits geladen seit dem letzten Reset – nichts geändert
    AlreadyLoaded,
}

/// Besitzt PointSet und ViewTransform und hält die Kurve aktuell.
#[derive(Debug, Clone)]
pub struct Scene {
    points: PointSet,
    view: ViewTransform,
    fitter: PeriodicCurveFitter,
    curve: Vec<DVec2>,
    status: CurveStatus,
    loaded: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Leere Scene mit Standard-Fitter und -Ansicht.
    pub fn new() -> Self {
        Self::with_config(PeriodicCurveFitter::default(), ViewTransform::new())
    }

    pub fn with_config(fitter: PeriodicCurveFitter, view: ViewTransform) -> Self {
        Self {
            points: PointSet::new(),
            view,
            fitter,
            curve: Vec::new(),
            status: CurveStatus::NotEnoughPoints { count: 0 },
            loaded: false,
        }
    }

    /// Fügt einen Punkt (normalisierte Koordinaten) hinzu.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.add(x, y);
        self.recompute();
    }

    /// Leert die Punktmenge, die Ansicht bleibt erhalten.
    pub fn clear(&mut self) {
        self.points.clear();
        self.recompute();
    }

    /// Verschiebt die Ansicht; Punkte und Kurve bleiben unverändert.
    pub fn pan(&mut self, direction: PanDirection) {
        self.view.pan(direction);
    }

    /// Skaliert die gespeicherten Punkte und koppelt Ansicht/Beschriftung mit.
    pub fn zoom(&mut self, factor: f64) -> Result<(), SceneError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(SceneError::InvalidZoomFactor(factor));
        }
        // Überlauf der skalierten Koordinaten ablehnen, bevor etwas verändert wird
        let scaled_finite = self.points.iter().all(|p| (*p * factor).is_finite())
            && (self.view.scale * factor).is_finite()
            && (1.0 / factor).is_finite();
        if !scaled_finite {
            return Err(SceneError::InvalidZoomFactor(factor));
        }
        self.points.scale(factor);
        self.view.zoom(factor);
        self.recompute();
        Ok(())
    }

    /// Leert die Punkte, setzt die Ansicht zurück und erlaubt erneutes Laden.
    pub fn reset(&mut self) {
        self.points.clear();
        self.view.reset();
        self.loaded = false;
        self.recompute();
    }

    /// Übernimmt extern gelesene Punkte in Reihenfolge, höchstens einmal pro Reset.
    ///
    /// Nicht-endliche Werte lehnen den gesamten Load ab.
    pub fn bulk_load(&mut self, points: &[DVec2]) -> Result<BulkLoadOutcome, SceneError> {
        if self.loaded {
            return Ok(BulkLoadOutcome::AlreadyLoaded);
        }
        if let Some((row, bad)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(SceneError::DataSource {
                reason: format!("non-finite point ({}, {}) at index {row}", bad.x, bad.y),
            });
        }

        for point in points {
            self.points.add(point.x, point.y);
        }
        self.loaded = true;
        self.recompute();
        Ok(BulkLoadOutcome::Loaded {
            added: points.len(),
        })
    }

    pub fn fitter(&self) -> &PeriodicCurveFitter {
        &self.fitter
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn count(&self) -> usize {
        self.points.count()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn status(&self) -> &CurveStatus {
        &self.status
    }

    /// Gespeicherte Punkte (nach Zoom, ohne Pan).
    pub fn point_vertices(&self) -> &[DVec2] {
        self.points.points()
    }

    /// Abgetastete Kurve, leer ohne gültigen Fit.
    pub fn curve_vertices(&self) -> &[DVec2] {
        &self.curve
    }

    /// Beschriftungen (x, y).
    pub fn labels(&self) -> (&[f64], &[f64]) {
        (&self.view.labels_x, &self.view.labels_y)
    }

    fn recompute(&mut self) {
        let count = self.points.count();
        if count < MIN_POINTS {
            self.curve.clear();
            self.status = CurveStatus::NotEnoughPoints { count };
            return;
        }

        match self.fitter.polyline(self.points.points()) {
            Ok(polyline) => {
                self.status = CurveStatus::Fitted {
                    samples: polyline.len(),
                };
                self.curve = polyline;
            }
            Err(CurveError::InsufficientPoints { count, .. }) => {
                self.curve.clear();
                self.status = CurveStatus::NotEnoughPoints { count };
            }
            Err(CurveError::DegenerateInput { reason }) => {
                log::warn!("Kurve nicht berechenbar: {}", reason);
                self.curve.clear();
                self.status = CurveStatus::Degenerate { reason };
            }
        }
    }
}
