//! Fehlertypen des numerischen Kerns.

use thiserror::Error;

/// Fehler beim Anpassen der geschlossenen Kurve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Weniger als drei Punkte – definierter Zustand, kein Fehlerfall im UI.
    #[error("not enough points: {count} (need at least {minimum})")]
    InsufficientPoints { count: usize, minimum: usize },
    /// Das periodische Gleichungssystem ist für diese Eingabe nicht lösbar.
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },
}

impl CurveError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }
}

/// Fehler von Scene-Operationen. Der Zustand bleibt dabei unverändert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("invalid zoom factor {0}: must be positive and finite, and keep coordinates finite")]
    InvalidZoomFactor(f64),
    /// Bulk-Load abgelehnt, PointSet unverändert.
    #[error("data source rejected: {reason}")]
    DataSource { reason: String },
}
