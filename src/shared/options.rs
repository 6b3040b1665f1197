//! Zentrale Konfiguration für den Closed Spline Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Parametrization, PeriodicCurveFitter, ViewTransform};
use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Abtastwerte der Kurven-Polyline.
pub const CURVE_SAMPLES: usize = 1000;

// ── Ansicht ─────────────────────────────────────────────────────────

/// Pan-Schritt in normalisierten Koordinaten.
pub const PAN_STEP: f64 = 0.1;
/// Beschriftungs-Verschiebung pro Pan-Schritt.
pub const LABEL_STEP: f64 = 1.0;
/// Zoom-Faktor für Hineinzoomen (Herauszoomen nutzt den Kehrwert).
pub const ZOOM_STEP: f64 = 2.0;

// ── Datenquelle ─────────────────────────────────────────────────────

/// Standard-Pfad der Punktdatei (relativ zum Arbeitsverzeichnis).
pub const DATA_PATH: &str = "data/data.csv";

// ── Darstellung ─────────────────────────────────────────────────────

/// Punktgröße in Pixeln.
pub const POINT_SIZE_PX: f32 = 10.0;
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_LINE_WIDTH_PX: f32 = 2.2;
/// Linienstärke des Gitters in Pixeln.
pub const GRID_LINE_WIDTH_PX: f32 = 1.0;
/// Gitterfarbe (RGBA: Grau).
pub const GRID_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
/// Achsenfarbe (RGBA: Fast-Schwarz).
pub const AXIS_COLOR: [f32; 4] = [0.125, 0.133, 0.129, 1.0];
/// Kurvenfarbe (RGBA: Rot).
pub const CURVE_COLOR: [f32; 4] = [0.984, 0.129, 0.129, 1.0];
/// Punktfarbe (RGBA: Grün).
pub const POINT_COLOR: [f32; 4] = [0.355, 0.688, 0.477, 1.0];
/// Hintergrundfarbe (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Fenster ─────────────────────────────────────────────────────────

/// Initiale Fenstergröße [Breite, Höhe] in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `closed_spline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Anzahl Abtastwerte der Polyline
    pub curve_samples: usize,
    /// Parameterzuweisung (uniform / chord_length)
    pub parametrization: Parametrization,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Pan-Schritt in normalisierten Koordinaten
    pub pan_step: f64,
    /// Beschriftungs-Verschiebung pro Pan-Schritt
    pub label_step: f64,
    /// Zoom-Faktor pro Schritt (> 1)
    pub zoom_step: f64,

    // ── Datenquelle ─────────────────────────────────────────────
    /// Pfad der CSV-Punktdatei
    pub data_path: String,

    // ── Darstellung ─────────────────────────────────────────────
    pub point_size_px: f32,
    pub curve_line_width_px: f32,
    pub grid_line_width_px: f32,
    pub grid_color: [f32; 4],
    pub axis_color: [f32; 4],
    pub curve_color: [f32; 4],
    pub point_color: [f32; 4],
    pub background_color: [f32; 4],

    // ── Fenster ─────────────────────────────────────────────────
    pub window_size: [f32; 2],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            curve_samples: CURVE_SAMPLES,
            parametrization: Parametrization::ChordLength,
            pan_step: PAN_STEP,
            label_step: LABEL_STEP,
            zoom_step: ZOOM_STEP,
            data_path: DATA_PATH.to_string(),
            point_size_px: POINT_SIZE_PX,
            curve_line_width_px: CURVE_LINE_WIDTH_PX,
            grid_line_width_px: GRID_LINE_WIDTH_PX,
            grid_color: GRID_COLOR,
            axis_color: AXIS_COLOR,
            curve_color: CURVE_COLOR,
            point_color: POINT_COLOR,
            background_color: BACKGROUND_COLOR,
            window_size: WINDOW_SIZE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Gibt Default zurück bei Fehler.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("closed_spline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("closed_spline_editor.toml")
    }

    /// Ersetzt unbrauchbare Werte durch die Standardwerte.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            log::warn!(
                "zoom_step {} ungültig, verwende {}",
                self.zoom_step,
                defaults.zoom_step
            );
            self.zoom_step = defaults.zoom_step;
        }
        if !(self.pan_step.is_finite() && self.pan_step > 0.0) {
            log::warn!(
                "pan_step {} ungültig, verwende {}",
                self.pan_step,
                defaults.pan_step
            );
            self.pan_step = defaults.pan_step;
        }
        if !self.label_step.is_finite() {
            self.label_step = defaults.label_step;
        }
        self
    }

    /// Fitter-Konfiguration aus den Optionen.
    pub fn curve_fitter(&self) -> PeriodicCurveFitter {
        PeriodicCurveFitter::new(self.curve_samples, self.parametrization)
    }

    /// Ansicht im Ausgangszustand mit den konfigurierten Schrittweiten.
    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform::with_steps(self.pan_step, self.label_step)
    }
}
