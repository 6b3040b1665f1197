use crate::core::PanDirection;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punkt in normalisierten Koordinaten einfügen
    AddPoint { position: DVec2 },
    /// Ansicht verschieben
    Pan { direction: PanDirection },
    /// Punkte und Beschriftungen um `factor` skalieren
    Zoom { factor: f64 },
    /// Punkte löschen, Ansicht und Lade-Flag zurücksetzen
    ResetScene,
    /// Punkte aus CSV-Datei laden (höchstens einmal pro Reset)
    LoadPoints { path: String },
    /// Datei-Dialog für die Punktdatei anfordern
    RequestDataSourceDialog,
    /// Pfad der Punktdatei setzen
    SetDataSourcePath { path: String },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Anwendung beenden
    RequestExit,
}
