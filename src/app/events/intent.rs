use crate::core::PanDirection;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Linksklick in den Viewport (Pixel relativ zur linken oberen Ecke)
    PointClicked { screen_pos: glam::Vec2 },
    /// Ansicht um einen Schritt verschieben
    PanRequested { direction: PanDirection },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Punkte löschen und Ansicht zurücksetzen
    ResetRequested,
    /// Punkte aus der konfigurierten Datenquelle laden
    LoadFromDataSourceRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Datei-Dialog für die Punktdatei öffnen
    DataSourceDialogRequested,
    /// Punktdatei wurde im Dialog ausgewählt
    DataSourceSelected { path: String },
    /// Anwendung beenden
    ExitRequested,
}
