/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Letzte Statusmeldung (z.B. Ergebnis eines Loads)
    pub status_message: Option<String>,
    /// Grund des letzten fehlgeschlagenen Loads
    pub last_load_error: Option<String>,
    /// Datei-Dialog für die Punktdatei anzeigen
    pub show_data_source_dialog: bool,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
