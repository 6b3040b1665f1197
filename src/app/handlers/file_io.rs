//! Handler für die CSV-Datenquelle.

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt Punkte aus der Datei und propagiert Lesefehler.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_points(state, path)
}

/// Merkt sich den Pfad für folgende Load-Anfragen.
pub fn set_data_source_path(state: &mut AppState, path: String) {
    use_cases::file_io::set_data_source_path(state, path);
}
