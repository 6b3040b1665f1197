//! Use-Case-Funktionen für die CSV-Datenquelle.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::core::BulkLoadOutcome;
use crate::data_source;
use anyhow::Context;
use std::path::Path;

/// Öffnet den Datei-Dialog für die Punktdatei über UI-State.
pub fn request_data_source_dialog(state: &mut AppState) {
    state.ui.show_data_source_dialog = true;
}

/// Merkt sich den Pfad der Punktdatei für spätere Load-Anfragen.
pub fn set_data_source_path(state: &mut AppState, path: String) {
    log::info!("Datenquelle gesetzt: {}", path);
    state.options.data_path = path;
}

/// Lädt Punkte aus einer CSV-Datei in die Scene.
///
/// Nach einem erfolgreichen Load ist jeder weitere Load bis zum nächsten
/// Reset ein No-Op. Lesefehler lassen die Punktmenge unverändert.
pub fn load_points(state: &mut AppState, path: String) -> anyhow::Result<()> {
    if state.scene.is_loaded() {
        log::info!("Punkte bereits geladen, Load ignoriert: {}", path);
        state.ui.status_message = Some("Punkte bereits geladen (Reset mit 'r')".to_string());
        return Ok(());
    }

    let points = match data_source::read_points_from_path(Path::new(&path)) {
        Ok(points) => points,
        Err(e) => {
            state.ui.status_message = Some(format!("Laden fehlgeschlagen: {e}"));
            state.ui.last_load_error = Some(e.to_string());
            return Err(e).with_context(|| format!("Punktdatei '{path}' nicht lesbar"));
        }
    };

    let outcome = match state.scene.bulk_load(&points) {
        Ok(outcome) => outcome,
        Err(e) => {
            state.ui.status_message = Some(format!("Laden fehlgeschlagen: {e}"));
            state.ui.last_load_error = Some(e.to_string());
            return Err(e).with_context(|| format!("Punktdatei '{path}' abgelehnt"));
        }
    };

    state.ui.last_load_error = None;
    if let BulkLoadOutcome::Loaded { added } = outcome {
        let msg = format!("{added} Punkte geladen aus {path}");
        log::info!("{}", msg);
        state.ui.status_message = Some(msg);
    }
    Ok(())
}
