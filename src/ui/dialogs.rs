//! Datei-Dialoge (rfd) für die Punktdatei.

use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_data_source_dialog {
        ui_state.show_data_source_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Punktdatei", &["csv"])
            .pick_file()
        {
            events.push(AppIntent::DataSourceSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
