//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Dateidialog für die Punktdatei.
pub fn request_data_source(state: &mut AppState) {
    use_cases::file_io::request_data_source_dialog(state);
}
