//! Use-Case-Funktionen für Punkt-Eingaben.

use crate::app::AppState;
use glam::DVec2;

/// Fügt einen Punkt sortiert ein; die Kurve wird sofort neu berechnet.
pub fn add_point(state: &mut AppState, position: DVec2) {
    state.scene.add_point(position.x, position.y);
    log::debug!(
        "Punkt ({:.3}, {:.3}) hinzugefügt, {} Punkte",
        position.x,
        position.y,
        state.scene.count()
    );
}

/// Leert die Punktmenge, setzt Ansicht und Lade-Flag zurück.
pub fn reset(state: &mut AppState) {
    state.scene.reset();
    state.ui.status_message = None;
    state.ui.last_load_error = None;
    log::info!("Scene zurückgesetzt");
}
