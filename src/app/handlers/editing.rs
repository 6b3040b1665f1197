//! Handler für Punkt-Eingaben.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Fügt einen Punkt in normalisierten Koordinaten ein.
pub fn add_point(state: &mut AppState, position: DVec2) {
    use_cases::editing::add_point(state, position);
}

/// Leert die Punktmenge und setzt die Ansicht zurück.
pub fn reset(state: &mut AppState) {
    use_cases::editing::reset(state);
}
