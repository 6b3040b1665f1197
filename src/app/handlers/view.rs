//! Handler für Ansicht und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PanDirection;

/// Verschiebt die Ansicht um einen Schritt.
pub fn pan(state: &mut AppState, direction: PanDirection) {
    use_cases::view::pan(state, direction);
}

/// Zoomt um `factor` und propagiert ungültige Faktoren an den Aufrufer.
pub fn zoom(state: &mut AppState, factor: f64) -> anyhow::Result<()> {
    use_cases::view::zoom(state, factor)
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::view::resize(state, size);
}
