//! Use-Case-Funktionen für Pan, Zoom und Viewport.

use crate::app::AppState;
use crate::core::PanDirection;
use anyhow::Context;

/// Verschiebt die Ansicht um einen Pan-Schritt.
pub fn pan(state: &mut AppState, direction: PanDirection) {
    state.scene.pan(direction);
}

/// Skaliert Punkte und Beschriftungen; ungültige Faktoren ändern nichts.
pub fn zoom(state: &mut AppState, factor: f64) -> anyhow::Result<()> {
    state
        .scene
        .zoom(factor)
        .with_context(|| format!("Zoom um Faktor {factor} abgelehnt"))?;
    log::debug!("Zoom: Skala {}", state.scene.view().scale);
    Ok(())
}

/// Aktualisiert die Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
