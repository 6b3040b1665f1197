//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let view = state.scene.view();

    RenderScene {
        point_vertices: state.scene.point_vertices().to_vec(),
        curve_vertices: state.scene.curve_vertices().to_vec(),
        labels_x: view.x_ticks().collect(),
        labels_y: view.y_ticks().collect(),
        pan: view.pan,
        status: state.scene.status().clone(),
        options: state.options.clone(),
    }
}
