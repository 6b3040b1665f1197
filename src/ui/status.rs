//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::format_label;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    let view = state.scene.view();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Punkte: {}", state.point_count()));

            ui.separator();

            ui.label(format!(
                "Skala: {}x | Pan: ({}, {})",
                format_label(view.scale),
                format_label(view.pan.x),
                format_label(view.pan.y)
            ));

            ui.separator();

            ui.label(state.scene.status().message());

            if let Some(msg) = &state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }
        });
    });
}
