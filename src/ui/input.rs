//! Viewport-Input-Handling: Maus-Klicks und Tastatur → AppIntent.

use super::keyboard;
use crate::app::AppIntent;

/// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
///
/// Reihenfolge: Größe, Tastatur, Klick. Klickpositionen sind relativ
/// zur linken oberen Ecke des Viewports.
pub fn collect_viewport_events(
    ui: &egui::Ui,
    response: &egui::Response,
    viewport_size: [f32; 2],
) -> Vec<AppIntent> {
    let mut events = vec![AppIntent::ViewportResized {
        size: viewport_size,
    }];

    events.extend(keyboard::collect_keyboard_intents(ui));

    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let local = pointer_pos - response.rect.min;
            events.push(AppIntent::PointClicked {
                screen_pos: glam::Vec2::new(local.x, local.y),
            });
        }
    }

    events
}
