//! Keyboard-Shortcuts für den Viewport.
//!
//! Pfeiltasten verschieben, `=`/`+` und `-` zoomen, `r` setzt zurück,
//! `f` lädt die Punktdatei, `o` wählt eine andere, `Escape` beendet.

use crate::app::{AppIntent, PanDirection};

const PAN_KEYS: [(egui::Key, PanDirection); 4] = [
    (egui::Key::ArrowLeft, PanDirection::Left),
    (egui::Key::ArrowRight, PanDirection::Right),
    (egui::Key::ArrowUp, PanDirection::Up),
    (egui::Key::ArrowDown, PanDirection::Down),
];

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.input(|i| {
        // Tastenkürzel mit Modifier gehören dem System
        if i.modifiers.command || i.modifiers.alt {
            return;
        }

        for (key, direction) in PAN_KEYS {
            if i.key_pressed(key) {
                events.push(AppIntent::PanRequested { direction });
            }
        }

        if i.key_pressed(egui::Key::Equals) || i.key_pressed(egui::Key::Plus) {
            events.push(AppIntent::ZoomInRequested);
        }
        if i.key_pressed(egui::Key::Minus) {
            events.push(AppIntent::ZoomOutRequested);
        }
        if i.key_pressed(egui::Key::R) {
            events.push(AppIntent::ResetRequested);
        }
        if i.key_pressed(egui::Key::F) {
            events.push(AppIntent::LoadFromDataSourceRequested);
        }
        if i.key_pressed(egui::Key::O) {
            events.push(AppIntent::DataSourceDialogRequested);
        }
        if i.key_pressed(egui::Key::Escape) {
            events.push(AppIntent::ExitRequested);
        }
    });

    events
}
