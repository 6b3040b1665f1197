use crate::app::CommandLog;
use crate::core::Scene;
use crate::shared::EditorOptions;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Punktmenge, Ansicht und abgeleitete Kurve
    pub scene: Scene,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Kurve, Schrittweiten, Farben)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State; Fitter und Ansicht folgen den Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            scene: Scene::with_config(options.curve_fitter(), options.view_transform()),
            view: ViewState::new(options.window_size),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.scene.count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
