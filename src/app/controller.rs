//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Punkte ===
            AppCommand::AddPoint { position } => handlers::editing::add_point(state, position),
            AppCommand::ResetScene => handlers::editing::reset(state),

            // === Ansicht & Viewport ===
            AppCommand::Pan { direction } => handlers::view::pan(state, direction),
            AppCommand::Zoom { factor } => handlers::view::zoom(state, factor)?,
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Datenquelle ===
            AppCommand::LoadPoints { path } => handlers::file_io::load(state, path)?,
            AppCommand::SetDataSourcePath { path } => {
                handlers::file_io::set_data_source_path(state, path)
            }

            // === Dialoge & Anwendung ===
            AppCommand::RequestDataSourceDialog => handlers::dialog::request_data_source(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
