//! Mapping von AppIntent auf AppCommand.

use super::{AppCommand, AppIntent, AppState};
use crate::core::ViewTransform;

/// Übersetzt einen Intent in eine Folge ausführbarer Commands.
pub(super) fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointClicked { screen_pos } => {
            // Pan wird beim Klick nicht kompensiert
            let position = ViewTransform::screen_to_normalized(screen_pos, state.view.size());
            vec![AppCommand::AddPoint { position }]
        }
        AppIntent::PanRequested { direction } => vec![AppCommand::Pan { direction }],
        AppIntent::ZoomInRequested => vec![AppCommand::Zoom {
            factor: state.options.zoom_step,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::Zoom {
            factor: 1.0 / state.options.zoom_step,
        }],
        AppIntent::ResetRequested => vec![AppCommand::ResetScene],
        AppIntent::LoadFromDataSourceRequested => vec![AppCommand::LoadPoints {
            path: state.options.data_path.clone(),
        }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::DataSourceDialogRequested => vec![AppCommand::RequestDataSourceDialog],
        AppIntent::DataSourceSelected { path } => vec![
            AppCommand::SetDataSourcePath { path: path.clone() },
            AppCommand::LoadPoints { path },
        ],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
