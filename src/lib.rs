//! Closed Spline Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod data_source;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use crate::core::{
    BulkLoadOutcome, ClosedCurve, CurveError, CurveStatus, Parametrization, PeriodicCurveFitter,
    PointSet, Scene, SceneError,
};
pub use crate::core::{PanDirection, ViewTransform};
pub use data_source::{read_points, read_points_from_path, DataSourceError};
pub use shared::{EditorOptions, RenderScene};
