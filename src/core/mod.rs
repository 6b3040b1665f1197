//! Core-Domänentypen: Punktmenge, periodische Spline, Ansicht, Scene.

pub mod cyclic_solver;
pub mod error;
/// Geschlossene interpolierende Kurve
///
/// - PeriodicCurveFitter: Parameter, Knoten, Gleichungssystem, Abtastung
/// - ClosedCurve: ausgewertete B-Spline einer Periode
pub mod periodic_spline;
pub mod point_set;
pub mod scene;
pub mod view_transform;

pub use cyclic_solver::{CyclicTridiagonal, SolverError};
pub use error::{CurveError, SceneError};
pub use periodic_spline::{ClosedCurve, Parametrization, PeriodicCurveFitter, MIN_POINTS};
pub use point_set::PointSet;
pub use scene::{BulkLoadOutcome, CurveStatus, Scene};
pub use view_transform::{format_label, PanDirection, ViewTransform};
