use closed_spline_editor::{read_points_from_path, DataSourceError};
use closed_spline_editor::{AppController, AppIntent, AppState};
use std::io::Write;

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Temp-Datei sollte erstellt werden");
    file.write_all(content.as_bytes())
        .expect("Temp-Datei sollte beschreibbar sein");
    file
}

fn path_string(file: &tempfile::NamedTempFile) -> String {
    file.path().to_string_lossy().into_owned()
}

#[test]
fn test_read_points_from_path_keeps_file_order() {
    let file = write_csv("x,y\n0.5,0.1\n-0.5,0.2\n0.0,-0.4\n");

    let points = read_points_from_path(file.path()).expect("CSV sollte lesbar sein");

    assert_eq!(points.len(), 3);
    assert_eq!(points[0], glam::DVec2::new(0.5, 0.1));
    assert_eq!(points[2], glam::DVec2::new(0.0, -0.4));
}

#[test]
fn test_missing_file_reports_open_error() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis sollte erstellt werden");

    let result = read_points_from_path(&dir.path().join("fehlt.csv"));

    assert!(matches!(result, Err(DataSourceError::Open { .. })));
}

#[test]
fn test_selected_file_loads_points_sorted() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let file = write_csv("x,y,label\n0.5,0.1,a\n-0.5,0.2,b\n0.0,-0.4,c\n");

    controller
        .handle_intent(
            &mut state,
            AppIntent::DataSourceSelected {
                path: path_string(&file),
            },
        )
        .expect("Load sollte gelingen");

    assert_eq!(state.point_count(), 3);
    assert!(state.scene.points().is_sorted_by_x());
    assert!(state.scene.status().has_curve());
    assert_eq!(state.options.data_path, path_string(&file));
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|msg| msg.starts_with("3 Punkte geladen")));
}

#[test]
fn test_second_load_before_reset_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let file = write_csv("x,y\n0.5,0.1\n-0.5,0.2\n0.0,-0.4\n");
    state.options.data_path = path_string(&file);

    controller
        .handle_intent(&mut state, AppIntent::LoadFromDataSourceRequested)
        .expect("erster Load sollte gelingen");
    let points = state.scene.point_vertices().to_vec();

    controller
        .handle_intent(&mut state, AppIntent::LoadFromDataSourceRequested)
        .expect("zweiter Load sollte ohne Fehler ignoriert werden");

    assert_eq!(state.scene.point_vertices(), points.as_slice());

    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .expect("Reset sollte gelingen");
    controller
        .handle_intent(&mut state, AppIntent::LoadFromDataSourceRequested)
        .expect("Load nach Reset sollte gelingen");

    assert_eq!(state.point_count(), 3);
}

#[test]
fn test_failed_load_leaves_points_unchanged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.scene.add_point(0.1, 0.1);
    let file = write_csv("x,y\n0.5,0.1\nkaputt,0.2\n");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::DataSourceSelected {
            path: path_string(&file),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.point_count(), 1);
    assert!(!state.scene.is_loaded());
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|msg| msg.starts_with("Laden fehlgeschlagen")));
    assert!(state.ui.last_load_error.is_some());
}
