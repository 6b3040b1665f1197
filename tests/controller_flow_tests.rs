use closed_spline_editor::{AppCommand, AppController, AppIntent, AppState, PanDirection};
use closed_spline_editor::{CurveStatus, PeriodicCurveFitter};
use glam::Vec2;

/// Viewport 800×600: Pixel (400, 300) ist der Ursprung.
fn state_with_viewport() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    state
}

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::PointClicked {
                screen_pos: Vec2::new(x, y),
            },
        )
        .expect("PointClicked sollte ohne Fehler durchlaufen");
}

fn click_triangle(controller: &mut AppController, state: &mut AppState) {
    // (-0.5, 0), (0, 0.5), (0.5, 0)
    click(controller, state, 200.0, 300.0);
    click(controller, state, 400.0, 150.0);
    click(controller, state, 600.0, 300.0);
}

#[test]
fn test_clicks_keep_points_sorted_by_x() {
    let mut controller = AppController::new();
    let mut state = state_with_viewport();

    for (x, y) in [(600.0, 100.0), (100.0, 500.0), (400.0, 200.0), (250.0, 50.0)] {
        click(&mut controller, &mut state, x, y);
        assert!(state.scene.points().is_sorted_by_x());
    }

    let xs: Vec<f64> = state.scene.point_vertices().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![-0.75, -0.375, 0.0, 0.5]);

    match state.command_log.entries().last() {
        Some(AppCommand::AddPoint { position }) => {
            assert!((position.x - (-0.375)).abs() < 1e-9);
            assert!((position.y - (1.0 - 100.0 / 600.0)).abs() < 1e-9);
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_zoom_in_then_out_restores_points() {
    let mut controller = AppController::new();
    let mut state = state_with_viewport();
    for (x, y) in [(123.0, 77.0), (512.0, 431.0), (700.0, 222.0), (301.0, 555.0)] {
        click(&mut controller, &mut state, x, y);
    }
    let before = state.scene.point_vertices().to_vec();

    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .expect("ZoomIn sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ZoomOutRequested)
        .expect("ZoomOut sollte ohne Fehler durchlaufen");

    for (a, b) in before.iter().zip(state.scene.point_vertices()) {
        assert!((a.x - b.x).abs() <= 1e-9);
        assert!((a.y - b.y).abs() <= 1e-9);
    }
    assert!((state.scene.view().scale - 1.0).abs() < 1e-12);
}

#[test]
fn test_curve_passes_through_clicked_points() {
    let mut controller = AppController::new();
    let mut state = state_with_viewport();
    click(&mut controller, &mut state, 150.0, 420.0);
    click(&mut controller, &mut state, 390.0, 120.0);
    click(&mut controller, &mut state, 650.0, 380.0);

    let curve = state.scene.curve_vertices();

    for point in state.scene.point_vertices() {
        let nearest = curve
            .iter()
            .map(|c| c.distance(*point))
            .fold(f64::MAX, f64::min);
        assert!(
            nearest <= 1e-3,
            "Punkt {point:?} zu weit von der Kurve: {nearest}"
        );
    }

    // Exakte Auswertung an den Knotenparametern
    let fitted = PeriodicCurveFitter::default()
        .fit(state.scene.point_vertices())
        .expect("drei verschiedene Punkte");
    for (u, point) in fitted
        .parameters()
        .iter()
        .zip(state.scene.point_vertices())
    {
        let value = fitted.evaluate(*u);
        assert!(value.distance(*point) < 1e-9);
    }
}

#[test]
fn test_polyline_is_closed() {
    let mut controller = AppController::new();
    let mut state = state_with_viewport();
    click_triangle(&mut controller, &mut state);
    click(&mut controller, &mut state, 500.0, 500.0);

    let curve = state.scene.curve_vertices();
    assert_eq!(curve.first(), curve.last());
    assert_eq!(curve.len(), state.options.curve_samples);
}

#[test]
fn test_curve_requires_three_points() {
    let mut controller = AppController::new();
    let mut state = state_with_viewport();

    click(&mut controller, &mut state, 200.0, 300.0);
    click(&mut controller, &mut state, 600.0, 300.0);
    assert!(state.scene.curve_vertices().is_empty());
    assert_eq!(
        state.scene.status(),
        &CurveStatus::NotEnoughPoints { count: 2 }
    );
    let scene = controller.build_render_scene(&state);
    assert!(!scene.has_curve());
    assert_eq!(scene.status.message(), "Not enough points");

    click(&mut controller, &mut state, 400.0, 150.0);
    assert!(!state.scene.curve_vertices().is_empty());
    assert!(controller.build_render_scene(&state).has_curve());
}

#[test]
fn test_triangle_loop_is_symmetric_about_y_axis() {
    let mut controller = AppController::new();
    let mut state = state_with_viewport();
    click_triangle(&mut controller, &mut state);

    let points = state.scene.point_vertices();
    assert_eq!(points[0], glam::DVec2::new(-0.5, 0.0));
    assert_eq!(points[1], glam::DVec2::new(0.0, 0.5));
    assert_eq!(points[2], glam::DVec2::new(0.5, 0.0));

    let curve = state.scene.curve_vertices();
    let y_max = curve.iter().map(|p| p.y).fold(f64::MIN, f64::max);
    let y_min = curve.iter().map(|p| p.y).fold(f64::MAX, f64::min);
    let x_max = curve.iter().map(|p| p.x).fold(f64::MIN, f64::max);
    let x_min = curve.iter().map(|p| p.x).fold(f64::MAX, f64::min);

    assert!((y_max - 0.5).abs() < 1e-3, "y_max = {y_max}");
    assert!(y_min < 0.0 && y_min > -0.3, "y_min = {y_min}");
    assert!((x_max + x_min).abs() < 1e-3, "x-Ausdehnung asymmetrisch");

    // Spiegelparameter um den Scheitel
    let fitted = PeriodicCurveFitter::default()
        .fit(points)
        .expect("Dreieck ist nicht degeneriert");
    let top = fitted.parameters()[1];
    for s in [0.05, 0.1, 0.2, top] {
        let left = fitted.evaluate(top - s);
        let right = fitted.evaluate(top + s);
        assert!((left.x + right.x).abs() < 1e-9);
        assert!((left.y - right.y).abs() < 1e-9);
    }
}

#[test]
fn test_reset_restores_default_state() {
    let mut controller = AppController::new();
    let mut state = state_with_viewport();
    click_triangle(&mut controller, &mut state);
    for intent in [
        AppIntent::ZoomInRequested,
        AppIntent::PanRequested {
            direction: PanDirection::Left,
        },
        AppIntent::ZoomInRequested,
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
    assert!(!state.scene.view().is_default());

    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .expect("ResetRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 0);
    assert!(state.scene.view().is_default());
    assert!(state.scene.curve_vertices().is_empty());
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::ResetScene)
    ));
}

#[test]
fn test_pan_shifts_labels_without_moving_points() {
    let mut controller = AppController::new();
    let mut state = state_with_viewport();
    click_triangle(&mut controller, &mut state);
    let points = state.scene.point_vertices().to_vec();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PanRequested {
                direction: PanDirection::Right,
            },
        )
        .expect("PanRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.scene.point_vertices(), points.as_slice());
    let scene = controller.build_render_scene(&state);
    assert!((scene.pan.x - 0.1).abs() < 1e-12);
    assert!((scene.labels_x[10].1 - 1.0).abs() < 1e-12);
}

#[test]
fn test_invalid_zoom_command_is_rejected_without_changes() {
    let mut controller = AppController::new();
    let mut state = state_with_viewport();
    click_triangle(&mut controller, &mut state);
    let points = state.scene.point_vertices().to_vec();

    let result = controller.handle_command(&mut state, AppCommand::Zoom { factor: 0.0 });

    assert!(result.is_err());
    assert_eq!(state.scene.point_vertices(), points.as_slice());
    assert!(state.scene.view().is_default());
}

#[test]
fn test_viewport_resize_changes_click_mapping() {
    let mut controller = AppController::new();
    let mut state = state_with_viewport();

    controller
        .handle_intent(&mut state, AppIntent::ViewportResized { size: [400.0, 400.0] })
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    click(&mut controller, &mut state, 300.0, 100.0);

    assert_eq!(state.view.viewport_size, [400.0, 400.0]);
    let point = state.scene.point_vertices()[0];
    assert!((point.x - 0.5).abs() < 1e-9);
    assert!((point.y - 0.5).abs() < 1e-9);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_data_source_dialog_request_sets_ui_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::DataSourceDialogRequested)
        .expect("DataSourceDialogRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.show_data_source_dialog);
}
