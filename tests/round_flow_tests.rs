use glam::Vec2;
use redtail_round_tracker::{
    hole_distances, AppCommand, AppController, AppIntent, AppState, Club, DiagramView, PlaceMode,
};

/// Positionsvergleich mit Float-Toleranz (die Klick-Abbildung rundet).
fn assert_vec_eq(actual: Vec2, expected: Vec2) {
    assert!(
        (actual - expected).length() < 1e-3,
        "Position {actual:?} weicht von {expected:?} ab"
    );
}

/// Display in Bildgröße → Bildschirm- und Bildkoordinaten sind identisch.
fn make_state() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DisplayResized {
                size: [DiagramView::IMAGE_WIDTH, DiagramView::IMAGE_HEIGHT],
            },
        )
        .expect("DisplayResized sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::DiagramClicked {
                screen_pos: Vec2::new(x, y),
            },
        )
        .expect("DiagramClicked sollte ohne Fehler durchlaufen");
}

fn place_tee(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(state, AppIntent::SetTeeModeRequested)
        .expect("SetTeeModeRequested sollte funktionieren");
    click(controller, state, x, y);
}

fn place_pin(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(state, AppIntent::SetPinModeRequested)
        .expect("SetPinModeRequested sollte funktionieren");
    click(controller, state, x, y);
}

#[test]
fn test_tee_placement_reverts_to_shot_mode_and_logs_command() {
    let (mut controller, mut state) = make_state();

    place_tee(&mut controller, &mut state, 100.0, 600.0);

    let hole = state.active_hole();
    assert_vec_eq(hole.tee.expect("Abschlag gesetzt"), Vec2::new(100.0, 600.0));
    assert_eq!(hole.place_mode, PlaceMode::Shot);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::PlaceTee { image_pos } => {
            assert_vec_eq(*image_pos, Vec2::new(100.0, 600.0));
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_pin_placement_reverts_to_shot_mode() {
    let (mut controller, mut state) = make_state();

    place_pin(&mut controller, &mut state, 1000.0, 100.0);

    let hole = state.active_hole();
    assert_vec_eq(hole.pin.expect("Fahne gesetzt"), Vec2::new(1000.0, 100.0));
    assert_eq!(hole.place_mode, PlaceMode::Shot);
}

#[test]
fn test_shot_clicks_append_markers_in_order() {
    let (mut controller, mut state) = make_state();

    click(&mut controller, &mut state, 300.0, 500.0);
    click(&mut controller, &mut state, 600.0, 350.0);

    let markers = &state.active_hole().markers;
    assert_eq!(markers.len(), 2);
    assert_vec_eq(markers[0].pos, Vec2::new(300.0, 500.0));
    assert_vec_eq(markers[1].pos, Vec2::new(600.0, 350.0));
    // Erster Schlag erhält den Driver als Standard-Schläger
    assert_eq!(markers[0].club, Some(Club::Driver));
}

#[test]
fn test_marker_at_half_distance_yields_190_yards() {
    // Loch 1: 380 Yards, Abschlag (0,0), Fahne (100,0) → Maßstab 3.8
    let (mut controller, mut state) = make_state();
    place_tee(&mut controller, &mut state, 0.0, 0.0);
    place_pin(&mut controller, &mut state, 100.0, 0.0);
    click(&mut controller, &mut state, 50.0, 0.0);

    let hole = state.active_hole();
    let distances = hole_distances(hole.tee, hole.pin, &hole.markers, 380)
        .expect("Maßstab sollte definiert sein");

    assert!((distances[0].from_previous - 190.0).abs() < 1e-3);
    assert!((distances[0].to_pin - 190.0).abs() < 1e-3);
}

#[test]
fn test_degenerate_tee_pin_pair_reports_no_distances() {
    let (mut controller, mut state) = make_state();
    place_tee(&mut controller, &mut state, 200.0, 200.0);
    place_pin(&mut controller, &mut state, 200.0, 200.0);
    click(&mut controller, &mut state, 300.0, 300.0);

    let hole = state.active_hole();
    assert!(hole_distances(hole.tee, hole.pin, &hole.markers, 380).is_none());
}

#[test]
fn test_hole_out_on_par_records_score_and_par_message() {
    // Loch 1 ist Par 4: drei Schläge plus Einlochschlag → genau Par
    let (mut controller, mut state) = make_state();
    place_tee(&mut controller, &mut state, 100.0, 600.0);
    place_pin(&mut controller, &mut state, 1000.0, 100.0);
    click(&mut controller, &mut state, 400.0, 450.0);
    click(&mut controller, &mut state, 700.0, 300.0);
    click(&mut controller, &mut state, 950.0, 130.0);

    controller
        .handle_intent(&mut state, AppIntent::HoledOutRequested)
        .expect("HoledOutRequested sollte funktionieren");

    assert!(state.active_hole().shots_disabled);
    assert_eq!(state.active_hole().markers.len(), 4);
    assert_eq!(state.round.scores[0], Some(4));

    let popup = state.ui.result_popup.as_ref().expect("Popup gesetzt");
    assert_eq!(popup.strokes, 4);
    assert_eq!(popup.message, "Nice Job on that Par!");
}

#[test]
fn test_hole_out_two_under_par_is_an_eagle() {
    // Loch 1 (Par 4) mit zwei Schlägen: ein Marker plus Einlochschlag
    let (mut controller, mut state) = make_state();
    place_tee(&mut controller, &mut state, 100.0, 600.0);
    place_pin(&mut controller, &mut state, 1000.0, 100.0);
    click(&mut controller, &mut state, 700.0, 300.0);

    controller
        .handle_intent(&mut state, AppIntent::HoledOutRequested)
        .unwrap();

    let popup = state.ui.result_popup.as_ref().expect("Popup gesetzt");
    assert_eq!(popup.strokes, 2);
    assert_eq!(popup.message, "Incredible! Eagle!!");
}

#[test]
fn test_hole_out_two_over_par_reports_overage() {
    // Loch 2 ist Par 3: vier Marker plus Einlochschlag → 2 über Par
    let (mut controller, mut state) = make_state();
    controller
        .handle_intent(&mut state, AppIntent::HoleSelected { number: 2 })
        .expect("HoleSelected sollte funktionieren");
    place_tee(&mut controller, &mut state, 100.0, 600.0);
    place_pin(&mut controller, &mut state, 1000.0, 100.0);
    for pos in [
        (300.0, 500.0),
        (500.0, 400.0),
        (700.0, 300.0),
        (900.0, 200.0),
    ] {
        click(&mut controller, &mut state, pos.0, pos.1);
    }

    controller
        .handle_intent(&mut state, AppIntent::HoledOutRequested)
        .unwrap();

    let popup = state.ui.result_popup.as_ref().expect("Popup gesetzt");
    assert_eq!(popup.strokes, 5);
    assert_eq!(popup.message, "Keep practicing! 2 over par.");
    assert_eq!(state.round.scores[1], Some(5));
}

#[test]
fn test_clicks_after_hole_out_are_noops() {
    let (mut controller, mut state) = make_state();
    place_tee(&mut controller, &mut state, 100.0, 600.0);
    place_pin(&mut controller, &mut state, 1000.0, 100.0);
    click(&mut controller, &mut state, 500.0, 400.0);
    controller
        .handle_intent(&mut state, AppIntent::HoledOutRequested)
        .unwrap();

    let before = state.active_hole().markers.len();
    click(&mut controller, &mut state, 600.0, 350.0);

    assert_eq!(state.active_hole().markers.len(), before);
}

#[test]
fn test_reset_shots_preserves_tee_and_pin_and_reenables_entry() {
    let (mut controller, mut state) = make_state();
    place_tee(&mut controller, &mut state, 100.0, 600.0);
    place_pin(&mut controller, &mut state, 1000.0, 100.0);
    click(&mut controller, &mut state, 500.0, 400.0);
    controller
        .handle_intent(&mut state, AppIntent::HoledOutRequested)
        .unwrap();
    assert!(state.active_hole().shots_disabled);

    controller
        .handle_intent(&mut state, AppIntent::ShotsResetRequested)
        .expect("ShotsResetRequested sollte funktionieren");

    let hole = state.active_hole();
    assert!(hole.markers.is_empty());
    assert!(!hole.shots_disabled);
    assert_vec_eq(hole.tee.expect("Abschlag erhalten"), Vec2::new(100.0, 600.0));
    assert_vec_eq(hole.pin.expect("Fahne erhalten"), Vec2::new(1000.0, 100.0));

    // Nach dem Reset sind neue Schläge wieder möglich
    click(&mut controller, &mut state, 400.0, 400.0);
    assert_eq!(state.active_hole().markers.len(), 1);
}

#[test]
fn test_club_changes_propagate_to_new_shots() {
    let (mut controller, mut state) = make_state();
    click(&mut controller, &mut state, 300.0, 500.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ClubSelected {
                index: 0,
                club: Club::SevenIron,
            },
        )
        .expect("ClubSelected sollte funktionieren");
    click(&mut controller, &mut state, 600.0, 350.0);

    let markers = &state.active_hole().markers;
    assert_eq!(markers[0].club, Some(Club::SevenIron));
    assert_eq!(markers[1].club, Some(Club::SevenIron));
}

#[test]
fn test_shot_removal_reindexes_markers() {
    let (mut controller, mut state) = make_state();
    click(&mut controller, &mut state, 100.0, 100.0);
    click(&mut controller, &mut state, 200.0, 200.0);
    click(&mut controller, &mut state, 300.0, 300.0);

    controller
        .handle_intent(&mut state, AppIntent::ShotRemoveRequested { index: 0 })
        .expect("ShotRemoveRequested sollte funktionieren");

    let markers = &state.active_hole().markers;
    assert_eq!(markers.len(), 2);
    assert_vec_eq(markers[0].pos, Vec2::new(200.0, 200.0));
}

#[test]
fn test_club_aggregation_counts_and_averages() {
    // Fahne bei (95,0): Maßstab 380/95 = 4.0 → Distanzen 150 und 160 Yards
    let (mut controller, mut state) = make_state();
    place_tee(&mut controller, &mut state, 0.0, 0.0);
    place_pin(&mut controller, &mut state, 95.0, 0.0);
    click(&mut controller, &mut state, 37.5, 0.0);
    click(&mut controller, &mut state, 77.5, 0.0);
    for index in 0..2 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::ClubSelected {
                    index,
                    club: Club::SevenIron,
                },
            )
            .unwrap();
    }

    let stats = redtail_round_tracker::club_stats(&state.course, &state.round);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].club, Club::SevenIron);
    assert_eq!(stats[0].count, 2);
    assert!((stats[0].average_yards() - 155.0).abs() < 1e-3);
}

#[test]
fn test_dispersion_requires_two_samples_for_ellipse() {
    let (mut controller, mut state) = make_state();
    place_tee(&mut controller, &mut state, 0.0, 0.0);
    place_pin(&mut controller, &mut state, 100.0, 0.0);
    click(&mut controller, &mut state, 50.0, 0.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DispersionClubSelected {
                club: Some(Club::Driver),
            },
        )
        .expect("DispersionClubSelected sollte funktionieren");

    assert_eq!(state.ui.dispersion_club, Some(Club::Driver));
    let d = redtail_round_tracker::dispersion(&state.round, Club::Driver);
    assert!(!d.has_ellipse());

    click(&mut controller, &mut state, 60.0, 10.0);
    let d = redtail_round_tracker::dispersion(&state.round, Club::Driver);
    assert!(d.has_ellipse());
}

#[test]
fn test_pan_clamp_holds_for_any_drag_sequence() {
    let (mut controller, mut state) = make_state();
    controller
        .handle_intent(&mut state, AppIntent::ViewToggleRequested)
        .expect("ViewToggleRequested sollte funktionieren");

    for delta in [
        Vec2::new(-4000.0, 900.0),
        Vec2::new(250.0, -6000.0),
        Vec2::new(9999.0, 9999.0),
        Vec2::new(-1.5, -2.5),
    ] {
        controller
            .handle_intent(&mut state, AppIntent::DiagramDragged { delta })
            .expect("DiagramDragged sollte funktionieren");

        let pan = state.view.diagram.pan;
        let min_x = DiagramView::IMAGE_WIDTH * (1.0 - DiagramView::PAN_ZOOM);
        let min_y = DiagramView::IMAGE_HEIGHT * (1.0 - DiagramView::PAN_ZOOM);
        assert!(pan.x >= min_x && pan.x <= 0.0, "Pan.x außerhalb: {pan:?}");
        assert!(pan.y >= min_y && pan.y <= 0.0, "Pan.y außerhalb: {pan:?}");
    }
}

#[test]
fn test_panned_click_maps_through_inverse_transform() {
    let (mut controller, mut state) = make_state();
    controller
        .handle_intent(&mut state, AppIntent::ViewToggleRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DiagramDragged {
                delta: Vec2::new(-100.0, -60.0),
            },
        )
        .unwrap();

    // Erwartete Bildposition über die Umkehrabbildung bestimmen
    let screen = Vec2::new(400.0, 300.0);
    let expected = state
        .view
        .diagram
        .screen_to_image(screen, DiagramView::image_size());

    click(&mut controller, &mut state, screen.x, screen.y);

    let markers = &state.active_hole().markers;
    assert_eq!(markers.len(), 1);
    assert!((markers[0].pos - expected).length() < 1e-3);
}

#[test]
fn test_drag_in_full_view_does_not_pan() {
    let (mut controller, mut state) = make_state();
    let before = state.view.diagram.pan;

    controller
        .handle_intent(
            &mut state,
            AppIntent::DiagramDragged {
                delta: Vec2::new(-50.0, -50.0),
            },
        )
        .unwrap();

    assert_eq!(state.view.diagram.pan, before);
}

#[test]
fn test_hole_selection_scopes_shot_entry() {
    let (mut controller, mut state) = make_state();

    controller
        .handle_intent(&mut state, AppIntent::HoleSelected { number: 7 })
        .expect("HoleSelected sollte funktionieren");
    click(&mut controller, &mut state, 300.0, 300.0);

    assert_eq!(state.round.hole(7).markers.len(), 1);
    assert!(state.round.hole(1).markers.is_empty());

    controller
        .handle_intent(&mut state, AppIntent::HoleSelected { number: 1 })
        .unwrap();
    assert!(state.active_hole().markers.is_empty());
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let (mut controller, mut state) = make_state();

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
fn test_result_popup_dismissal_clears_state() {
    let (mut controller, mut state) = make_state();
    place_tee(&mut controller, &mut state, 100.0, 600.0);
    place_pin(&mut controller, &mut state, 1000.0, 100.0);
    click(&mut controller, &mut state, 500.0, 400.0);
    controller
        .handle_intent(&mut state, AppIntent::HoledOutRequested)
        .unwrap();
    assert!(state.ui.result_popup.is_some());

    controller
        .handle_intent(&mut state, AppIntent::ResultDismissed)
        .expect("ResultDismissed sollte funktionieren");

    assert!(state.ui.result_popup.is_none());
}

#[test]
fn test_full_round_scorecard_totals() {
    let (mut controller, mut state) = make_state();

    // Löcher 1 und 9 (Front Nine), Loch 10 (Back Nine) einlochen
    for number in [1u8, 9, 10] {
        controller
            .handle_intent(&mut state, AppIntent::HoleSelected { number })
            .unwrap();
        place_tee(&mut controller, &mut state, 100.0, 600.0);
        place_pin(&mut controller, &mut state, 1000.0, 100.0);
        click(&mut controller, &mut state, 500.0, 400.0);
        click(&mut controller, &mut state, 800.0, 200.0);
        controller
            .handle_intent(&mut state, AppIntent::HoledOutRequested)
            .unwrap();
    }

    assert_eq!(state.round.scores[0], Some(3));
    assert_eq!(state.round.scores[8], Some(3));
    assert_eq!(state.round.scores[9], Some(3));
    assert_eq!(state.round.front_nine_total(), Some(6));
    assert_eq!(state.round.back_nine_total(), Some(3));
}
