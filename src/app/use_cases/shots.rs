//! Use-Cases für Schlagerfassung und Marker-Platzierung.

use glam::Vec2;

use crate::app::AppState;
use crate::core::{Club, PlaceMode, ShotMarker};

/// Setzt den Platzierungsmodus des aktiven Lochs.
pub fn set_place_mode(state: &mut AppState, mode: PlaceMode) {
    state.active_hole_mut().place_mode = mode;
}

/// Setzt den Abschlag und kehrt in den Schlag-Modus zurück.
/// Nach dem Einlochen gesperrt, bis die Schläge zurückgesetzt werden.
pub fn place_tee(state: &mut AppState, image_pos: Vec2) {
    let number = state.active_hole_number();
    let hole = state.active_hole_mut();
    if hole.shots_disabled {
        log::debug!("Loch {}: Abschlag-Platzierung gesperrt", number);
        return;
    }

    hole.tee = Some(image_pos);
    hole.place_mode = PlaceMode::Shot;
    log::info!(
        "Loch {}: Abschlag gesetzt auf ({:.1}, {:.1})",
        number,
        image_pos.x,
        image_pos.y
    );
}

/// Setzt die Fahne und kehrt in den Schlag-Modus zurück.
pub fn place_pin(state: &mut AppState, image_pos: Vec2) {
    let number = state.active_hole_number();
    let hole = state.active_hole_mut();
    if hole.shots_disabled {
        log::debug!("Loch {}: Fahnen-Platzierung gesperrt", number);
        return;
    }

    hole.pin = Some(image_pos);
    hole.place_mode = PlaceMode::Shot;
    log::info!(
        "Loch {}: Fahne gesetzt auf ({:.1}, {:.1})",
        number,
        image_pos.x,
        image_pos.y
    );
}

/// Hängt einen Schlagmarker an. Der neue Schlag erbt den Schläger des
/// vorherigen Markers; der erste Schlag erhält den Driver.
/// No-op, solange das Loch eingelocht und nicht zurückgesetzt ist.
pub fn add_shot(state: &mut AppState, image_pos: Vec2) {
    let number = state.active_hole_number();
    let hole = state.active_hole_mut();
    if hole.shots_disabled {
        log::debug!("Loch {}: Schlagerfassung gesperrt", number);
        return;
    }

    let club = hole
        .markers
        .last()
        .and_then(|m| m.club)
        .unwrap_or(Club::Driver);
    hole.markers.push(ShotMarker::new(image_pos, Some(club)));
    log::info!(
        "Loch {}: Schlag {} erfasst ({})",
        number,
        hole.markers.len(),
        club
    );
}

/// Entfernt einen einzelnen Schlagmarker.
pub fn remove_shot(state: &mut AppState, index: usize) {
    let number = state.active_hole_number();
    let hole = state.active_hole_mut();
    if index >= hole.markers.len() {
        log::warn!("Loch {}: kein Schlagmarker an Index {}", number, index);
        return;
    }

    hole.markers.remove(index);
}

/// Setzt die Schläge des aktiven Lochs zurück und hebt die Sperre auf.
/// Abschlag und Fahne bleiben erhalten.
pub fn reset_shots(state: &mut AppState) {
    let number = state.active_hole_number();
    let hole = state.active_hole_mut();
    hole.markers.clear();
    hole.shots_disabled = false;
    log::info!("Loch {}: Schläge zurückgesetzt", number);
}

/// Ändert die Schlägerauswahl eines Schlagmarkers.
pub fn set_club(state: &mut AppState, index: usize, club: Club) {
    let number = state.active_hole_number();
    let hole = state.active_hole_mut();
    let Some(marker) = hole.markers.get_mut(index) else {
        log::warn!("Loch {}: kein Schlagmarker an Index {}", number, index);
        return;
    };
    marker.club = Some(club);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_tee_reverts_mode_to_shot() {
        let mut state = AppState::new();
        set_place_mode(&mut state, PlaceMode::Tee);

        place_tee(&mut state, Vec2::new(100.0, 600.0));

        let hole = state.active_hole();
        assert_eq!(hole.tee, Some(Vec2::new(100.0, 600.0)));
        assert_eq!(hole.place_mode, PlaceMode::Shot);
    }

    #[test]
    fn place_pin_reverts_mode_to_shot() {
        let mut state = AppState::new();
        set_place_mode(&mut state, PlaceMode::Pin);

        place_pin(&mut state, Vec2::new(1000.0, 100.0));

        let hole = state.active_hole();
        assert_eq!(hole.pin, Some(Vec2::new(1000.0, 100.0)));
        assert_eq!(hole.place_mode, PlaceMode::Shot);
    }

    #[test]
    fn first_shot_defaults_to_driver() {
        let mut state = AppState::new();

        add_shot(&mut state, Vec2::new(400.0, 300.0));

        assert_eq!(state.active_hole().markers[0].club, Some(Club::Driver));
    }

    #[test]
    fn new_shot_inherits_previous_club() {
        let mut state = AppState::new();
        add_shot(&mut state, Vec2::new(400.0, 300.0));
        set_club(&mut state, 0, Club::SevenIron);

        add_shot(&mut state, Vec2::new(600.0, 300.0));

        assert_eq!(state.active_hole().markers[1].club, Some(Club::SevenIron));
    }

    #[test]
    fn add_shot_is_noop_while_disabled() {
        let mut state = AppState::new();
        add_shot(&mut state, Vec2::new(400.0, 300.0));
        state.active_hole_mut().shots_disabled = true;

        add_shot(&mut state, Vec2::new(600.0, 300.0));

        assert_eq!(state.active_hole().markers.len(), 1);
    }

    #[test]
    fn tee_and_pin_placement_ignored_while_disabled() {
        let mut state = AppState::new();
        state.active_hole_mut().shots_disabled = true;

        place_tee(&mut state, Vec2::new(10.0, 10.0));
        place_pin(&mut state, Vec2::new(20.0, 20.0));

        assert!(state.active_hole().tee.is_none());
        assert!(state.active_hole().pin.is_none());
    }

    #[test]
    fn reset_preserves_tee_and_pin() {
        let mut state = AppState::new();
        place_tee(&mut state, Vec2::new(100.0, 600.0));
        place_pin(&mut state, Vec2::new(1000.0, 100.0));
        add_shot(&mut state, Vec2::new(400.0, 300.0));
        state.active_hole_mut().shots_disabled = true;

        reset_shots(&mut state);

        let hole = state.active_hole();
        assert!(hole.markers.is_empty());
        assert!(!hole.shots_disabled);
        assert_eq!(hole.tee, Some(Vec2::new(100.0, 600.0)));
        assert_eq!(hole.pin, Some(Vec2::new(1000.0, 100.0)));
    }

    #[test]
    fn remove_shot_deletes_only_the_indexed_marker() {
        let mut state = AppState::new();
        add_shot(&mut state, Vec2::new(100.0, 100.0));
        add_shot(&mut state, Vec2::new(200.0, 200.0));
        add_shot(&mut state, Vec2::new(300.0, 300.0));

        remove_shot(&mut state, 1);

        let markers = &state.active_hole().markers;
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(markers[1].pos, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn remove_shot_with_invalid_index_is_noop() {
        let mut state = AppState::new();
        add_shot(&mut state, Vec2::new(100.0, 100.0));

        remove_shot(&mut state, 5);

        assert_eq!(state.active_hole().markers.len(), 1);
    }
}
