//! Handler für Schlagerfassung und Einlochen.

use glam::Vec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Club, PlaceMode};

/// Setzt den Platzierungsmodus des aktiven Lochs.
pub fn set_place_mode(state: &mut AppState, mode: PlaceMode) {
    use_cases::shots::set_place_mode(state, mode);
}

/// Setzt den Abschlagpunkt.
pub fn place_tee(state: &mut AppState, image_pos: Vec2) {
    use_cases::shots::place_tee(state, image_pos);
}

/// Setzt die Fahnenposition.
pub fn place_pin(state: &mut AppState, image_pos: Vec2) {
    use_cases::shots::place_pin(state, image_pos);
}

/// Hängt einen Schlagmarker an.
pub fn add_shot(state: &mut AppState, image_pos: Vec2) {
    use_cases::shots::add_shot(state, image_pos);
}

/// Entfernt einen Schlagmarker.
pub fn remove_shot(state: &mut AppState, index: usize) {
    use_cases::shots::remove_shot(state, index);
}

/// Setzt die Schläge des aktiven Lochs zurück.
pub fn reset_shots(state: &mut AppState) {
    use_cases::shots::reset_shots(state);
}

/// Ändert die Schlägerauswahl eines Schlags.
pub fn set_club(state: &mut AppState, index: usize, club: Club) {
    use_cases::shots::set_club(state, index, club);
}

/// Wertet das aktive Loch als eingelocht.
pub fn hole_out(state: &mut AppState) {
    use_cases::scoring::hole_out(state);
}
