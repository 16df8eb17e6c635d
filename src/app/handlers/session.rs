//! Handler für Lochauswahl, Analytik-Sicht und Anwendungssteuerung.

use crate::app::AppState;
use crate::core::{Club, HOLE_COUNT};

/// Wechselt das aktive Loch.
pub fn select_hole(state: &mut AppState, number: u8) {
    if number == 0 || usize::from(number) > HOLE_COUNT {
        log::warn!("Ungültige Lochnummer: {}", number);
        return;
    }
    state.ui.selected_hole = Some(number);
}

/// Blendet den Analytik-Bereich ein oder aus.
pub fn toggle_analytics(state: &mut AppState) {
    state.ui.show_analytics = !state.ui.show_analytics;
}

/// Wählt den Schläger der Streuungs-Ansicht.
pub fn select_dispersion_club(state: &mut AppState, club: Option<Club>) {
    state.ui.dispersion_club = club;
}

/// Schließt das Ergebnis-Popup.
pub fn dismiss_result(state: &mut AppState) {
    state.ui.result_popup = None;
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
