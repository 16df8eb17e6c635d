//! Use-Cases für Einlochen und Rundenwertung.

use crate::app::state::HoleResult;
use crate::app::AppState;
use crate::core::ShotMarker;

/// Wertet das aktive Loch als eingelocht.
///
/// Hängt den Abschlussmarker an der Fahnenposition an, sperrt die
/// Schlagerfassung, trägt die Schlagzahl in die Scorekarte ein und
/// setzt das Ergebnis-Popup synchron (kein verzögertes Nachreichen).
///
/// Ohne Fahne, bei bereits gesperrtem Loch oder wenn der letzte Marker
/// schon auf der Fahne liegt passiert nichts.
pub fn hole_out(state: &mut AppState) {
    let number = state.active_hole_number();
    let par = state.course.hole(number).par;

    let hole = state.active_hole_mut();
    let Some(pin) = hole.pin else {
        log::warn!("Loch {}: Einlochen ohne gesetzte Fahne ignoriert", number);
        return;
    };
    if hole.shots_disabled {
        return;
    }
    if hole.markers.last().is_some_and(|m| m.pos == pin) {
        return;
    }

    // Abschlussmarker trägt keinen Schläger und zählt damit nicht in die Analytik
    hole.markers.push(ShotMarker::new(pin, None));
    hole.shots_disabled = true;
    let strokes = hole.markers.len() as u32;

    state.round.scores[usize::from(number) - 1] = Some(strokes);
    let message = result_message(strokes, par);
    log::info!(
        "Loch {} eingelocht: {} Schläge (Par {}) – {}",
        number,
        strokes,
        par,
        message
    );
    state.ui.result_popup = Some(HoleResult {
        hole_number: number,
        strokes,
        message,
    });
}

/// Bewertungstext für eine Schlagzahl relativ zum Par.
pub fn result_message(strokes: u32, par: u32) -> String {
    if strokes + 2 == par {
        "Incredible! Eagle!!".to_string()
    } else if strokes + 1 == par {
        "Amazing Birdie!".to_string()
    } else if strokes == par {
        "Nice Job on that Par!".to_string()
    } else if strokes == par + 1 {
        "Solid effort, just a Bogey.".to_string()
    } else if strokes > par + 1 {
        format!("Keep practicing! {} over par.", strokes - par)
    } else {
        "Great round!".to_string()
    }
}
