//! Handler für die Diagramm-Ansicht.

use crate::app::use_cases;
use crate::app::AppState;

/// Verschiebt den gezoomten Ausschnitt um ein Viewport-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::view::pan(state, delta);
}

/// Wechselt zwischen Full- und Panned-Ansicht.
pub fn toggle_mode(state: &mut AppState) {
    use_cases::view::toggle_mode(state);
}

/// Zentriert den gezoomten Ausschnitt.
pub fn reset_pan(state: &mut AppState) {
    use_cases::view::reset_pan(state);
}

/// Aktualisiert die Größe des Darstellungsbereichs im State.
pub fn set_display_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::view::resize(state, size);
}
