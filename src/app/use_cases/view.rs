//! Use-Case-Funktionen für die Diagramm-Ansicht.

use crate::app::AppState;

/// Verschiebt den gezoomten Ausschnitt (geklemmt auf die Bildgrenzen).
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.diagram.pan_by(delta);
}

/// Wechselt zwischen Full- und Panned-Ansicht.
pub fn toggle_mode(state: &mut AppState) {
    state.view.diagram.toggle_mode();
}

/// Zentriert den gezoomten Ausschnitt wieder im Viewport.
pub fn reset_pan(state: &mut AppState) {
    state.view.diagram.reset_pan();
}

/// Aktualisiert die gespeicherte Größe des Darstellungsbereichs.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.display_size = size;
}
