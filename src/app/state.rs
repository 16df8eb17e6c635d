/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Runde, View, UI).
mod app_state;
mod ui;
mod view;

pub use app_state::AppState;
pub use ui::{HoleResult, UiState};
pub use view::ViewState;
