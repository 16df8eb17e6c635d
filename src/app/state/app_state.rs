use crate::app::CommandLog;
use crate::core::{Course, HoleRound, Round};
use crate::shared::TrackerOptions;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Statische Platzdaten (Redtail, 18 Löcher)
    pub course: Course,
    /// Erfassungszustand der laufenden Runde
    pub round: Round,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen)
    pub options: TrackerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerer Runde.
    pub fn new() -> Self {
        Self {
            course: Course::redtail(),
            round: Round::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: TrackerOptions::default(),
            should_exit: false,
        }
    }

    /// Lochnummer, auf die sich Commands beziehen.
    /// Solange kein Loch gewählt ist, Loch 1 (Verhalten der Lochauswahl-UI).
    pub fn active_hole_number(&self) -> u8 {
        self.ui.selected_hole.unwrap_or(1)
    }

    /// Loch-Zustand des aktiven Lochs.
    pub fn active_hole(&self) -> &HoleRound {
        self.round.hole(self.active_hole_number())
    }

    /// Mutabler Loch-Zustand des aktiven Lochs.
    pub fn active_hole_mut(&mut self) -> &mut HoleRound {
        self.round.hole_mut(self.active_hole_number())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
