use crate::core::Club;

/// Ergebnis eines eingelochten Lochs für das Result-Popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleResult {
    /// Lochnummer (1-18)
    pub hole_number: u8,
    /// Benötigte Schläge inklusive Einlochschlag
    pub strokes: u32,
    /// Bewertungstext relativ zum Par
    pub message: String,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktuell gewähltes Loch, None = noch keines angeklickt
    pub selected_hole: Option<u8>,
    /// Ob der Analytik-Bereich angezeigt wird
    pub show_analytics: bool,
    /// Schläger für die Streuungs-Ansicht, None = keiner gewählt
    pub dispersion_club: Option<Club>,
    /// Anstehendes Ergebnis-Popup, None = keines sichtbar
    pub result_popup: Option<HoleResult>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
