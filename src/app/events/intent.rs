use crate::core::Club;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Loch in der Lochauswahl angeklickt
    HoleSelected { number: u8 },
    /// "Set Tee" angefordert: nächster Klick setzt den Abschlag
    SetTeeModeRequested,
    /// "Set Pin" angefordert: nächster Klick setzt die Fahne
    SetPinModeRequested,
    /// Klick auf das Lochdiagramm (Bildschirmposition relativ zum
    /// Darstellungsbereich)
    DiagramClicked { screen_pos: glam::Vec2 },
    /// Diagramm im Panned-Modus gezogen (Delta bereits in Viewport-Einheiten)
    DiagramDragged { delta: glam::Vec2 },
    /// Zwischen Full- und Panned-Ansicht umschalten
    ViewToggleRequested,
    /// Gezoomten Ausschnitt wieder zentrieren
    ViewResetRequested,
    /// Größe des Diagramm-Darstellungsbereichs hat sich geändert
    DisplayResized { size: [f32; 2] },
    /// Einzelnen Schlagmarker entfernen
    ShotRemoveRequested { index: usize },
    /// Alle Schläge des aktiven Lochs zurücksetzen
    ShotsResetRequested,
    /// Schlägerauswahl eines Schlags geändert
    ClubSelected { index: usize, club: Club },
    /// Fahne angeklickt: Loch als eingelocht werten
    HoledOutRequested,
    /// Analytik-Bereich ein-/ausblenden
    AnalyticsToggleRequested,
    /// Schläger für die Streuungs-Ansicht gewählt
    DispersionClubSelected { club: Option<Club> },
    /// Ergebnis-Popup bestätigt
    ResultDismissed,
    /// Anwendung beenden
    ExitRequested,
}
