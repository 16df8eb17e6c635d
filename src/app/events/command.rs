use crate::core::{Club, PlaceMode};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Aktives Loch wechseln
    SelectHole { number: u8 },
    /// Platzierungsmodus des aktiven Lochs setzen
    SetPlaceMode { mode: PlaceMode },
    /// Abschlag an Bildposition setzen
    PlaceTee { image_pos: glam::Vec2 },
    /// Fahne an Bildposition setzen
    PlacePin { image_pos: glam::Vec2 },
    /// Schlagmarker an Bildposition anhängen
    AddShot { image_pos: glam::Vec2 },
    /// Schlagmarker an Index entfernen
    RemoveShot { index: usize },
    /// Alle Schläge des aktiven Lochs zurücksetzen
    ResetShots,
    /// Schläger eines Schlagmarkers ändern
    SetClub { index: usize, club: Club },
    /// Loch einlochen: Abschlussmarker, Sperre, Scorekarte, Ergebnis
    HoleOut,
    /// Diagramm-Ausschnitt verschieben (Viewport-Einheiten)
    PanDiagram { delta: glam::Vec2 },
    /// Zwischen Full- und Panned-Ansicht wechseln
    ToggleViewMode,
    /// Gezoomten Ausschnitt zentrieren
    ResetDiagramPan,
    /// Größe des Darstellungsbereichs setzen
    SetDisplaySize { size: [f32; 2] },
    /// Analytik-Bereich umschalten
    ToggleAnalytics,
    /// Schläger der Streuungs-Ansicht setzen
    SelectDispersionClub { club: Option<Club> },
    /// Ergebnis-Popup schließen
    DismissResult,
    /// Anwendung beenden
    RequestExit,
}
