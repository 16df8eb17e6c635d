//! Schläger und Schlagmarker.

use glam::Vec2;

/// Geschlossene Schlägerauswahl für die Schlag-Erfassung.
/// Reihenfolge entspricht der Dropdown-Sortierung von langem zu kurzem Schläger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Club {
    Driver,
    ThreeWood,
    FiveWood,
    TwoIron,
    ThreeIron,
    FourIron,
    FiveIron,
    SixIron,
    SevenIron,
    EightIron,
    NineIron,
    PitchingWedge,
    SandWedge,
    LobWedge,
    Putter,
}

impl Club {
    /// Alle Schläger in Dropdown-Reihenfolge.
    pub const ALL: [Club; 15] = [
        Club::Driver,
        Club::ThreeWood,
        Club::FiveWood,
        Club::TwoIron,
        Club::ThreeIron,
        Club::FourIron,
        Club::FiveIron,
        Club::SixIron,
        Club::SevenIron,
        Club::EightIron,
        Club::NineIron,
        Club::PitchingWedge,
        Club::SandWedge,
        Club::LobWedge,
        Club::Putter,
    ];

    /// Anzeigename für UI und Analytik-Tabellen.
    pub fn label(self) -> &'static str {
        match self {
            Club::Driver => "Driver",
            Club::ThreeWood => "3 Wood",
            Club::FiveWood => "5 Wood",
            Club::TwoIron => "2 Iron",
            Club::ThreeIron => "3 Iron",
            Club::FourIron => "4 Iron",
            Club::FiveIron => "5 Iron",
            Club::SixIron => "6 Iron",
            Club::SevenIron => "7 Iron",
            Club::EightIron => "8 Iron",
            Club::NineIron => "9 Iron",
            Club::PitchingWedge => "Pitching Wedge",
            Club::SandWedge => "Sand Wedge",
            Club::LobWedge => "Lob Wedge",
            Club::Putter => "Putter",
        }
    }
}

impl std::fmt::Display for Club {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ein gesetzter Schlagmarker auf dem Lochdiagramm.
/// Position in Bildpixel-Koordinaten (0..1152 × 0..768).
/// Die Reihenfolge der Marker eines Lochs ist die Schlagreihenfolge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotMarker {
    /// Position in Bildpixeln
    pub pos: Vec2,
    /// Gewählter Schläger (der Einloch-Marker trägt keinen)
    pub club: Option<Club>,
}

impl ShotMarker {
    /// Erstellt einen neuen Schlagmarker.
    pub fn new(pos: Vec2, club: Option<Club>) -> Self {
        Self { pos, club }
    }
}
