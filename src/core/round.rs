//! Rundenzustand: 18 Löcher mit Markern, Abschlag, Fahne und Scorekarte.

use glam::Vec2;

use super::course::HOLE_COUNT;
use super::shot::ShotMarker;

/// Platzierungsmodus für den nächsten Diagramm-Klick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceMode {
    /// Nächster Klick setzt den Abschlagpunkt
    Tee,
    /// Nächster Klick setzt die Fahnenposition
    Pin,
    /// Standard: Klicks hängen Schlagmarker an
    #[default]
    Shot,
}

/// Erfassungszustand eines einzelnen Lochs.
#[derive(Debug, Clone, Default)]
pub struct HoleRound {
    /// Schlagmarker in Schlagreihenfolge
    pub markers: Vec<ShotMarker>,
    /// Abschlagposition (Bildpixel), None = noch nicht gesetzt
    pub tee: Option<Vec2>,
    /// Fahnenposition (Bildpixel), None = noch nicht gesetzt
    pub pin: Option<Vec2>,
    /// Platzierungsmodus für den nächsten Klick
    pub place_mode: PlaceMode,
    /// Nach dem Einlochen gesperrt, bis die Schläge zurückgesetzt werden
    pub shots_disabled: bool,
}

impl HoleRound {
    /// Distanzen sind nur mit gesetztem Abschlag UND gesetzter Fahne definiert.
    pub fn has_tee_and_pin(&self) -> bool {
        self.tee.is_some() && self.pin.is_some()
    }
}

/// Zustand einer vollen Runde: feste Arena aus 18 Loch-Zuständen
/// plus Scorekarte. Adressierung über Lochnummer − 1.
#[derive(Debug, Clone)]
pub struct Round {
    /// Loch-Zustände, Index = Lochnummer − 1
    pub holes: [HoleRound; HOLE_COUNT],
    /// Scorekarte: Schlagzahl je Loch, None = noch nicht gespielt
    pub scores: [Option<u32>; HOLE_COUNT],
}

impl Round {
    /// Erstellt eine leere Runde.
    pub fn new() -> Self {
        Self {
            holes: std::array::from_fn(|_| HoleRound::default()),
            scores: [None; HOLE_COUNT],
        }
    }

    /// Loch-Zustand zu einer Lochnummer (1-basiert).
    pub fn hole(&self, number: u8) -> &HoleRound {
        &self.holes[usize::from(number) - 1]
    }

    /// Mutabler Loch-Zustand zu einer Lochnummer (1-basiert).
    pub fn hole_mut(&mut self, number: u8) -> &mut HoleRound {
        &mut self.holes[usize::from(number) - 1]
    }

    /// Summe der erfassten Scores der ersten neun Löcher.
    /// None, wenn noch kein Loch der Front Nine gespielt wurde.
    pub fn front_nine_total(&self) -> Option<u32> {
        nine_total(&self.scores[..9])
    }

    /// Summe der erfassten Scores der zweiten neun Löcher.
    pub fn back_nine_total(&self) -> Option<u32> {
        nine_total(&self.scores[9..])
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

fn nine_total(scores: &[Option<u32>]) -> Option<u32> {
    let sum: u32 = scores.iter().flatten().sum();
    (sum > 0).then_some(sum)
}
