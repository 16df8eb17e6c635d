//! Distanzberechnung: Pixelstrecken in Yards umrechnen.

use glam::Vec2;

use super::shot::ShotMarker;

/// Pixelabstand, unter dem Abschlag und Fahne als deckungsgleich gelten.
const DEGENERATE_EPSILON: f32 = 1e-3;

/// Abgeleitete Distanzen eines einzelnen Schlags, in Yards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotDistance {
    /// Strecke vom vorherigen Marker (bzw. Abschlag beim ersten Schlag)
    pub from_previous: f32,
    /// Reststrecke des Markers zur Fahne
    pub to_pin: f32,
}

/// Maßstab Yards pro Bildpixel aus Abschlag-/Fahnenposition und
/// ausgeschriebener Lochlänge.
///
/// Liegen Abschlag und Fahne aufeinander, gibt es keinen sinnvollen
/// Maßstab: Rückgabe `None`, alle Distanzen gelten als nicht verfügbar.
pub fn yards_per_pixel(tee: Vec2, pin: Vec2, hole_yards: u32) -> Option<f32> {
    let pixel_dist = tee.distance(pin);
    if pixel_dist <= DEGENERATE_EPSILON {
        return None;
    }
    Some(hole_yards as f32 / pixel_dist)
}

/// Distanzen aller Schlagmarker eines Lochs.
///
/// `None`, solange Abschlag oder Fahne fehlen oder der Maßstab
/// degeneriert ist; das Ergebnis hat sonst einen Eintrag je Marker.
pub fn hole_distances(
    tee: Option<Vec2>,
    pin: Option<Vec2>,
    markers: &[ShotMarker],
    hole_yards: u32,
) -> Option<Vec<ShotDistance>> {
    let tee = tee?;
    let pin = pin?;
    let scale = yards_per_pixel(tee, pin, hole_yards)?;

    let mut previous = tee;
    let distances = markers
        .iter()
        .map(|marker| {
            let d = ShotDistance {
                from_previous: previous.distance(marker.pos) * scale,
                to_pin: marker.pos.distance(pin) * scale,
            };
            previous = marker.pos;
            d
        })
        .collect();
    Some(distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shot::Club;
    use approx::assert_relative_eq;

    #[test]
    fn scale_from_published_yardage() {
        // Loch 1: 380 Yards über 100 Pixel → 3.8 Yards/Pixel
        let scale = yards_per_pixel(Vec2::ZERO, Vec2::new(100.0, 0.0), 380);
        assert_relative_eq!(scale.unwrap(), 3.8);
    }

    #[test]
    fn degenerate_tee_pin_pair_has_no_scale() {
        let p = Vec2::new(512.0, 300.0);
        assert!(yards_per_pixel(p, p, 380).is_none());
    }

    #[test]
    fn marker_halfway_gets_half_the_yardage() {
        let markers = [ShotMarker::new(Vec2::new(50.0, 0.0), Some(Club::Driver))];
        let distances = hole_distances(
            Some(Vec2::ZERO),
            Some(Vec2::new(100.0, 0.0)),
            &markers,
            380,
        )
        .expect("Maßstab vorhanden");

        assert_relative_eq!(distances[0].from_previous, 190.0);
        assert_relative_eq!(distances[0].to_pin, 190.0);
    }

    #[test]
    fn second_shot_measures_from_previous_marker() {
        let markers = [
            ShotMarker::new(Vec2::new(60.0, 0.0), Some(Club::Driver)),
            ShotMarker::new(Vec2::new(90.0, 0.0), Some(Club::SevenIron)),
        ];
        let distances = hole_distances(
            Some(Vec2::ZERO),
            Some(Vec2::new(100.0, 0.0)),
            &markers,
            380,
        )
        .expect("Maßstab vorhanden");

        assert_relative_eq!(distances[1].from_previous, 30.0 * 3.8);
        assert_relative_eq!(distances[1].to_pin, 10.0 * 3.8);
    }

    #[test]
    fn distances_unavailable_without_tee_or_pin() {
        let markers = [ShotMarker::new(Vec2::new(50.0, 0.0), None)];
        assert!(hole_distances(None, Some(Vec2::ONE), &markers, 380).is_none());
        assert!(hole_distances(Some(Vec2::ZERO), None, &markers, 380).is_none());
    }
}
