//! Rundenübergreifende Auswertung: Schlägerstatistik und Streuung.

use glam::Vec2;

use super::course::Course;
use super::distance::hole_distances;
use super::round::Round;
use super::shot::Club;

/// Aufsummierte Schlagdaten eines Schlägers über alle Löcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClubStats {
    /// Ausgewerteter Schläger
    pub club: Club,
    /// Anzahl gezählter Schläge
    pub count: u32,
    /// Summe der Schlagdistanzen in Yards
    pub total_yards: f32,
}

impl ClubStats {
    /// Durchschnittliche Schlagdistanz in Yards.
    pub fn average_yards(&self) -> f32 {
        self.total_yards / self.count as f32
    }
}

/// Streuungsbild eines Schlägers: Pixel-Offsets der Marker relativ
/// zur Fahne ihres Lochs, mit Mittelwert und Standardabweichung.
///
/// Die Offsets bleiben bewusst im Pixelraum und mischen damit Löcher
/// unterschiedlichen Maßstabs (Verhalten der Vorlage, nicht korrigiert).
#[derive(Debug, Clone, PartialEq)]
pub struct Dispersion {
    /// Offsets `marker − pin` je Schlag, in Bildpixeln
    pub offsets: Vec<Vec2>,
    /// Mittlerer Offset
    pub mean: Vec2,
    /// Populations-Standardabweichung je Achse (Ellipsenradien)
    pub std_dev: Vec2,
}

impl Dispersion {
    /// Eine Streuungsellipse ist erst ab zwei Stichproben sinnvoll.
    pub fn has_ellipse(&self) -> bool {
        self.offsets.len() > 1
    }
}

/// Aggregiert Schlagdistanzen je Schläger über alle Löcher.
///
/// Gezählt werden nur Löcher mit Abschlag, Fahne, gültigem Maßstab und
/// mindestens einem Marker; je Marker nur mit gesetztem Schläger und
/// positiver Distanz. Ergebnis in Schläger-Reihenfolge, ohne leere Einträge.
pub fn club_stats(course: &Course, round: &Round) -> Vec<ClubStats> {
    let mut counts = [0u32; Club::ALL.len()];
    let mut totals = [0f32; Club::ALL.len()];

    for (hole, state) in course.holes.iter().zip(round.holes.iter()) {
        if state.markers.is_empty() {
            continue;
        }
        let Some(distances) = hole_distances(state.tee, state.pin, &state.markers, hole.yards)
        else {
            continue;
        };

        for (marker, distance) in state.markers.iter().zip(distances.iter()) {
            let Some(club) = marker.club else { continue };
            if distance.from_previous <= 0.0 {
                continue;
            }
            let idx = Club::ALL.iter().position(|c| *c == club).unwrap_or(0);
            counts[idx] += 1;
            totals[idx] += distance.from_previous;
        }
    }

    Club::ALL
        .iter()
        .enumerate()
        .filter(|(idx, _)| counts[*idx] > 0)
        .map(|(idx, club)| ClubStats {
            club: *club,
            count: counts[idx],
            total_yards: totals[idx],
        })
        .collect()
}

/// Sammelt die Streuung eines Schlägers über alle Löcher mit Fahne.
pub fn dispersion(round: &Round, club: Club) -> Dispersion {
    let mut offsets = Vec::new();

    for state in &round.holes {
        let Some(pin) = state.pin else { continue };
        for marker in &state.markers {
            if marker.club == Some(club) {
                offsets.push(marker.pos - pin);
            }
        }
    }

    let mean = mean(&offsets);
    let std_dev = std_dev(&offsets, mean);
    Dispersion {
        offsets,
        mean,
        std_dev,
    }
}

fn mean(offsets: &[Vec2]) -> Vec2 {
    if offsets.is_empty() {
        return Vec2::ZERO;
    }
    offsets.iter().sum::<Vec2>() / offsets.len() as f32
}

fn std_dev(offsets: &[Vec2], mean: Vec2) -> Vec2 {
    if offsets.is_empty() {
        return Vec2::ZERO;
    }
    let variance = offsets
        .iter()
        .map(|o| (*o - mean) * (*o - mean))
        .sum::<Vec2>()
        / offsets.len() as f32;
    Vec2::new(variance.x.sqrt(), variance.y.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shot::ShotMarker;
    use approx::assert_relative_eq;

    fn round_with_hole1(markers: Vec<ShotMarker>) -> Round {
        let mut round = Round::new();
        let hole = round.hole_mut(1);
        hole.tee = Some(Vec2::ZERO);
        hole.pin = Some(Vec2::new(100.0, 0.0));
        hole.markers = markers;
        round
    }

    #[test]
    fn two_seven_iron_shots_average_correctly() {
        // Maßstab Loch 1: 3.8 → Distanzen 150.1 und 159.6 Yards
        let round = round_with_hole1(vec![
            ShotMarker::new(Vec2::new(39.5, 0.0), Some(Club::SevenIron)),
            ShotMarker::new(Vec2::new(81.5, 0.0), Some(Club::SevenIron)),
        ]);

        let stats = club_stats(&Course::redtail(), &round);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].club, Club::SevenIron);
        assert_eq!(stats[0].count, 2);
        assert_relative_eq!(stats[0].average_yards(), 154.85, epsilon = 1e-3);
    }

    #[test]
    fn markers_without_club_are_skipped() {
        let round = round_with_hole1(vec![
            ShotMarker::new(Vec2::new(50.0, 0.0), Some(Club::Driver)),
            ShotMarker::new(Vec2::new(100.0, 0.0), None),
        ]);

        let stats = club_stats(&Course::redtail(), &round);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].count, 1);
    }

    #[test]
    fn holes_without_tee_or_pin_contribute_nothing() {
        let mut round = Round::new();
        round
            .hole_mut(2)
            .markers
            .push(ShotMarker::new(Vec2::new(10.0, 10.0), Some(Club::Driver)));

        assert!(club_stats(&Course::redtail(), &round).is_empty());
    }

    #[test]
    fn degenerate_scale_excludes_hole_from_stats() {
        let mut round = Round::new();
        let hole = round.hole_mut(1);
        hole.tee = Some(Vec2::new(50.0, 50.0));
        hole.pin = Some(Vec2::new(50.0, 50.0));
        hole.markers
            .push(ShotMarker::new(Vec2::new(80.0, 50.0), Some(Club::Driver)));

        assert!(club_stats(&Course::redtail(), &round).is_empty());
    }

    #[test]
    fn dispersion_collects_offsets_relative_to_each_pin() {
        let mut round = Round::new();
        let h1 = round.hole_mut(1);
        h1.pin = Some(Vec2::new(100.0, 100.0));
        h1.markers
            .push(ShotMarker::new(Vec2::new(110.0, 90.0), Some(Club::Driver)));
        let h2 = round.hole_mut(2);
        h2.pin = Some(Vec2::new(500.0, 400.0));
        h2.markers
            .push(ShotMarker::new(Vec2::new(490.0, 410.0), Some(Club::Driver)));

        let d = dispersion(&round, Club::Driver);
        assert_eq!(d.offsets.len(), 2);
        assert!(d.has_ellipse());
        assert_relative_eq!(d.mean.x, 0.0);
        assert_relative_eq!(d.mean.y, 0.0);
        assert_relative_eq!(d.std_dev.x, 10.0);
        assert_relative_eq!(d.std_dev.y, 10.0);
    }

    #[test]
    fn single_sample_has_no_ellipse() {
        let mut round = Round::new();
        let hole = round.hole_mut(1);
        hole.pin = Some(Vec2::new(100.0, 100.0));
        hole.markers
            .push(ShotMarker::new(Vec2::new(90.0, 90.0), Some(Club::Putter)));

        let d = dispersion(&round, Club::Putter);
        assert_eq!(d.offsets.len(), 1);
        assert!(!d.has_ellipse());
    }

    #[test]
    fn population_std_dev_uses_n_denominator() {
        let mut round = Round::new();
        let hole = round.hole_mut(1);
        hole.pin = Some(Vec2::ZERO);
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            hole.markers
                .push(ShotMarker::new(Vec2::new(x, 0.0), Some(Club::NineIron)));
        }

        let d = dispersion(&round, Club::NineIron);
        assert_relative_eq!(d.mean.x, 5.0);
        assert_relative_eq!(d.std_dev.x, 2.0);
        assert_relative_eq!(d.std_dev.y, 0.0);
    }
}
