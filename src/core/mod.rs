//! Core-Domänentypen: Platzdaten, Rundenzustand, Diagramm-Geometrie,
//! Distanz- und Streuungsberechnung.

pub mod analytics;
pub mod course;
pub mod diagram;
pub mod distance;
pub mod round;
pub mod shot;

pub use analytics::{club_stats, dispersion, ClubStats, Dispersion};
pub use course::{Course, Hole, HOLE_COUNT};
pub use diagram::{DiagramView, ViewMode};
pub use distance::{hole_distances, yards_per_pixel, ShotDistance};
pub use round::{HoleRound, PlaceMode, Round};
pub use shot::{Club, ShotMarker};
