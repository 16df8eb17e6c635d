//! Redtail Round Tracker Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, HoleResult, UiState, ViewState};
pub use crate::core::{
    club_stats, dispersion, hole_distances, yards_per_pixel, Club, ClubStats, Course, DiagramView,
    Dispersion, Hole, HoleRound, PlaceMode, Round, ShotDistance, ShotMarker, ViewMode, HOLE_COUNT,
};
pub use shared::TrackerOptions;
