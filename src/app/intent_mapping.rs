//! Mapping von UI-Intents auf mutierende App-Commands.

use glam::Vec2;

use super::{AppCommand, AppIntent, AppState};
use crate::core::PlaceMode;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::HoleSelected { number } => vec![AppCommand::SelectHole { number }],
        AppIntent::SetTeeModeRequested => vec![AppCommand::SetPlaceMode {
            mode: PlaceMode::Tee,
        }],
        AppIntent::SetPinModeRequested => vec![AppCommand::SetPlaceMode {
            mode: PlaceMode::Pin,
        }],
        AppIntent::DiagramClicked { screen_pos } => {
            let display_size = Vec2::new(state.view.display_size[0], state.view.display_size[1]);
            if display_size.x <= 0.0 || display_size.y <= 0.0 {
                // Klick vor dem ersten Layout-Durchlauf: keine Abbildung möglich
                return Vec::new();
            }
            let image_pos = state.view.diagram.screen_to_image(screen_pos, display_size);

            match state.active_hole().place_mode {
                PlaceMode::Tee => vec![AppCommand::PlaceTee { image_pos }],
                PlaceMode::Pin => vec![AppCommand::PlacePin { image_pos }],
                PlaceMode::Shot => vec![AppCommand::AddShot { image_pos }],
            }
        }
        AppIntent::DiagramDragged { delta } => {
            if state.view.diagram.mode == crate::core::ViewMode::Panned {
                vec![AppCommand::PanDiagram { delta }]
            } else {
                Vec::new()
            }
        }
        AppIntent::ViewToggleRequested => vec![AppCommand::ToggleViewMode],
        AppIntent::ViewResetRequested => vec![AppCommand::ResetDiagramPan],
        AppIntent::DisplayResized { size } => vec![AppCommand::SetDisplaySize { size }],
        AppIntent::ShotRemoveRequested { index } => vec![AppCommand::RemoveShot { index }],
        AppIntent::ShotsResetRequested => vec![AppCommand::ResetShots],
        AppIntent::ClubSelected { index, club } => vec![AppCommand::SetClub { index, club }],
        AppIntent::HoledOutRequested => vec![AppCommand::HoleOut],
        AppIntent::AnalyticsToggleRequested => vec![AppCommand::ToggleAnalytics],
        AppIntent::DispersionClubSelected { club } => {
            vec![AppCommand::SelectDispersionClub { club }]
        }
        AppIntent::ResultDismissed => vec![AppCommand::DismissResult],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
