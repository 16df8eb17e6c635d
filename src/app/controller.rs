//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Lochauswahl & Anwendungssteuerung ===
            AppCommand::SelectHole { number } => handlers::session::select_hole(state, number),
            AppCommand::ToggleAnalytics => handlers::session::toggle_analytics(state),
            AppCommand::SelectDispersionClub { club } => {
                handlers::session::select_dispersion_club(state, club)
            }
            AppCommand::DismissResult => handlers::session::dismiss_result(state),
            AppCommand::RequestExit => handlers::session::request_exit(state),

            // === Diagramm-Ansicht ===
            AppCommand::PanDiagram { delta } => handlers::view::pan(state, delta),
            AppCommand::ToggleViewMode => handlers::view::toggle_mode(state),
            AppCommand::ResetDiagramPan => handlers::view::reset_pan(state),
            AppCommand::SetDisplaySize { size } => handlers::view::set_display_size(state, size),

            // === Schlagerfassung ===
            AppCommand::SetPlaceMode { mode } => handlers::shots::set_place_mode(state, mode),
            AppCommand::PlaceTee { image_pos } => handlers::shots::place_tee(state, image_pos),
            AppCommand::PlacePin { image_pos } => handlers::shots::place_pin(state, image_pos),
            AppCommand::AddShot { image_pos } => handlers::shots::add_shot(state, image_pos),
            AppCommand::RemoveShot { index } => handlers::shots::remove_shot(state, index),
            AppCommand::ResetShots => handlers::shots::reset_shots(state),
            AppCommand::SetClub { index, club } => handlers::shots::set_club(state, index, club),

            // === Einlochen ===
            AppCommand::HoleOut => handlers::shots::hole_out(state),
        }

        Ok(())
    }
}
