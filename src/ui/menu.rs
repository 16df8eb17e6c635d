//! Top-Menü (File, View).

use crate::app::{AppIntent, AppState};
use crate::core::ViewMode;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let toggle_label = match state.view.diagram.mode {
                    ViewMode::Full => "Draggable View",
                    ViewMode::Panned => "Full View",
                };
                if ui.button(toggle_label).clicked() {
                    events.push(AppIntent::ViewToggleRequested);
                    ui.close();
                }

                let panned = state.view.diagram.mode == ViewMode::Panned;
                if ui
                    .add_enabled(panned, egui::Button::new("Reset View"))
                    .clicked()
                {
                    events.push(AppIntent::ViewResetRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
