//! Ergebnis-Popup nach dem Einlochen.

use crate::app::{AppIntent, AppState};

/// Zeigt das Ergebnis-Popup, solange ein Lochergebnis ansteht.
pub fn show_result_popup(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(result) = &state.ui.result_popup else {
        return events;
    };

    egui::Window::new("Hole Result")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading(result.message.as_str());
                ui.add_space(4.0);
                ui.label(format!(
                    "Hole {} finished in {} strokes",
                    result.hole_number, result.strokes
                ));
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    events.push(AppIntent::ResultDismissed);
                }
                ui.add_space(4.0);
            });
        });

    events
}
