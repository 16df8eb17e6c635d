//! Kopfzeile mit Titel und Analytik-Umschalter.

use crate::app::{AppIntent, AppState};

/// Rendert die Kopfzeile und gibt erzeugte Events zurück.
pub fn render_header(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Round Tracker");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if state.ui.show_analytics {
                    "Hide Analytics"
                } else {
                    "Show Analytics"
                };
                if ui
                    .add(egui::Button::new(label).selected(state.ui.show_analytics))
                    .clicked()
                {
                    events.push(AppIntent::AnalyticsToggleRequested);
                }
            });
        });
    });

    events
}
