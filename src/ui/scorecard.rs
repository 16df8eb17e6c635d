//! Scorekarte: Front Nine und Back Nine mit Summen.

use crate::app::AppState;

/// Rendert die Scorekarte der Runde.
pub fn render_scorecard(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("Scorecard");

    egui::Grid::new("scorecard")
        .striped(true)
        .min_col_width(32.0)
        .show(ui, |ui| {
            ui.strong("");
            for n in 1..=9 {
                ui.strong(n.to_string());
            }
            ui.strong("Total");
            ui.end_row();

            score_row(ui, "Front 9", &state.round.scores[..9], state.round.front_nine_total());
            score_row(ui, "Back 9", &state.round.scores[9..], state.round.back_nine_total());
        });
}

fn score_row(ui: &mut egui::Ui, label: &str, scores: &[Option<u32>], total: Option<u32>) {
    ui.strong(label);
    for score in scores {
        match score {
            Some(s) => ui.label(s.to_string()),
            None => ui.label("-"),
        };
    }
    match total {
        Some(t) => ui.strong(t.to_string()),
        None => ui.strong("-"),
    };
    ui.end_row();
}
