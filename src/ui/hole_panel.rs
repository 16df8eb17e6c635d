//! Lochauswahl-Raster und Kopf des Loch-Detailbereichs.

use crate::app::{AppIntent, AppState};
use crate::core::{PlaceMode, HOLE_COUNT};

/// Anzahl Lochauswahl-Buttons je Zeile.
const HOLES_PER_ROW: usize = 9;

/// Rendert das Raster der 18 Lochauswahl-Buttons.
pub fn render_hole_grid(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Grid::new("hole_grid").show(ui, |ui| {
        for idx in 0..HOLE_COUNT {
            let number = (idx + 1) as u8;
            let selected = state.ui.selected_hole == Some(number);
            let button = egui::Button::new(number.to_string())
                .min_size(egui::vec2(36.0, 28.0))
                .selected(selected);
            if ui.add(button).clicked() {
                events.push(AppIntent::HoleSelected { number });
            }
            if (idx + 1) % HOLES_PER_ROW == 0 {
                ui.end_row();
            }
        }
    });

    events
}

/// Rendert Lochnummer, Par/Länge und die Platzierungs-Buttons
/// des gewählten Lochs.
pub fn render_hole_detail_header(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let number = state.active_hole_number();
    let hole = state.course.hole(number);
    let place_mode = state.active_hole().place_mode;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(format!("Hole {}", number));
            ui.label(format!("Par {} | {} yards", hole.par, hole.yards));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let pin_btn = egui::Button::new("Set Pin").selected(place_mode == PlaceMode::Pin);
            if ui.add(pin_btn).clicked() {
                events.push(AppIntent::SetPinModeRequested);
            }

            let tee_btn = egui::Button::new("Set Tee").selected(place_mode == PlaceMode::Tee);
            if ui.add(tee_btn).clicked() {
                events.push(AppIntent::SetTeeModeRequested);
            }
        });
    });

    events
}
