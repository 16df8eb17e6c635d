//! Schlag-Tabelle: Schläger-Auswahl, Distanzen, Entfernen.

use crate::app::{AppIntent, AppState};
use crate::core::{hole_distances, Club};

/// Rendert die Schlag-Details des aktiven Lochs.
pub fn render_shot_table(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let number = state.active_hole_number();
    let hole = state.active_hole();
    let yards = state.course.hole(number).yards;

    // None, solange Abschlag/Fahne fehlen oder der Maßstab degeneriert ist
    let distances = hole_distances(hole.tee, hole.pin, &hole.markers, yards);

    ui.heading("Shot Details");
    egui::Grid::new("shot_table")
        .striped(true)
        .min_col_width(70.0)
        .show(ui, |ui| {
            ui.strong("Shot #");
            ui.strong("Club");
            ui.strong("Distance (yds)");
            ui.strong("To Pin (yds)");
            ui.strong("");
            ui.end_row();

            for (idx, marker) in hole.markers.iter().enumerate() {
                ui.label((idx + 1).to_string());

                let mut selected = marker.club;
                egui::ComboBox::from_id_salt(("shot_club", idx))
                    .selected_text(
                        selected.map_or_else(|| "Select club".to_string(), |c| c.to_string()),
                    )
                    .show_ui(ui, |ui| {
                        for club in Club::ALL {
                            ui.selectable_value(&mut selected, Some(club), club.label());
                        }
                    });
                if selected != marker.club {
                    if let Some(club) = selected {
                        events.push(AppIntent::ClubSelected { index: idx, club });
                    }
                }

                match distances.as_ref().map(|d| d[idx]) {
                    Some(d) => {
                        ui.label(format!("{:.1}", d.from_previous));
                        ui.label(format!("{:.1}", d.to_pin));
                    }
                    None => {
                        ui.label("-");
                        ui.label("-");
                    }
                }

                if ui.button("Remove").clicked() {
                    events.push(AppIntent::ShotRemoveRequested { index: idx });
                }
                ui.end_row();
            }
        });

    if !hole.has_tee_and_pin() {
        ui.label("Set tee and pin to see distances.");
    }

    events
}
