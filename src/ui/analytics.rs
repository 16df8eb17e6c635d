//! Analytik-Bereich: Schlägerstatistik, Streuungsellipse, Schlagkarte.

use glam::Vec2;

use super::{color32, ellipse_points};
use crate::app::{AppIntent, AppState};
use crate::core::{club_stats, dispersion, DiagramView};

/// Zeichenfläche der Streuungs- und Schlagkarten-Plots.
const PLOT_WIDTH: f32 = 600.0;
const PLOT_HEIGHT: f32 = 400.0;

/// Rendert den Analytik-Bereich und gibt erzeugte Events zurück.
pub fn render_analytics(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.group(|ui| {
        ui.heading("Data Analytics");
        ui.add_space(6.0);

        render_club_table(ui, state);
        ui.add_space(10.0);
        render_dispersion(ui, state, &mut events);
        ui.add_space(10.0);
        render_shot_map(ui, state);
    });

    events
}

fn render_club_table(ui: &mut egui::Ui, state: &AppState) {
    ui.strong("Club Performance");

    let stats = club_stats(&state.course, &state.round);
    if stats.is_empty() {
        ui.label("No clubbed shots recorded yet.");
        return;
    }

    egui::Grid::new("club_stats")
        .striped(true)
        .min_col_width(90.0)
        .show(ui, |ui| {
            ui.strong("Club");
            ui.strong("Shots");
            ui.strong("Avg. Distance (yds)");
            ui.end_row();

            for row in &stats {
                ui.label(row.club.label());
                ui.label(row.count.to_string());
                ui.label(format!("{:.1}", row.average_yards()));
                ui.end_row();
            }
        });
}

fn render_dispersion(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.strong("Shot Dispersion");

    // Nur tatsächlich verwendete Schläger anbieten
    let used_clubs: Vec<_> = club_stats(&state.course, &state.round)
        .iter()
        .map(|s| s.club)
        .collect();

    let mut selected = state.ui.dispersion_club;
    egui::ComboBox::from_id_salt("dispersion_club")
        .selected_text(
            selected.map_or_else(
                || "Select a club to view dispersion".to_string(),
                |c| c.to_string(),
            ),
        )
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, "Select a club to view dispersion");
            for club in used_clubs {
                ui.selectable_value(&mut selected, Some(club), club.label());
            }
        });
    if selected != state.ui.dispersion_club {
        events.push(AppIntent::DispersionClubSelected { club: selected });
    }

    let Some(club) = state.ui.dispersion_club else {
        return;
    };
    let d = dispersion(&state.round, club);

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(PLOT_WIDTH, PLOT_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(rect, egui::CornerRadius::same(4), egui::Color32::from_gray(245));

    // Offsets sind Bildpixel relativ zur Fahne; Fahne liegt im Plot-Zentrum
    let to_plot = |offset: Vec2| -> egui::Pos2 {
        egui::pos2(
            rect.center().x + offset.x * (PLOT_WIDTH / DiagramView::IMAGE_WIDTH),
            rect.center().y + offset.y * (PLOT_HEIGHT / DiagramView::IMAGE_HEIGHT),
        )
    };

    if d.has_ellipse() {
        let radius = egui::vec2(
            d.std_dev.x * (PLOT_WIDTH / DiagramView::IMAGE_WIDTH),
            d.std_dev.y * (PLOT_HEIGHT / DiagramView::IMAGE_HEIGHT),
        );
        painter.add(egui::Shape::convex_polygon(
            ellipse_points(to_plot(d.mean), radius, 56),
            color32(state.options.dispersion_fill_color),
            egui::Stroke::new(2.0, color32(state.options.dispersion_outline_color)),
        ));
    }

    for offset in &d.offsets {
        painter.circle(
            to_plot(*offset),
            8.0,
            color32(state.options.dispersion_outline_color),
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
    }

    // Fahne im Zentrum
    painter.circle(
        rect.center(),
        10.0,
        color32(state.options.pin_color),
        egui::Stroke::new(3.0, egui::Color32::WHITE),
    );
}

fn render_shot_map(ui: &mut egui::Ui, state: &AppState) {
    ui.strong("Shot Map");

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(PLOT_WIDTH, PLOT_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(rect, egui::CornerRadius::same(4), egui::Color32::from_gray(245));

    let clubbed = color32(state.options.shot_outline_color);
    let unclubbed = egui::Color32::from_gray(136);

    for hole in &state.round.holes {
        for marker in &hole.markers {
            let pos = egui::pos2(
                rect.min.x + marker.pos.x * (PLOT_WIDTH / DiagramView::IMAGE_WIDTH),
                rect.min.y + marker.pos.y * (PLOT_HEIGHT / DiagramView::IMAGE_HEIGHT),
            );
            let color = if marker.club.is_some() { clubbed } else { unclubbed };
            painter.circle(pos, 8.0, color, egui::Stroke::new(2.0, egui::Color32::WHITE));
        }
    }

    ui.label("Note: simple shot map across all holes and clubs.");
}
