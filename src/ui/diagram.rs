//! Lochdiagramm: Hintergrund, Marker, Klick- und Drag-Input.

use glam::Vec2;

use super::{color32, ellipse_points};
use crate::app::{AppIntent, AppState};
use crate::core::{DiagramView, PlaceMode, ViewMode};

/// Sandfarbe der Bunker im prozeduralen Hintergrund.
const BUNKER_COLOR: egui::Color32 = egui::Color32::from_rgb(217, 194, 126);
/// Breite des Fairway-Bands in Bildpixeln.
const FAIRWAY_WIDTH_PX: f32 = 150.0;

/// Verlauf des Fairways vom Abschlagbereich zum Grün, in Bildpixeln.
const FAIRWAY_CENTERLINE: [Vec2; 5] = [
    Vec2::new(120.0, 630.0),
    Vec2::new(330.0, 560.0),
    Vec2::new(560.0, 440.0),
    Vec2::new(790.0, 300.0),
    Vec2::new(980.0, 170.0),
];

/// Rendert das Lochdiagramm samt Steuer-Buttons und gibt Events zurück.
pub fn render_diagram(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Darstellungsbereich im Seitenverhältnis des Lochbildes (3:2)
    let width = ui.available_width().min(900.0);
    let size = egui::vec2(width, width * DiagramView::IMAGE_HEIGHT / DiagramView::IMAGE_WIDTH);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

    if (rect.width() - state.view.display_size[0]).abs() > 0.5
        || (rect.height() - state.view.display_size[1]).abs() > 0.5
    {
        events.push(AppIntent::DisplayResized {
            size: [rect.width(), rect.height()],
        });
    }

    let display_size = Vec2::new(rect.width(), rect.height());
    let view = &state.view.diagram;
    let hole = state.active_hole();

    let dragging = response.dragged();
    let response = response.on_hover_cursor(hover_cursor(state, dragging));

    paint_diagram(ui, rect, state, display_size);

    collect_pointer_events(&response, rect, state, display_size, &mut events);

    // Steuer-Buttons unterhalb des Diagramms
    ui.horizontal(|ui| {
        if ui.button("Reset Shots").clicked() {
            events.push(AppIntent::ShotsResetRequested);
        }

        let panned = view.mode == ViewMode::Panned;
        if ui
            .add_enabled(panned, egui::Button::new("Reset View"))
            .clicked()
        {
            events.push(AppIntent::ViewResetRequested);
        }

        let toggle_label = match view.mode {
            ViewMode::Full => "Draggable View",
            ViewMode::Panned => "Full View",
        };
        if ui.button(toggle_label).clicked() {
            events.push(AppIntent::ViewToggleRequested);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("Total Shots: {}", hole.markers.len()));
        });
    });

    events
}

fn hover_cursor(state: &AppState, dragging: bool) -> egui::CursorIcon {
    let hole = state.active_hole();
    if hole.place_mode != PlaceMode::Shot && !hole.shots_disabled {
        egui::CursorIcon::Crosshair
    } else if state.view.diagram.mode == ViewMode::Panned {
        if dragging {
            egui::CursorIcon::Grabbing
        } else {
            egui::CursorIcon::Grab
        }
    } else {
        egui::CursorIcon::Default
    }
}

/// Übersetzt Klicks und Drags des Diagramm-Bereichs in Intents.
fn collect_pointer_events(
    response: &egui::Response,
    rect: egui::Rect,
    state: &AppState,
    display_size: Vec2,
    events: &mut Vec<AppIntent>,
) {
    let view = &state.view.diagram;
    let hole = state.active_hole();

    // Drag: Delta von Bildschirm- in Viewport-Einheiten umrechnen,
    // damit die Klemmgrenzen unabhängig von der Darstellungsgröße gelten
    let drag_delta = response.drag_delta();
    if drag_delta != egui::Vec2::ZERO && view.mode == ViewMode::Panned {
        let viewport_per_screen = DiagramView::IMAGE_WIDTH / rect.width().max(1.0);
        events.push(AppIntent::DiagramDragged {
            delta: Vec2::new(drag_delta.x, drag_delta.y) * viewport_per_screen,
        });
    }

    if !response.clicked() {
        return;
    }
    let Some(pointer) = response.interact_pointer_pos() else {
        return;
    };
    let click = Vec2::new(pointer.x - rect.min.x, pointer.y - rect.min.y);

    // Im Platzierungsmodus fangen Klicks nichts anderes ab
    if hole.place_mode != PlaceMode::Shot {
        events.push(AppIntent::DiagramClicked { screen_pos: click });
        return;
    }

    let scale = view.screen_per_image_pixel(display_size);

    // Marker-Treffer: zuletzt gezeichnete (oberste) zuerst
    let radius = state.options.shot_marker_radius_px * scale;
    for (idx, marker) in hole.markers.iter().enumerate().rev() {
        let center = view.image_to_screen(marker.pos, display_size);
        if click.distance(center) <= radius {
            events.push(AppIntent::ShotRemoveRequested { index: idx });
            return;
        }
    }

    // Fahnen-Treffer: Klick im Bereich von Stange und Fahne locht ein
    if let Some(pin) = hole.pin {
        let base = view.image_to_screen(pin, display_size);
        let flag_h = state.options.pin_flag_height_px * scale;
        let hit = egui::Rect::from_min_max(
            egui::pos2(rect.min.x + base.x - 14.0 * scale, rect.min.y + base.y - flag_h),
            egui::pos2(rect.min.x + base.x + 14.0 * scale, rect.min.y + base.y + 6.0 * scale),
        );
        if hit.contains(pointer) {
            events.push(AppIntent::HoledOutRequested);
            return;
        }
    }

    events.push(AppIntent::DiagramClicked { screen_pos: click });
}

/// Zeichnet Hintergrund und Marker des aktiven Lochs.
fn paint_diagram(ui: &egui::Ui, rect: egui::Rect, state: &AppState, display_size: Vec2) {
    let painter = ui.painter().with_clip_rect(rect);
    let view = &state.view.diagram;
    let hole = state.active_hole();
    let options = &state.options;
    let scale = view.screen_per_image_pixel(display_size);

    let to_screen = |image_pos: Vec2| -> egui::Pos2 {
        let p = view.image_to_screen(image_pos, display_size);
        egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
    };

    // ── Prozeduraler Platz-Hintergrund ──────────────────────────────
    let image_rect = egui::Rect::from_min_max(
        to_screen(Vec2::ZERO),
        to_screen(DiagramView::image_size()),
    );
    painter.rect_filled(image_rect, egui::CornerRadius::ZERO, color32(options.rough_color));

    let fairway = color32(options.fairway_color);
    let fairway_stroke = egui::Stroke::new(FAIRWAY_WIDTH_PX * scale, fairway);
    for pair in FAIRWAY_CENTERLINE.windows(2) {
        painter.line_segment([to_screen(pair[0]), to_screen(pair[1])], fairway_stroke);
    }
    for point in FAIRWAY_CENTERLINE {
        painter.circle_filled(to_screen(point), FAIRWAY_WIDTH_PX / 2.0 * scale, fairway);
    }

    // Grün, Abschlagbox und Bunker
    painter.add(egui::Shape::convex_polygon(
        ellipse_points(
            to_screen(Vec2::new(1000.0, 140.0)),
            egui::vec2(90.0 * scale, 62.0 * scale),
            56,
        ),
        color32(options.green_color),
        egui::Stroke::NONE,
    ));
    painter.rect_filled(
        egui::Rect::from_min_max(to_screen(Vec2::new(85.0, 615.0)), to_screen(Vec2::new(160.0, 660.0))),
        egui::CornerRadius::same(2),
        color32(options.green_color),
    );
    for bunker in [Vec2::new(850.0, 300.0), Vec2::new(660.0, 470.0)] {
        painter.add(egui::Shape::convex_polygon(
            ellipse_points(to_screen(bunker), egui::vec2(34.0 * scale, 22.0 * scale), 40),
            BUNKER_COLOR,
            egui::Stroke::NONE,
        ));
    }

    // ── Abschlag-Marker ─────────────────────────────────────────────
    if let Some(tee) = hole.tee {
        let center = to_screen(tee);
        let r = options.tee_marker_radius_px * scale;
        painter.circle(
            center,
            r,
            color32(options.tee_color),
            egui::Stroke::new(2.0 * scale, egui::Color32::WHITE),
        );
        let bar = egui::Stroke::new(2.0 * scale, egui::Color32::WHITE);
        painter.line_segment(
            [center + egui::vec2(0.0, -r * 0.55), center + egui::vec2(0.0, r * 0.55)],
            bar,
        );
        painter.line_segment(
            [center + egui::vec2(-r * 0.4, -r * 0.25), center + egui::vec2(r * 0.4, -r * 0.25)],
            bar,
        );
        painter.line_segment(
            [center + egui::vec2(-r * 0.4, r * 0.25), center + egui::vec2(r * 0.4, r * 0.25)],
            bar,
        );
    }

    // ── Fahne ───────────────────────────────────────────────────────
    if let Some(pin) = hole.pin {
        let base = to_screen(pin);
        let flag_h = options.pin_flag_height_px * scale;
        let top = base - egui::vec2(0.0, flag_h);
        let pin_color = color32(options.pin_color);
        painter.line_segment([base, top], egui::Stroke::new(3.0 * scale, pin_color));
        painter.add(egui::Shape::convex_polygon(
            vec![
                top,
                top + egui::vec2(11.0 * scale, 6.0 * scale),
                top + egui::vec2(0.0, 12.0 * scale),
            ],
            egui::Color32::WHITE,
            egui::Stroke::new(1.0 * scale, pin_color),
        ));
    }

    // ── Schlagmarker mit Schlagnummern ──────────────────────────────
    let shot_fill = color32(options.shot_fill_color);
    let shot_outline = color32(options.shot_outline_color);
    for (idx, marker) in hole.markers.iter().enumerate() {
        let center = to_screen(marker.pos);
        let r = options.shot_marker_radius_px * scale;
        painter.circle(center, r, shot_fill, egui::Stroke::new(3.0 * scale, shot_outline));
        if options.show_shot_numbers {
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                (idx + 1).to_string(),
                egui::FontId::proportional(14.0 * scale),
                shot_outline,
            );
        }
    }
}
