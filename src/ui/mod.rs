//! UI-Komponenten: Menü, Header, Lochauswahl, Diagramm, Tabellen, Analytik.
//!
//! Jede Render-Funktion gibt erzeugte `AppIntent`s zurück und mutiert den
//! State nie direkt; die Verarbeitung läuft zentral über den Controller.

pub mod analytics;
pub mod course_info;
pub mod diagram;
pub mod header;
pub mod hole_panel;
pub mod menu;
pub mod result_popup;
pub mod scorecard;
pub mod shot_table;

pub use analytics::render_analytics;
pub use course_info::render_course_info;
pub use diagram::render_diagram;
pub use header::render_header;
pub use hole_panel::{render_hole_detail_header, render_hole_grid};
pub use menu::render_menu;
pub use result_popup::show_result_popup;
pub use scorecard::render_scorecard;
pub use shot_table::render_shot_table;

/// Konvertiert eine RGBA-Farbe aus den Optionen in eine egui-Farbe.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Ellipse als Polygonzug für den egui-Painter.
pub(crate) fn ellipse_points(center: egui::Pos2, radius: egui::Vec2, segments: usize) -> Vec<egui::Pos2> {
    let mut points = Vec::with_capacity(segments);
    for i in 0..segments {
        let t = (i as f32 / segments as f32) * std::f32::consts::TAU;
        points.push(egui::pos2(
            center.x + radius.x * t.cos(),
            center.y + radius.y * t.sin(),
        ));
    }
    points
}
