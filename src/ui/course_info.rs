//! Info-Karte mit den Stammdaten des Platzes.

use crate::app::AppState;

/// Rendert die Platz-Informationen.
pub fn render_course_info(ui: &mut egui::Ui, state: &AppState) {
    let course = &state.course;

    ui.group(|ui| {
        ui.heading(course.name);
        ui.add_space(4.0);
        ui.label(course.address);
        ui.label(format!("Phone: {}", course.phone));
        ui.hyperlink_to(course.website, course.website);
        ui.add_space(4.0);
        ui.label(course.description);
    });
}
