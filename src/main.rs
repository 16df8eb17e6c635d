//! Redtail Round Tracker.
//!
//! Rust-basierter Golf-Runden-Tracker für den Redtail Golf Course:
//! Schlagerfassung auf dem Lochdiagramm, Scorekarte und Schläger-Analytik.

use eframe::egui;
use redtail_round_tracker::{ui, AppController, AppIntent, AppState, TrackerOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Redtail Round Tracker v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 860.0])
                .with_title("Redtail Round Tracker"),
            ..Default::default()
        };

        eframe::run_native(
            "Redtail Round Tracker",
            options,
            Box::new(|_cc| Ok(Box::new(TrackerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct TrackerApp {
    state: AppState,
    controller: AppController,
}

impl TrackerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = TrackerOptions::config_path();
        let tracker_options = TrackerOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = tracker_options;

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }
}

impl TrackerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_header(ctx, &self.state));
        events.extend(ui::show_result_popup(ctx, &self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.state.ui.show_analytics {
                    events.extend(ui::render_analytics(ui, &self.state));
                    ui.add_space(12.0);
                }

                ui::render_course_info(ui, &self.state);
                ui.add_space(12.0);

                events.extend(ui::render_hole_grid(ui, &self.state));
                ui.add_space(12.0);

                if self.state.ui.selected_hole.is_some() {
                    events.extend(ui::render_hole_detail_header(ui, &self.state));
                    ui.add_space(8.0);
                    events.extend(ui::render_diagram(ui, &self.state));
                    ui.add_space(12.0);
                    events.extend(ui::render_shot_table(ui, &self.state));
                    ui.add_space(12.0);
                }

                ui::render_scorecard(ui, &self.state);
            });
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
