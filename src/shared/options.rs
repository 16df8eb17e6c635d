//! Zentrale Konfiguration für den Redtail Round Tracker.
//!
//! `TrackerOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Marker-Darstellung ──────────────────────────────────────────────

/// Radius der Abschlag-Markierung in Bildpixeln.
pub const TEE_MARKER_RADIUS_PX: f32 = 18.0;
/// Radius der Schlagmarker in Bildpixeln.
pub const SHOT_MARKER_RADIUS_PX: f32 = 16.0;
/// Höhe der Fahnenstange in Bildpixeln.
pub const PIN_FLAG_HEIGHT_PX: f32 = 32.0;
/// Füllfarbe der Abschlag-Markierung (RGBA: Dunkelgrün).
pub const TEE_COLOR: [f32; 4] = [0.18, 0.49, 0.20, 1.0];
/// Farbe von Fahne und Stange (RGBA: Dunkelrot).
pub const PIN_COLOR: [f32; 4] = [0.72, 0.11, 0.11, 1.0];
/// Füllfarbe der Schlagmarker (RGBA: Weiß).
pub const SHOT_FILL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Ring- und Textfarbe der Schlagmarker (RGBA: Blau).
pub const SHOT_OUTLINE_COLOR: [f32; 4] = [0.08, 0.40, 0.75, 1.0];

// ── Diagramm-Hintergrund ────────────────────────────────────────────

/// Farbe des Rough rund um das Fairway (RGBA).
pub const ROUGH_COLOR: [f32; 4] = [0.24, 0.47, 0.22, 1.0];
/// Farbe des Fairways (RGBA).
pub const FAIRWAY_COLOR: [f32; 4] = [0.42, 0.66, 0.31, 1.0];
/// Farbe des Grüns (RGBA).
pub const GREEN_COLOR: [f32; 4] = [0.55, 0.78, 0.40, 1.0];

// ── Streuungs-Darstellung ───────────────────────────────────────────

/// Füllfarbe der Streuungsellipse (RGBA: Blau, transparent).
pub const DISPERSION_FILL_COLOR: [f32; 4] = [0.08, 0.40, 0.75, 0.2];
/// Randfarbe der Streuungsellipse (RGBA: Blau).
pub const DISPERSION_OUTLINE_COLOR: [f32; 4] = [0.08, 0.40, 0.75, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Darstellungs-Optionen.
/// Wird als `redtail_round_tracker.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerOptions {
    /// Radius der Abschlag-Markierung in Bildpixeln
    pub tee_marker_radius_px: f32,
    /// Radius der Schlagmarker in Bildpixeln
    pub shot_marker_radius_px: f32,
    /// Höhe der Fahnenstange in Bildpixeln
    pub pin_flag_height_px: f32,
    /// Füllfarbe der Abschlag-Markierung
    pub tee_color: [f32; 4],
    /// Farbe von Fahne und Stange
    pub pin_color: [f32; 4],
    /// Füllfarbe der Schlagmarker
    pub shot_fill_color: [f32; 4],
    /// Ring- und Textfarbe der Schlagmarker
    pub shot_outline_color: [f32; 4],
    /// Farbe des Rough im Diagramm-Hintergrund
    pub rough_color: [f32; 4],
    /// Farbe des Fairways im Diagramm-Hintergrund
    pub fairway_color: [f32; 4],
    /// Farbe des Grüns im Diagramm-Hintergrund
    pub green_color: [f32; 4],
    /// Füllfarbe der Streuungsellipse
    pub dispersion_fill_color: [f32; 4],
    /// Randfarbe der Streuungsellipse
    pub dispersion_outline_color: [f32; 4],
    /// Schlagnummern in den Markern anzeigen
    #[serde(default = "default_show_shot_numbers")]
    pub show_shot_numbers: bool,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            tee_marker_radius_px: TEE_MARKER_RADIUS_PX,
            shot_marker_radius_px: SHOT_MARKER_RADIUS_PX,
            pin_flag_height_px: PIN_FLAG_HEIGHT_PX,
            tee_color: TEE_COLOR,
            pin_color: PIN_COLOR,
            shot_fill_color: SHOT_FILL_COLOR,
            shot_outline_color: SHOT_OUTLINE_COLOR,
            rough_color: ROUGH_COLOR,
            fairway_color: FAIRWAY_COLOR,
            green_color: GREEN_COLOR,
            dispersion_fill_color: DISPERSION_FILL_COLOR,
            dispersion_outline_color: DISPERSION_OUTLINE_COLOR,
            show_shot_numbers: default_show_shot_numbers(),
        }
    }
}

/// Serde-Default für `show_shot_numbers` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_show_shot_numbers() -> bool {
    true
}

impl TrackerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("redtail_round_tracker"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("redtail_round_tracker.toml")
    }
}
