//! Koordinaten-Abbildung zwischen Bildschirm und Lochdiagramm.

use glam::Vec2;

/// Ansichtsmodus des Lochdiagramms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Gesamtes Loch in den Darstellungsbereich eingepasst
    #[default]
    Full,
    /// 2×-Zoom mit verschiebbarem Ausschnitt
    Panned,
}

/// Abbildung zwischen Bildschirm-Pixeln und Bildpixel-Koordinaten
/// des Lochdiagramms, für beide Ansichtsmodi.
///
/// Die Abbildung ist invertierbar: `image_to_screen` nach
/// `screen_to_image` liefert den Ausgangspunkt (Float-Toleranz).
#[derive(Debug, Clone)]
pub struct DiagramView {
    /// Aktiver Ansichtsmodus
    pub mode: ViewMode,
    /// Pan-Offset im Panned-Modus, in Viewport-Einheiten
    pub pan: Vec2,
}

impl DiagramView {
    /// Breite des Lochbildes in Bildpixeln.
    pub const IMAGE_WIDTH: f32 = 1152.0;
    /// Höhe des Lochbildes in Bildpixeln.
    pub const IMAGE_HEIGHT: f32 = 768.0;
    /// Fester Zoomfaktor des Panned-Modus.
    pub const PAN_ZOOM: f32 = 2.0;

    /// Erstellt die Standardansicht (Full-Modus, zentrierter Pan).
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Full,
            pan: Self::centered_pan(),
        }
    }

    /// Bildgröße als Vektor.
    pub fn image_size() -> Vec2 {
        Vec2::new(Self::IMAGE_WIDTH, Self::IMAGE_HEIGHT)
    }

    /// Der Viewport des Panned-Modus hat die Ausmaße des Bildes.
    fn viewport_size() -> Vec2 {
        Self::image_size()
    }

    /// Pan-Offset, der den gezoomten Ausschnitt im Viewport zentriert.
    fn centered_pan() -> Vec2 {
        (Self::viewport_size() - Self::image_size() * Self::PAN_ZOOM) / 2.0
    }

    /// Konvertiert eine Bildschirmposition (relativ zum Darstellungsbereich)
    /// in Bildpixel-Koordinaten.
    ///
    /// Full-Modus: lineare Skalierung Darstellungsbereich → Bildgröße.
    /// Panned-Modus: Skalierung auf Viewport-Einheiten, dann Pan abziehen
    /// und durch den Zoomfaktor teilen.
    pub fn screen_to_image(&self, screen_pos: Vec2, display_size: Vec2) -> Vec2 {
        match self.mode {
            ViewMode::Full => screen_pos / display_size * Self::image_size(),
            ViewMode::Panned => {
                let viewport_pos = screen_pos / display_size * Self::viewport_size();
                (viewport_pos - self.pan) / Self::PAN_ZOOM
            }
        }
    }

    /// Umkehrabbildung von Bildpixeln in Bildschirmkoordinaten
    /// (für das Zeichnen der Marker).
    pub fn image_to_screen(&self, image_pos: Vec2, display_size: Vec2) -> Vec2 {
        match self.mode {
            ViewMode::Full => image_pos / Self::image_size() * display_size,
            ViewMode::Panned => {
                let viewport_pos = image_pos * Self::PAN_ZOOM + self.pan;
                viewport_pos / Self::viewport_size() * display_size
            }
        }
    }

    /// Skalierungsfaktor Bildpixel → Bildschirmpixel bei gegebener
    /// Darstellungsgröße (für Marker-Radien und Strichstärken).
    pub fn screen_per_image_pixel(&self, display_size: Vec2) -> f32 {
        match self.mode {
            ViewMode::Full => display_size.x / Self::IMAGE_WIDTH,
            ViewMode::Panned => display_size.x / Self::viewport_size().x * Self::PAN_ZOOM,
        }
    }

    /// Verschiebt den Ausschnitt um ein Delta in Viewport-Einheiten.
    /// Nur im Panned-Modus wirksam; das Ergebnis bleibt geklemmt.
    pub fn pan_by(&mut self, delta: Vec2) {
        if self.mode != ViewMode::Panned {
            return;
        }
        self.pan = Self::clamp_pan(self.pan + delta);
    }

    /// Zentriert den gezoomten Ausschnitt wieder im Viewport.
    pub fn reset_pan(&mut self) {
        self.pan = Self::centered_pan();
    }

    /// Wechselt zwischen Full- und Panned-Modus.
    /// Beim Wechsel in den Panned-Modus wird der Ausschnitt zentriert.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ViewMode::Full => {
                self.pan = Self::centered_pan();
                ViewMode::Panned
            }
            ViewMode::Panned => ViewMode::Full,
        };
    }

    /// Klemmt den Pan-Offset, sodass der Ausschnitt nie über den
    /// Bildrand hinaus zeigt: je Achse `[viewport − bild × zoom, 0]`.
    fn clamp_pan(pan: Vec2) -> Vec2 {
        let min = Self::viewport_size() - Self::image_size() * Self::PAN_ZOOM;
        pan.clamp(min, Vec2::ZERO)
    }
}

impl Default for DiagramView {
    fn default() -> Self {
        Self::new()
    }
}
