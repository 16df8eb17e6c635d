use crate::core::DiagramView;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Abbildung Bildschirm ↔ Diagramm für das aktive Loch
    pub diagram: DiagramView,
    /// Aktuelle Größe des Diagramm-Darstellungsbereichs in Pixel
    pub display_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            diagram: DiagramView::new(),
            display_size: [0.0, 0.0],
        }
    }
}
