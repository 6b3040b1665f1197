/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand mit initialer Viewport-Größe.
    pub fn new(viewport_size: [f32; 2]) -> Self {
        Self { viewport_size }
    }

    /// Viewport-Größe als Vektor.
    pub fn size(&self) -> glam::Vec2 {
        glam::Vec2::from(self.viewport_size)
    }
}
