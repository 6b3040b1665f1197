//! 2D-Ansichtstransformation: Pan, Zoom und Achsenbeschriftung.
//!
//! Pan wirkt nur beim Zeichnen, Zoom skaliert die gespeicherten Punkte
//! (das übernimmt die Scene). Die Beschriftungen zählen Gitterzellen:
//! Pan verschiebt sie um ganze Schritte, Zoom skaliert sie invers.

use glam::{DVec2, Vec2};

/// Anzahl Gitterlinien pro Achse (-1.0 … 1.0 in 0.1-Schritten).
pub const TICK_COUNT: usize = 21;
/// Abstand der Gitterlinien in normalisierten Koordinaten.
pub const TICK_SPACING: f64 = 0.1;
/// Pan-Schritt in normalisierten Koordinaten.
pub const DEFAULT_PAN_STEP: f64 = 0.1;
/// Verschiebung der Beschriftung pro Pan-Schritt (Gitterindex).
pub const DEFAULT_LABEL_STEP: f64 = 1.0;
/// Startwert des Gitter-Ankers (linke untere Ecke).
pub const DEFAULT_ANCHOR: DVec2 = DVec2::new(-1.0, -1.0);

/// Richtung eines Pan-Schritts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    /// Einheitsvektor der Richtung (y zeigt nach oben).
    pub fn unit(self) -> DVec2 {
        match self {
            PanDirection::Left => DVec2::new(-1.0, 0.0),
            PanDirection::Right => DVec2::new(1.0, 0.0),
            PanDirection::Up => DVec2::new(0.0, 1.0),
            PanDirection::Down => DVec2::new(0.0, -1.0),
        }
    }
}

/// Pan/Zoom-Zustand plus Beschriftungswerte beider Achsen.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    /// Zeichen-Offset in normalisierten Koordinaten
    pub pan: DVec2,
    /// Kumulierter Zoom-Faktor (1.0 = Original)
    pub scale: f64,
    /// Hilfs-Koordinate des Gitterursprungs, folgt Pan und inversem Zoom
    pub anchor: DVec2,
    /// Beschriftungen der x-Achse
    pub labels_x: Vec<f64>,
    /// Beschriftungen der y-Achse
    pub labels_y: Vec<f64>,
    pan_step: f64,
    label_step: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// Erstellt eine Transformation mit Standard-Schrittweiten.
    pub fn new() -> Self {
        Self::with_steps(DEFAULT_PAN_STEP, DEFAULT_LABEL_STEP)
    }

    /// Erstellt eine Transformation mit eigenen Pan-/Beschriftungs-Schritten.
    pub fn with_steps(pan_step: f64, label_step: f64) -> Self {
        Self {
            pan: DVec2::ZERO,
            scale: 1.0,
            anchor: DEFAULT_ANCHOR,
            labels_x: default_labels(),
            labels_y: default_labels(),
            pan_step,
            label_step,
        }
    }

    pub fn pan_step(&self) -> f64 {
        self.pan_step
    }

    pub fn label_step(&self) -> f64 {
        self.label_step
    }

    /// Verschiebt die Ansicht um einen Schritt und nummeriert die Achse um.
    pub fn pan(&mut self, direction: PanDirection) {
        let delta = direction.unit() * self.pan_step;
        self.pan += delta;
        self.anchor += delta;

        let label_delta = direction.unit() * self.label_step;
        if label_delta.x != 0.0 {
            self.labels_x.iter_mut().for_each(|l| *l += label_delta.x);
        }
        if label_delta.y != 0.0 {
            self.labels_y.iter_mut().for_each(|l| *l += label_delta.y);
        }
    }

    /// Übernimmt einen Zoom-Schritt: Skala mal `factor`, Anker und Beschriftung mal `1/factor`.
    ///
    /// Die Punktdaten skaliert die Scene, der Pan-Vektor bleibt unverändert.
    /// `factor` muss positiv und endlich sein (prüft der Aufrufer).
    pub fn zoom(&mut self, factor: f64) {
        let inverse = 1.0 / factor;
        self.scale *= factor;
        self.anchor *= inverse;
        self.labels_x.iter_mut().for_each(|l| *l *= inverse);
        self.labels_y.iter_mut().for_each(|l| *l *= inverse);
    }

    /// Setzt Pan, Skala, Anker und Beschriftungen zurück.
    pub fn reset(&mut self) {
        *self = Self::with_steps(self.pan_step, self.label_step);
    }

    /// Prüft, ob sich die Transformation im Ausgangszustand befindet.
    pub fn is_default(&self) -> bool {
        *self == Self::with_steps(self.pan_step, self.label_step)
    }

    /// Gitterpositionen und Beschriftungen der x-Achse.
    pub fn x_ticks(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        tick_positions().zip(self.labels_x.iter().copied())
    }

    /// Gitterpositionen und Beschriftungen der y-Achse.
    pub fn y_ticks(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        tick_positions().zip(self.labels_y.iter().copied())
    }

    /// Konvertiert Pixel-Koordinaten (Ursprung oben links) in den normalisierten
    /// Raum [-1, 1]² mit y nach oben.
    pub fn screen_to_normalized(screen_pos: Vec2, screen_size: Vec2) -> DVec2 {
        let size = screen_size.max(Vec2::ONE).as_dvec2();
        let pos = screen_pos.as_dvec2();
        DVec2::new(2.0 * pos.x / size.x - 1.0, 1.0 - 2.0 * pos.y / size.y)
    }

    /// Umkehrung von [`Self::screen_to_normalized`].
    pub fn normalized_to_screen(normalized: DVec2, screen_size: Vec2) -> Vec2 {
        let size = screen_size.as_dvec2();
        DVec2::new(
            (normalized.x + 1.0) * 0.5 * size.x,
            (1.0 - normalized.y) * 0.5 * size.y,
        )
        .as_vec2()
    }
}

/// Beschriftung auf zwei Nachkommastellen gerundet.
pub fn format_label(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // -0.0 nicht als "-0" anzeigen
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

/// Feste Gitterpositionen -1.0, -0.9, …, 1.0.
pub fn tick_positions() -> impl Iterator<Item = f64> {
    (0..TICK_COUNT).map(|i| (i as f64 - 10.0) * TICK_SPACING)
}

fn default_labels() -> Vec<f64> {
    tick_positions().collect()
}
