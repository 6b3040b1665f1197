//! Geordnete Punktmenge als editierbare Grundlage der Kurve.

use glam::DVec2;

/// Nach x aufsteigend sortierte Stützpunkte.
///
/// Einfügen per Binärsuche + Positions-Insert (O(n) pro Punkt) statt
/// vollständigem Neusortieren. Gleiche x-Werte bleiben beide erhalten,
/// die Reihenfolge innerhalb gleicher x ist nicht garantiert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<DVec2>,
}

impl PointSet {
    /// Erstellt eine leere Punktmenge.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Fügt einen Punkt ein und hält die x-Sortierung aufrecht.
    pub fn add(&mut self, x: f64, y: f64) {
        let index = self.points.partition_point(|p| p.x <= x);
        self.points.insert(index, DVec2::new(x, y));
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Anzahl der Punkte.
    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Multipliziert alle Koordinaten mit `factor`.
    ///
    /// Positive Faktoren erhalten die x-Reihenfolge, daher kein Neusortieren.
    pub fn scale(&mut self, factor: f64) {
        for point in &mut self.points {
            *point *= factor;
        }
    }

    /// Read-only Sicht auf die sortierten Punkte.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &DVec2> {
        self.points.iter()
    }

    /// Prüft die Sortier-Invariante.
    pub fn is_sorted_by_x(&self) -> bool {
        self.points.windows(2).all(|w| w[0].x <= w[1].x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn add_keeps_points_sorted_by_x() {
        let mut set = PointSet::new();
        set.add(0.5, 0.0);
        set.add(-0.5, 0.1);
        set.add(0.0, 0.5);
        set.add(-0.9, -0.3);

        let xs: Vec<f64> = set.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-0.9, -0.5, 0.0, 0.5]);
        assert!(set.is_sorted_by_x());
    }

    #[test]
    fn add_retains_equal_x_points() {
        let mut set = PointSet::new();
        set.add(0.2, 0.1);
        set.add(0.2, 0.4);
        set.add(0.2, 0.1);

        assert_eq!(set.count(), 3);
        assert!(set.is_sorted_by_x());
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = PointSet::new();
        set.add(0.1, 0.2);
        set.add(0.3, 0.4);

        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
    }

    #[test]
    fn scale_multiplies_all_coordinates() {
        let mut set = PointSet::new();
        set.add(-0.25, 0.5);
        set.add(0.75, -0.125);

        set.scale(2.0);

        assert_relative_eq!(set.points()[0].x, -0.5);
        assert_relative_eq!(set.points()[0].y, 1.0);
        assert_relative_eq!(set.points()[1].x, 1.5);
        assert_relative_eq!(set.points()[1].y, -0.25);
        assert!(set.is_sorted_by_x());
    }
}
