//! Geschlossene, interpolierende kubische B-Spline.
//!
//! Die Punktfolge wird durch Anhängen des ersten Punkts geschlossen, jeder
//! Punkt erhält einen monoton steigenden Parameter in [0, 1]. Der Knotenvektor
//! setzt sich mit Periode 1 fort, die Koeffizienten wiederholen sich mit
//! Periode `n`. Damit stimmen Wert, erste und zweite Ableitung an der Naht
//! überein. Am Knoten `u_i` sind genau drei Basisfunktionen ungleich null,
//! nach Index-Verschiebung ist das Interpolationssystem zyklisch tridiagonal.

use super::cyclic_solver::CyclicTridiagonal;
use super::error::CurveError;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Mindestanzahl Punkte für eine geschlossene Kurve.
pub const MIN_POINTS: usize = 3;
/// Standard-Anzahl Abtastwerte der Polyline.
pub const DEFAULT_SAMPLES: usize = 1000;
/// Untere Grenze für die Abtastrate.
pub const MIN_SAMPLES: usize = 16;
/// Obere Grenze für die Abtastrate.
pub const MAX_SAMPLES: usize = 100_000;

const DEGREE: usize = 3;

/// Art der Parameterzuweisung an die Stützpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parametrization {
    /// Gleichabständige Parameter `i / n`
    Uniform,
    /// Parameter proportional zur kumulierten Sehnenlänge
    #[default]
    ChordLength,
}

/// Passt geschlossene Kurven an Punktfolgen an und tastet sie ab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicCurveFitter {
    samples: usize,
    parametrization: Parametrization,
}

impl Default for PeriodicCurveFitter {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES, Parametrization::default())
    }
}

impl PeriodicCurveFitter {
    /// Erstellt einen Fitter; `samples` wird auf [`MIN_SAMPLES`, `MAX_SAMPLES`] begrenzt.
    pub fn new(samples: usize, parametrization: Parametrization) -> Self {
        Self {
            samples: samples.clamp(MIN_SAMPLES, MAX_SAMPLES),
            parametrization,
        }
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn parametrization(&self) -> Parametrization {
        self.parametrization
    }

    /// Löst das periodische Interpolationsproblem für `points` (Reihenfolge = Durchlaufrichtung).
    ///
    /// Direkt aufeinanderfolgende identische Punkte (auch letzter/erster)
    /// werden vorher zusammengefasst.
    pub fn fit(&self, points: &[DVec2]) -> Result<ClosedCurve, CurveError> {
        if points.len() < MIN_POINTS {
            return Err(CurveError::InsufficientPoints {
                count: points.len(),
                minimum: MIN_POINTS,
            });
        }
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(CurveError::degenerate(format!(
                "non-finite point ({}, {})",
                bad.x, bad.y
            )));
        }

        let distinct = collapse_duplicates(points);
        if distinct.len() != points.len() {
            log::warn!(
                "{} doppelte Punkte vor dem Spline-Fit zusammengefasst",
                points.len() - distinct.len()
            );
        }
        if distinct.len() < MIN_POINTS {
            return Err(CurveError::degenerate(format!(
                "only {} distinct points after collapsing duplicates",
                distinct.len()
            )));
        }

        let params = assign_parameters(&distinct, self.parametrization);
        ClosedCurve::interpolate(&distinct, params)
    }

    /// Fit + Abtastung in einem Schritt.
    pub fn polyline(&self, points: &[DVec2]) -> Result<Vec<DVec2>, CurveError> {
        Ok(self.fit(points)?.sample(self.samples))
    }
}

/// Ergebnis eines Fits: periodische kubische B-Spline über [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedCurve {
    /// Knotenparameter `u_0 = 0 < … < u_n = 1` (inkl. Schließpunkt)
    params: Vec<f64>,
    /// Periodisch fortgesetzte Knoten, `knots[k + 3] = t_k` für `k ∈ -3..=n+3`
    knots: Vec<f64>,
    /// Koeffizienten `c_0 … c_{n-1}`, `c_{j+n} = c_j`
    coefficients: Vec<DVec2>,
}

impl ClosedCurve {
    fn interpolate(points: &[DVec2], params: Vec<f64>) -> Result<Self, CurveError> {
        let n = points.len();
        let knots = periodic_knots(&params);

        let mut sub = Vec::with_capacity(n);
        let mut diag = Vec::with_capacity(n);
        let mut sup = Vec::with_capacity(n);
        for (i, &u) in params[..n].iter().enumerate() {
            // N[0..3] gehören zu c_{i-3}, c_{i-2}, c_{i-1}; N[3] verschwindet am Knoten
            let basis = basis_functions(&knots, i + DEGREE, u);
            sub.push(basis[0]);
            diag.push(basis[1]);
            sup.push(basis[2]);
        }

        let system = CyclicTridiagonal::new(sub, diag, sup)
            .map_err(|e| CurveError::degenerate(e.to_string()))?;
        // Unbekannte d_i = c_{i-2}
        let shifted = system
            .solve(points)
            .map_err(|e| CurveError::degenerate(e.to_string()))?;

        let coefficients: Vec<DVec2> = (0..n).map(|k| shifted[(k + 2) % n]).collect();
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(CurveError::degenerate("non-finite spline coefficients"));
        }

        Ok(Self {
            params,
            knots,
            coefficients,
        })
    }

    /// Anzahl der (verschiedenen) Stützpunkte.
    pub fn point_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Parameter der Stützpunkte inklusive Schließpunkt (`u_n = 1`).
    pub fn parameters(&self) -> &[f64] {
        &self.params
    }

    /// B-Spline-Koeffizienten (Kontrollpunkte) einer Periode.
    pub fn control_points(&self) -> &[DVec2] {
        &self.coefficients
    }

    /// Wertet die Kurve bei `u` aus. Außerhalb von [0, 1] wird auf den Rand geklemmt.
    pub fn evaluate(&self, u: f64) -> DVec2 {
        let n = self.coefficients.len();
        let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
        let span = self
            .params
            .partition_point(|&p| p <= u)
            .saturating_sub(1)
            .min(n - 1);

        let basis = basis_functions(&self.knots, span + DEGREE, u);
        basis
            .iter()
            .enumerate()
            .fold(DVec2::ZERO, |acc, (r, &weight)| {
                acc + self.coefficients[(span + r + n - DEGREE) % n] * weight
            })
    }

    /// Tastet eine volle Periode an `count` gleichabständigen Parametern ab.
    ///
    /// Der jeweils nächstgelegene Abtastwert wird auf den Knotenparameter
    /// gezogen, damit jeder Stützpunkt exakt in der Polyline liegt.
    /// Erster und letzter Wert sind identisch.
    pub fn sample(&self, count: usize) -> Vec<DVec2> {
        let count = count.max(2);
        let last = (count - 1) as f64;
        let mut grid: Vec<f64> = (0..count).map(|k| k as f64 / last).collect();
        for &u in &self.params[1..self.coefficients.len()] {
            let k = (u * last).round() as usize;
            if k > 0 && k < count - 1 {
                grid[k] = u;
            }
        }

        let mut samples: Vec<DVec2> = grid.iter().map(|&u| self.evaluate(u)).collect();
        // Naht exakt schließen
        samples[count - 1] = samples[0];
        samples
    }
}

/// Fasst zyklisch aufeinanderfolgende identische Punkte zusammen.
fn collapse_duplicates(points: &[DVec2]) -> Vec<DVec2> {
    let mut distinct: Vec<DVec2> = Vec::with_capacity(points.len());
    for &point in points {
        if distinct.last() != Some(&point) {
            distinct.push(point);
        }
    }
    while distinct.len() > 1 && distinct.first() == distinct.last() {
        distinct.pop();
    }
    distinct
}

/// Parameter `u_0 … u_n` der geschlossenen Folge, normiert auf [0, 1].
fn assign_parameters(points: &[DVec2], parametrization: Parametrization) -> Vec<f64> {
    let n = points.len();
    let mut params = Vec::with_capacity(n + 1);

    match parametrization {
        Parametrization::Uniform => {
            params.extend((0..=n).map(|i| i as f64 / n as f64));
        }
        Parametrization::ChordLength => {
            let chords: Vec<f64> = (0..n)
                .map(|i| points[i].distance(points[(i + 1) % n]))
                .collect();
            let total: f64 = chords.iter().sum();
            let mut acc = 0.0;
            params.push(0.0);
            for chord in &chords {
                acc += chord / total;
                params.push(acc);
            }
        }
    }

    params[n] = 1.0;
    params
}

/// Periodische Fortsetzung: `t_k = u_{k mod n} + ⌊k / n⌋` für `k ∈ -3..=n+3`.
fn periodic_knots(params: &[f64]) -> Vec<f64> {
    let n = params.len() - 1;
    let n_signed = n as i64;
    (-(DEGREE as i64)..=n_signed + DEGREE as i64)
        .map(|k| params[k.rem_euclid(n_signed) as usize] + k.div_euclid(n_signed) as f64)
        .collect()
}

/// Nicht verschwindende kubische Basisfunktionen `N_{span-3} … N_span` bei `u`
/// (Cox-de-Boor, Dreiecksschema). Voraussetzung: `knots[span] <= u <= knots[span + 1]`.
fn basis_functions(knots: &[f64], span: usize, u: f64) -> [f64; DEGREE + 1] {
    let mut basis = [0.0; DEGREE + 1];
    let mut left = [0.0; DEGREE + 1];
    let mut right = [0.0; DEGREE + 1];
    basis[0] = 1.0;

    for j in 1..=DEGREE {
        left[j] = u - knots[span + 1 - j];
        right[j] = knots[span + j] - u;
        let mut saved = 0.0;
        for r in 0..j {
            let temp = basis[r] / (right[r + 1] + left[j - r]);
            basis[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        basis[j] = saved;
    }

    basis
}
