//! Löser für zyklisch-tridiagonale Gleichungssysteme.
//!
//! Thomas-Algorithmus für den tridiagonalen Kern, die beiden Eckeinträge
//! werden über eine Sherman-Morrison-Korrektur eingerechnet.

use std::ops::{Add, Div, Mul, Sub};
use thiserror::Error;

/// Pivot-Beträge darunter gelten als singulär.
const PIVOT_EPSILON: f64 = 1e-12;

/// Rechte Seite eines Systems: skalar oder vektoriell (z.B. `DVec2`).
pub trait RightHandSide:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> + Div<f64, Output = Self>
{
}

impl<T> RightHandSide for T where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T> + Div<f64, Output = T>
{
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("cyclic system needs at least 3 rows, got {0}")]
    TooSmall(usize),
    #[error("band lengths differ: sub={sub}, diag={diag}, sup={sup}, rhs={rhs}")]
    DimensionMismatch {
        sub: usize,
        diag: usize,
        sup: usize,
        rhs: usize,
    },
    #[error("vanishing pivot in row {0}")]
    SingularPivot(usize),
}

/// Zyklisch-tridiagonale Matrix.
///
/// Zeile `i` lautet `sub[i]·x[i-1] + diag[i]·x[i] + sup[i]·x[i+1]`,
/// Indizes modulo `n`: `sub[0]` koppelt an `x[n-1]`, `sup[n-1]` an `x[0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicTridiagonal {
    sub: Vec<f64>,
    diag: Vec<f64>,
    sup: Vec<f64>,
}

impl CyclicTridiagonal {
    pub fn new(sub: Vec<f64>, diag: Vec<f64>, sup: Vec<f64>) -> Result<Self, SolverError> {
        if sub.len() != diag.len() || sup.len() != diag.len() {
            return Err(SolverError::DimensionMismatch {
                sub: sub.len(),
                diag: diag.len(),
                sup: sup.len(),
                rhs: diag.len(),
            });
        }
        if diag.len() < 3 {
            return Err(SolverError::TooSmall(diag.len()));
        }
        Ok(Self { sub, diag, sup })
    }

    pub fn len(&self) -> usize {
        self.diag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// Löst `A·x = rhs`.
    pub fn solve<T: RightHandSide>(&self, rhs: &[T]) -> Result<Vec<T>, SolverError> {
        let n = self.len();
        if rhs.len() != n {
            return Err(SolverError::DimensionMismatch {
                sub: self.sub.len(),
                diag: n,
                sup: self.sup.len(),
                rhs: rhs.len(),
            });
        }

        let bottom_left = self.sup[n - 1];
        let top_right = self.sub[0];
        let gamma = -self.diag[0];
        if gamma.abs() < PIVOT_EPSILON {
            return Err(SolverError::SingularPivot(0));
        }

        // Modifizierte Diagonale: A = B + u·vᵀ mit u = (γ,0,…,0,α), v = (1,0,…,0,β/γ)
        let mut diag = self.diag.clone();
        diag[0] -= gamma;
        diag[n - 1] -= bottom_left * top_right / gamma;

        let mut x = solve_tridiagonal(&self.sub, &diag, &self.sup, rhs)?;

        let mut u = vec![0.0; n];
        u[0] = gamma;
        u[n - 1] = bottom_left;
        let z = solve_tridiagonal(&self.sub, &diag, &self.sup, &u)?;

        let denominator = 1.0 + z[0] + top_right * z[n - 1] / gamma;
        if denominator.abs() < PIVOT_EPSILON {
            return Err(SolverError::SingularPivot(n - 1));
        }
        let fact = (x[0] + x[n - 1] * (top_right / gamma)) / denominator;

        for (xi, zi) in x.iter_mut().zip(&z) {
            *xi = *xi - fact * *zi;
        }
        Ok(x)
    }

    /// Berechnet `A·x` (Residuen-Prüfung in Tests).
    pub fn apply<T: RightHandSide>(&self, x: &[T]) -> Vec<T> {
        let n = self.len();
        (0..n)
            .map(|i| {
                let prev = x[(i + n - 1) % n];
                let next = x[(i + 1) % n];
                prev * self.sub[i] + x[i] * self.diag[i] + next * self.sup[i]
            })
            .collect()
    }
}

/// Thomas-Algorithmus ohne Pivotisierung; `sub[0]` und `sup[n-1]` werden ignoriert.
fn solve_tridiagonal<T: RightHandSide>(
    sub: &[f64],
    diag: &[f64],
    sup: &[f64],
    rhs: &[T],
) -> Result<Vec<T>, SolverError> {
    let n = diag.len();
    let mut gam = vec![0.0; n];
    let mut x = Vec::with_capacity(n);

    let mut bet = diag[0];
    if bet.abs() < PIVOT_EPSILON {
        return Err(SolverError::SingularPivot(0));
    }
    x.push(rhs[0] / bet);

    for j in 1..n {
        gam[j] = sup[j - 1] / bet;
        bet = diag[j] - sub[j] * gam[j];
        if bet.abs() < PIVOT_EPSILON {
            return Err(SolverError::SingularPivot(j));
        }
        let value = (rhs[j] - x[j - 1] * sub[j]) / bet;
        x.push(value);
    }

    for j in (0..n - 1).rev() {
        x[j] = x[j] - x[j + 1] * gam[j + 1];
    }

    Ok(x)
}
