//! Plane projection: one constraint row becomes one half-space of the view.
//!
//! Sign convention
//! - Canonical inequality: `row · x <= bound`, i.e. `row·x - bound <= 0`.
//! - Half-space: `n·x + d <= 0` with `n = (row[i], row[j], row[k])` and
//!   `d = sum over non-selected m of row[m]·fixed[m], minus bound`.
//! - The enumerator's feasibility test uses the same convention; the two
//!   sides must not be mixed with the opposite-sign variant.

use std::collections::HashMap;

use nalgebra::Vector3;

use crate::error::ConfigError;

use super::types::{AxisTriple, Hs3};

/// Project one row of `A` (with bound `b`) onto the selected view axes.
///
/// Non-selected variables are held at `fixed[m]` (0 when absent) and fold
/// into the offset. Out-of-range selected indices read as coefficient 0.
/// Pure; axis distinctness is already guaranteed by `AxisTriple`.
pub fn project(row: &[f64], bound: f64, axes: AxisTriple, fixed: &HashMap<usize, f64>) -> Hs3 {
    let (i, j, k) = axes.indices();
    let coeff = |m: usize| row.get(m).copied().unwrap_or(0.0);
    let n = Vector3::new(coeff(i), coeff(j), coeff(k));
    let mut d = -bound;
    for (m, &a_m) in row.iter().enumerate() {
        if axes.contains(m) {
            continue;
        }
        d += a_m * fixed.get(&m).copied().unwrap_or(0.0);
    }
    Hs3::new(n, d)
}

/// Project a whole system `A x <= b` into the view.
///
/// Fails fast on a row-count mismatch between `a` and `b`; per-row behavior
/// is exactly `project`.
pub fn project_system(
    a: &[Vec<f64>],
    b: &[f64],
    axes: AxisTriple,
    fixed: &HashMap<usize, f64>,
) -> Result<Vec<Hs3>, ConfigError> {
    if a.len() != b.len() {
        return Err(ConfigError::DimensionMismatch {
            rows: a.len(),
            bounds: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b)
        .map(|(row, &b_r)| project(row, b_r, axes, fixed))
        .collect())
}
