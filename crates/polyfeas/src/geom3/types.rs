//! Core 3D types: half-spaces and the view's axis selection.

use nalgebra::Vector3;

use crate::error::ConfigError;

/// Closed half-space `n · x + d <= 0` in R^3.
///
/// Invariants:
/// - `n` is not normalized; `d` is any finite real.
/// - Membership uses `n·x + d <= eps`.
#[derive(Clone, Copy, Debug)]
pub struct Hs3 {
    pub n: Vector3<f64>,
    pub d: f64,
}

impl Hs3 {
    #[inline]
    pub fn new(n: Vector3<f64>, d: f64) -> Self {
        Self { n, d }
    }
    /// Signed slack: negative inside, zero on the boundary plane.
    #[inline]
    pub fn eval(&self, p: Vector3<f64>) -> f64 {
        self.n.dot(&p) + self.d
    }
    #[inline]
    pub fn satisfies_eps(&self, p: Vector3<f64>, eps: f64) -> bool {
        self.eval(p) <= eps
    }
}

/// The three of N problem dimensions shown by a 3D view.
///
/// Indices must be distinct (checked at construction, before any numeric
/// work). They may exceed a row's length: rows are conceptually zero-padded,
/// so such coefficients read as 0 in `project`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisTriple {
    i: usize,
    j: usize,
    k: usize,
}

impl AxisTriple {
    pub fn new(i: usize, j: usize, k: usize) -> Result<Self, ConfigError> {
        if i == j || j == k || i == k {
            return Err(ConfigError::DuplicateAxes(i, j, k));
        }
        Ok(Self { i, j, k })
    }

    #[inline]
    pub fn indices(&self) -> (usize, usize, usize) {
        (self.i, self.j, self.k)
    }

    /// Whether dimension `m` is one of the shown axes.
    #[inline]
    pub fn contains(&self, m: usize) -> bool {
        m == self.i || m == self.j || m == self.k
    }
}
