//! Tolerance defaults for the 3D kernel.
//!
//! Policy
//! - Defaults are pinned constants and part of the observable contract; the
//!   test suite asserts against them. Callers that need different slack pass
//!   an explicit `Tolerances` to the `_with` entry points.

/// Numerical tolerances (singularity, feasibility slack, dedup distance).
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    /// Minimum |det| for a triple of normals to count as independent.
    pub eps_singular: f64,
    /// Slack admitted when testing `n·x + d <= 0`; keeps points lying on
    /// boundary planes despite floating-point error.
    pub eps_feas: f64,
    /// Squared distance below which two candidate vertices are one point.
    pub eps_dedup_sq: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            eps_singular: 1e-8,
            eps_feas: 1e-6,
            eps_dedup_sq: 1e-10,
        }
    }
}
