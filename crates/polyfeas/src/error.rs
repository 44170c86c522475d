//! Boundary errors for caller contract violations.
//!
//! Singular plane triples and infeasible candidate points are *not* errors;
//! they are expected outcomes of enumerating arbitrary half-space
//! arrangements and are silently skipped in the hot loop. `ConfigError` is
//! raised before any numeric work or not at all.

use thiserror::Error;

/// Invalid kernel configuration supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The three view axes must be distinct indices.
    #[error("axis selection ({0}, {1}, {2}) repeats an index")]
    DuplicateAxes(usize, usize, usize),
    /// Constraint matrix and bound vector disagree on the number of rows.
    #[error("constraint matrix has {rows} rows but bound vector has {bounds}")]
    DimensionMismatch { rows: usize, bounds: usize },
}
