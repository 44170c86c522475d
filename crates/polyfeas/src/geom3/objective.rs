//! Objective evaluation over a vertex set (optimum highlighting).

use std::cmp::Ordering;

use nalgebra::Vector3;

/// Extreme values `(min, max)` of `c · v` over the vertices.
///
/// A linear objective over a polytope attains its extremes at vertices, so
/// this is the full range over the feasible region. `None` for an empty set.
pub fn objective_range(c: Vector3<f64>, verts: &[Vector3<f64>]) -> Option<(f64, f64)> {
    let mut values = verts.iter().map(|v| c.dot(v));
    let first = values.next()?;
    Some(values.fold((first, first), |(lo, hi), f| (lo.min(f), hi.max(f))))
}

/// Vertex attaining the maximum of `c · v` (the highlighted optimum).
pub fn argmax_vertex(c: Vector3<f64>, verts: &[Vector3<f64>]) -> Option<Vector3<f64>> {
    verts.iter().copied().max_by(|a, b| {
        c.dot(a)
            .partial_cmp(&c.dot(b))
            .unwrap_or(Ordering::Equal)
    })
}
