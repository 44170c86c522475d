//! Vertex enumeration: H→V for one 3D view.
//!
//! Deliberately combinatorial: every unordered triple of boundary planes is
//! intersected with an explicit cofactor solve (no generic or iterative
//! solver for a fixed 3×3 system). Singular triples and globally infeasible
//! candidates are skipped silently; they are normal outcomes, not failures.

use nalgebra::Vector3;

use super::cfg::Tolerances;
use super::types::Hs3;

/// Enumerate polytope vertices with the default tolerances.
pub fn enumerate_vertices(hs: &[Hs3]) -> Vec<Vector3<f64>> {
    enumerate_vertices_with(hs, Tolerances::default())
}

/// Enumerate every point where three boundary planes meet and all
/// inequalities hold within `tol.eps_feas`.
///
/// Output order is the lexicographic triple order `a < b < c`, so identical
/// input (including element order) yields identical output. A candidate
/// whose squared distance to an already-accepted vertex is below
/// `tol.eps_dedup_sq` collapses into that earlier vertex.
///
/// Fewer than 3 half-spaces, zero normals, and empty or unbounded regions
/// all yield an empty or partial set without error; callers treat an empty
/// set as "no renderable bounded volume".
pub fn enumerate_vertices_with(hs: &[Hs3], tol: Tolerances) -> Vec<Vector3<f64>> {
    let mut out: Vec<Vector3<f64>> = Vec::new();
    if hs.len() < 3 {
        return out;
    }
    for a in 0..hs.len() {
        for b in a + 1..hs.len() {
            for c in b + 1..hs.len() {
                let rows = [hs[a].n, hs[b].n, hs[c].n];
                let rhs = Vector3::new(-hs[a].d, -hs[b].d, -hs[c].d);
                let cand = match solve3(rows, rhs, tol.eps_singular) {
                    Some(x) => x,
                    None => continue,
                };
                if !hs.iter().all(|h| h.satisfies_eps(cand, tol.eps_feas)) {
                    continue;
                }
                if out
                    .iter()
                    .any(|p| (p - cand).norm_squared() < tol.eps_dedup_sq)
                {
                    continue;
                }
                out.push(cand);
            }
        }
    }
    out
}

/// Solve the 3×3 system with the given rows by Cramer's rule.
///
/// Returns `None` when |det| < eps (parallel or degenerate planes).
fn solve3(rows: [Vector3<f64>; 3], rhs: Vector3<f64>, eps: f64) -> Option<Vector3<f64>> {
    let m = [
        [rows[0].x, rows[0].y, rows[0].z],
        [rows[1].x, rows[1].y, rows[1].z],
        [rows[2].x, rows[2].y, rows[2].z],
    ];
    let det = det3(m);
    if det.abs() < eps {
        return None;
    }
    let replaced = |col: usize| {
        let mut mc = m;
        mc[0][col] = rhs.x;
        mc[1][col] = rhs.y;
        mc[2][col] = rhs.z;
        det3(mc)
    };
    Some(Vector3::new(
        replaced(0) / det,
        replaced(1) / det,
        replaced(2) / det,
    ))
}

fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}
