//! Integer-point probe: which lattice points does the view's polytope hold.
//!
//! The scan region is the bounding box of the vertex set, so an empty vertex
//! set (empty or unbounded region) yields no points; unbounded regions are
//! the caller's "nothing to draw" case, mirrored here.

use nalgebra::Vector3;

use super::cfg::Tolerances;
use super::types::Hs3;

/// Integer points feasible for all half-spaces, scanned over the vertex
/// bounding box.
///
/// Feasibility uses the same slack as vertex enumeration, so lattice points
/// on the boundary count as inside.
pub fn feasible_lattice_points(
    hs: &[Hs3],
    verts: &[Vector3<f64>],
    tol: Tolerances,
) -> Vec<Vector3<f64>> {
    let mut out = Vec::new();
    let (lo, hi) = match bounding_box(verts, tol.eps_feas) {
        Some(b) => b,
        None => return out,
    };
    for x in lo.x..=hi.x {
        for y in lo.y..=hi.y {
            for z in lo.z..=hi.z {
                let p = Vector3::new(x as f64, y as f64, z as f64);
                if hs.iter().all(|h| h.satisfies_eps(p, tol.eps_feas)) {
                    out.push(p);
                }
            }
        }
    }
    out
}

/// Whether the polytope contains any lattice point at all.
pub fn has_feasible_lattice_point(hs: &[Hs3], verts: &[Vector3<f64>], tol: Tolerances) -> bool {
    !feasible_lattice_points(hs, verts, tol).is_empty()
}

/// Integer bounding box of the vertex set, widened by `slack` so boundary
/// lattice points are not cut off by rounding.
fn bounding_box(
    verts: &[Vector3<f64>],
    slack: f64,
) -> Option<(Vector3<i64>, Vector3<i64>)> {
    let first = verts.first()?;
    let mut lo = *first;
    let mut hi = *first;
    for v in &verts[1..] {
        lo = lo.inf(v);
        hi = hi.sup(v);
    }
    let lo_int = |t: f64| (t - slack).ceil() as i64;
    let hi_int = |t: f64| (t + slack).floor() as i64;
    Some((
        Vector3::new(lo_int(lo.x), lo_int(lo.y), lo_int(lo.z)),
        Vector3::new(hi_int(hi.x), hi_int(hi.y), hi_int(hi.z)),
    ))
}
