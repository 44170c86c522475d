//! Whole-system transforms used by the explainer's moving views.

use nalgebra::{Matrix3, Vector3};

use super::types::Hs3;

/// Shrink each half-space so that an axis-aligned cube with edge `e`,
/// centered at any point of the inset region, fits inside the original.
///
/// Derivation: the support of the cube [-e/2, e/2]^3 in direction `n` is
/// `(e/2)·‖n‖₁`, so `n·x + d + (e/2)·‖n‖₁ <= 0` says exactly "the cube
/// placed at x stays feasible".
pub fn inset_for_cube(hs: &[Hs3], edge: f64) -> Vec<Hs3> {
    hs.iter()
        .map(|h| Hs3::new(h.n, h.d + 0.5 * edge * l1_norm(h.n)))
        .collect()
}

/// Scale all offsets by `t`, scaling the region about the origin.
///
/// Matches "scale every bound by t" when the fixed-variable contribution is
/// zero (`d = -bound`); with non-zero fixed contributions, re-project from
/// scaled bounds instead.
pub fn scale_region(hs: &[Hs3], t: f64) -> Vec<Hs3> {
    hs.iter().map(|h| Hs3::new(h.n, t * h.d)).collect()
}

/// Push-forward under an invertible affine map `y = M x + t`.
///
/// Derivation: with `n·x + d <= 0` and `x = M^{-1}(y - t)`, the image region
/// is `n'·y + d' <= 0` for `n' = M^{-T} n` and `d' = d - n'·t`. `None` if
/// `M` is singular.
pub fn push_forward(hs: &[Hs3], m: Matrix3<f64>, t: Vector3<f64>) -> Option<Vec<Hs3>> {
    let minv = m.try_inverse()?;
    Some(
        hs.iter()
            .map(|h| {
                let n_new = minv.transpose() * h.n;
                Hs3::new(n_new, h.d - n_new.dot(&t))
            })
            .collect(),
    )
}

#[inline]
fn l1_norm(n: Vector3<f64>) -> f64 {
    n.x.abs() + n.y.abs() + n.z.abs()
}
