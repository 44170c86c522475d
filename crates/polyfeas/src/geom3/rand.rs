//! Seeded random half-space arrangements for tests and benches.

use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::types::Hs3;

/// Draw `m` half-spaces with unit normals and the origin in the interior.
///
/// Directions are drawn by rejection from the cube and normalized; offsets
/// put each boundary plane at distance 0.5..1.5 from the origin, so with
/// enough directions the arrangement is usually bounded.
pub fn random_arrangement(m: usize, seed: u64) -> Vec<Hs3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut hs = Vec::with_capacity(m);
    for _ in 0..m {
        let n = random_direction(&mut rng);
        let c: f64 = rng.gen_range(0.5..1.5);
        // n·x <= c, i.e. n·x + (-c) <= 0
        hs.push(Hs3::new(n, -c));
    }
    hs
}

fn random_direction(rng: &mut StdRng) -> Vector3<f64> {
    loop {
        let v = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let norm = v.norm();
        if norm > 0.2 && norm <= 1.0 {
            return v / norm;
        }
    }
}
