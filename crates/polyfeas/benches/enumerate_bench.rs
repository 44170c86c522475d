//! Criterion benchmarks for per-view vertex enumeration.
//! Focus sizes: m in {4, 6, 8, 10, 16} half-spaces; real views stay <= 10.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polyfeas::geom3::rand::random_arrangement;
use polyfeas::geom3::{enumerate_vertices, feasible_lattice_points, Tolerances};

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom3");
    for &m in &[4usize, 6, 8, 10, 16] {
        group.bench_with_input(BenchmarkId::new("enumerate_vertices", m), &m, |b, &m| {
            b.iter_batched(
                || random_arrangement(m, 43),
                |hs| {
                    let _vs = enumerate_vertices(&hs);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("lattice_probe", m), &m, |b, &m| {
            let tol = Tolerances::default();
            b.iter_batched(
                || {
                    let hs = random_arrangement(m, 44);
                    let vs = enumerate_vertices(&hs);
                    (hs, vs)
                },
                |(hs, vs)| {
                    let _pts = feasible_lattice_points(&hs, &vs, tol);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_enumerate);
criterion_main!(benches);
