//! Unit-cube walkthrough of the feasibility pipeline.
//!
//! Purpose
//! - Reproduce the explainer's slide sequence end to end without a renderer:
//!   project the cube system, enumerate its corners, inset it for a cube
//!   probe, and count the feasible lattice points.
//! - Give a quick timing data point for the full pipeline on a 6-face view.

use std::collections::HashMap;
use std::time::Instant;

use polyfeas::geom3::{feasible_lattice_points, inset_for_cube};
use polyfeas::prelude::*;

fn main() {
    // -1 <= x_i <= 1 written as rows of A x <= b.
    let a = vec![
        vec![1.0, 0.0, 0.0],
        vec![-1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, -1.0, 0.0],
        vec![0.0, 0.0, 1.0],
        vec![0.0, 0.0, -1.0],
    ];
    let b = vec![1.0; 6];
    let axes = AxisTriple::new(0, 1, 2).expect("distinct axes");

    let start = Instant::now();
    let hs = project_system(&a, &b, axes, &HashMap::new()).expect("well-formed system");
    let verts = enumerate_vertices(&hs);
    let inset = inset_for_cube(&hs, 1.0);
    let inset_verts = enumerate_vertices(&inset);
    let lattice = feasible_lattice_points(&hs, &verts, Tolerances::default());
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    println!("half-spaces:        {}", hs.len());
    println!("vertices:           {}", verts.len());
    println!("inset vertices:     {}", inset_verts.len());
    println!("lattice points:     {}", lattice.len());
    println!("pipeline time:      {elapsed:.3} ms");
}
