//! Feasibility-kernel runner: applies the projection/enumeration pipeline to
//! a JSON-described constraint system and emits JSON for the view layer.
//!
//! Input file shape:
//! `{"a": [[..]], "b": [..], "axes": [i, j, k], "fixed": {"m": value}}`
//! where `a`/`b` describe `A x <= b`, `axes` selects the three shown
//! dimensions, and `fixed` (optional) pins the remaining ones.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use polyfeas::geom3::{
    enumerate_vertices, feasible_lattice_points, inset_for_cube, project_system, AxisTriple, Hs3,
    Tolerances,
};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Feasibility kernel runner for constraint-system views")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Project a system and print its polytope vertices
    Vertices {
        #[arg(long)]
        input: String,
        /// Write JSON here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Inset the system for a cube probe of the given edge, then print vertices
    Cube {
        #[arg(long)]
        input: String,
        #[arg(long)]
        edge: f64,
    },
    /// List feasible lattice points inside the projected polytope
    Lattice {
        #[arg(long)]
        input: String,
    },
}

#[derive(Deserialize)]
struct SystemSpec {
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
    axes: [usize; 3],
    #[serde(default)]
    fixed: HashMap<usize, f64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Vertices { input, out } => vertices(input, out),
        Action::Cube { input, edge } => cube(input, edge),
        Action::Lattice { input } => lattice(input),
    }
}

fn load_system(path: &str) -> Result<Vec<Hs3>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let spec: SystemSpec = serde_json::from_str(&text).context("parsing system JSON")?;
    let axes = AxisTriple::new(spec.axes[0], spec.axes[1], spec.axes[2])?;
    let hs = project_system(&spec.a, &spec.b, axes, &spec.fixed)?;
    Ok(hs)
}

fn vertices(input: String, out: Option<String>) -> Result<()> {
    let hs = load_system(&input)?;
    let vs = enumerate_vertices(&hs);
    tracing::info!(input, planes = hs.len(), vertices = vs.len(), "vertices");
    emit(&result_json(&hs, &vs), out)
}

fn cube(input: String, edge: f64) -> Result<()> {
    let hs = load_system(&input)?;
    let inset = inset_for_cube(&hs, edge);
    let vs = enumerate_vertices(&inset);
    tracing::info!(input, edge, vertices = vs.len(), "cube");
    emit(&result_json(&inset, &vs), None)
}

fn lattice(input: String) -> Result<()> {
    let hs = load_system(&input)?;
    let vs = enumerate_vertices(&hs);
    let pts = feasible_lattice_points(&hs, &vs, Tolerances::default());
    tracing::info!(input, vertices = vs.len(), lattice = pts.len(), "lattice");
    let obj = serde_json::json!({
        "feasible": !pts.is_empty(),
        "points": pts.iter().map(|p| [p.x, p.y, p.z]).collect::<Vec<_>>(),
    });
    emit(&obj, None)
}

fn result_json(hs: &[Hs3], vs: &[polyfeas::Vec3<f64>]) -> serde_json::Value {
    serde_json::json!({
        "planes": hs
            .iter()
            .map(|h| serde_json::json!({"normal": [h.n.x, h.n.y, h.n.z], "d": h.d}))
            .collect::<Vec<_>>(),
        "vertices": vs.iter().map(|v| [v.x, v.y, v.z]).collect::<Vec<_>>(),
    })
}

fn emit(value: &serde_json::Value, out: Option<String>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(out) => {
            let out_path = Path::new(&out);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out_path, text)?;
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_and_enumerate_unit_cube() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.json");
        std::fs::write(
            &path,
            r#"{
                "a": [[1,0,0],[-1,0,0],[0,1,0],[0,-1,0],[0,0,1],[0,0,-1]],
                "b": [1,1,1,1,1,1],
                "axes": [0,1,2]
            }"#,
        )
        .unwrap();
        let hs = load_system(path.to_str().unwrap()).unwrap();
        assert_eq!(hs.len(), 6);
        assert_eq!(enumerate_vertices(&hs).len(), 8);
    }

    #[test]
    fn fixed_values_fold_into_offsets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixed.json");
        std::fs::write(
            &path,
            r#"{
                "a": [[2,0,3,0]],
                "b": [5],
                "axes": [0,2,3],
                "fixed": {"1": 0}
            }"#,
        )
        .unwrap();
        let hs = load_system(path.to_str().unwrap()).unwrap();
        assert_eq!(hs.len(), 1);
        assert!((hs[0].n.x - 2.0).abs() < 1e-12);
        assert!((hs[0].n.y - 3.0).abs() < 1e-12);
        assert!((hs[0].d + 5.0).abs() < 1e-12);
    }

    #[test]
    fn duplicate_axes_surface_as_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"a": [[1,0,0]], "b": [1], "axes": [0,0,1]}"#,
        )
        .unwrap();
        assert!(load_system(path.to_str().unwrap()).is_err());
    }
}
