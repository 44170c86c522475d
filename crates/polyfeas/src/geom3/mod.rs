//! 3D feasibility geometry for constraint-system views.
//!
//! Purpose
//! - Turn rows of an N-dimensional system `A x <= b` into half-spaces of a
//!   selected 3D subspace and recover the polytope's vertices for display.
//!
//! Why this design
//! - Explicit C(M,3) enumeration with a cofactor solve: half-space counts per
//!   view stay small (≈ 6–10), so worst-case work is a few hundred triple
//!   evaluations and clarity beats asymptotics.
//! - Pure functions only. The interactive layer owns all state and replays
//!   the projection/enumeration pipeline whenever an input changes; with no
//!   shared state the kernel is trivially safe to call from several threads.
//!
//! Conventions
//! - Half-spaces use `n·x + d <= 0`; `n` is not normalized.
//! - The offset carries the fixed-variable contribution minus the bound (see
//!   `project`); projector and enumerator share this convention, flipping
//!   either side alone flips the feasible region.
//! - Tolerances: singularity cutoff 1e-8, feasibility slack 1e-6, dedup
//!   distance² 1e-10 (see `Tolerances`).

mod cfg;
mod enumerate;
mod lattice;
mod objective;
mod project;
pub mod rand;
mod transform;
mod types;

pub use cfg::Tolerances;
pub use enumerate::{enumerate_vertices, enumerate_vertices_with};
pub use lattice::{feasible_lattice_points, has_feasible_lattice_point};
pub use objective::{argmax_vertex, objective_range};
pub use project::{project, project_system};
pub use transform::{inset_for_cube, push_forward, scale_region};
pub use types::{AxisTriple, Hs3};
