//! Geometric feasibility kernel for 3D views of linear constraint systems.
//!
//! The interactive layer owns the full matrix `A`, the bound vector `b`, and
//! the axis selection; this crate answers the geometric question behind each
//! view: which polytope does the selected 3D subspace see, and where are its
//! corners. All entry points are pure functions; callers re-run the pipeline
//! on every edit and cache results keyed by their inputs if they care.

pub mod error;
pub mod geom3;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ConfigError;
pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};

/// Common kernel exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::geom3::{
        enumerate_vertices, enumerate_vertices_with, project, project_system, AxisTriple, Hs3,
        Tolerances,
    };
    pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
}
