//! Triangulation of planar polygons embedded in 3D.
//!
//! Modules
//! - `geom3`: boundary store (`Polygon3`), plane fitting, projection and ear
//!   clipping, plus reproducible random polygons in `geom3::rand`.
//! - `api`: flat re-exports for callers that want one import path.
//!
//! Vectors are `nalgebra` types over `f64` throughout.

pub mod api;
pub mod geom3;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom3::{EarClipOutcome, IndexedVertex, Polygon3, TriCfg, Triangulation};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom3::rand::{
        draw_convex_polygon, draw_star_polygon, ReplayToken, StarCfg, VertexCount,
    };
    pub use crate::geom3::{
        orthonormal_basis, Aabb3, EarClipOutcome, IndexedVertex, Polygon3, Projection, TriCfg,
        Triangulation,
    };
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}

/// Area of the triangle `(a, b, c)` in R³.
#[inline]
pub fn triangle_area(a: &Vec3<f64>, b: &Vec3<f64>, c: &Vec3<f64>) -> f64 {
    0.5 * (c - b).cross(&(a - b)).norm()
}
