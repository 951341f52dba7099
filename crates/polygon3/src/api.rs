//! Curated flat API.
//!
//! - Prefer these re-exports in binaries and benches; module paths under
//!   `geom3` may move.

// Boundary store and queries
pub use crate::geom3::{
    orthonormal_basis, signed_area, Aabb3, EarClipOutcome, IndexedVertex, Polygon3, Projection,
    TriCfg, Triangulation,
};
// Random polygons
pub use crate::geom3::rand::{
    draw_convex_polygon, draw_star_polygon, ReplayToken as PolygonReplay, StarCfg, VertexCount,
};

use nalgebra::Vector3;

/// Triangulate a bare boundary; indices are the positions `0..n`.
///
/// Convenience for callers without their own vertex numbering.
pub fn triangulate_positions(positions: &[Vector3<f64>]) -> Triangulation {
    positions.iter().copied().collect::<Polygon3>().triangulate()
}
