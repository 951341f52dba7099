//! Planar polygons in R^3: plane fitting, projection and ear-clipping triangulation.
//!
//! Purpose
//! - Triangulate simple (non-self-intersecting, hole-free) polygons given as an
//!   ordered 3D boundary with caller-assigned vertex indices. The polygon may be
//!   non-convex and arbitrarily tilted.
//!
//! Why this design (short)
//! - The normal is taken from the first non-degenerate vertex triple instead of
//!   a fixed one, so collinear runs at the start of the boundary do not matter.
//! - Triangulation projects onto the polygon's own plane. Dropping the smallest
//!   bounding-box axis can make tilted boundaries collinear in 2D.
//! - Degeneracy is data, not an error: zero normal, zero area, and an explicit
//!   `EarClipOutcome` telling callers whether the triangle list is complete.
//!
//! Assumptions and conventions
//! - Indices are opaque `i64`s; the output names triangles by them.
//! - Output triangles wind like the input boundary, except that the 3-vertex
//!   fast path always returns the input order.
//! - Tolerances: `TriCfg::default()` uses `1e-10` for both the normal cutoff
//!   and the ear convexity test.
//!
//! Code cross-refs: `Polygon3`, `Projection`, `orthonormal_basis`, `TriCfg`,
//! `EarClipOutcome`.

pub mod basis;
mod cfg;
mod earclip;
mod polygon;
pub mod rand;
mod types;

pub use basis::{orthonormal_basis, signed_area, Projection};
pub use cfg::TriCfg;
pub use earclip::{EarClipOutcome, Triangulation};
pub use polygon::Polygon3;
pub use types::{Aabb3, IndexedVertex};
