//! Tolerances for plane fitting and ear clipping.
//!
//! Policy
//! - Defaults are fixed constants tuned for O(1)..O(1e3) coordinate scales.
//! - `TriCfg` carries them per polygon so callers working at other scales can
//!   adjust without touching call sites.

/// Minimum squared length of a vertex-triple cross product for it to define
/// the polygon normal.
pub(crate) const NORMAL_EPS: f64 = 1e-10;
/// Minimum doubled signed area of a candidate ear in the projected plane.
pub(crate) const EAR_EPS: f64 = 1e-10;

/// Triangulation configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriCfg {
    /// Squared-length threshold for a non-degenerate normal (also the area cutoff).
    pub eps_normal: f64,
    /// Convexity threshold of the ear test.
    pub eps_ear: f64,
}

impl Default for TriCfg {
    fn default() -> Self {
        Self {
            eps_normal: NORMAL_EPS,
            eps_ear: EAR_EPS,
        }
    }
}
