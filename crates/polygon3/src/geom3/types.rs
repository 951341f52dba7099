//! Core 3D types: indexed boundary vertices and an axis-aligned bounding box.

use nalgebra::Vector3;

/// Boundary vertex: a position paired with the caller's external index.
///
/// Invariants:
/// - Immutable once stored; the index is opaque to this crate (may be negative,
///   uniqueness is not checked).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedVertex {
    pub position: Vector3<f64>,
    pub index: i64,
}

impl IndexedVertex {
    #[inline]
    pub fn new(position: Vector3<f64>, index: i64) -> Self {
        Self { position, index }
    }
}

/// Axis-aligned box in R^3, grown by merging points.
///
/// Invariants:
/// - Empty iff `min > max` on any axis; `empty()` uses `+inf`/`-inf` so the
///   first merge collapses it onto that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Default for Aabb3 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb3 {
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Vector3::repeat(f64::INFINITY),
            max: Vector3::repeat(f64::NEG_INFINITY),
        }
    }

    #[inline]
    pub fn from_point(p: Vector3<f64>) -> Self {
        Self { min: p, max: p }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow to include `p`.
    #[inline]
    pub fn merge(&mut self, p: Vector3<f64>) {
        self.min = self.min.inf(&p);
        self.max = self.max.sup(&p);
    }

    /// Closed containment test; always false for an empty box.
    #[inline]
    pub fn contains(&self, p: Vector3<f64>) -> bool {
        self.min.x <= p.x
            && p.x <= self.max.x
            && self.min.y <= p.y
            && p.y <= self.max.y
            && self.min.z <= p.z
            && p.z <= self.max.z
    }

    /// Side lengths; zero for an empty box.
    #[inline]
    pub fn extent(&self) -> Vector3<f64> {
        if self.is_empty() {
            Vector3::zeros()
        } else {
            self.max - self.min
        }
    }

    #[inline]
    pub fn center(&self) -> Option<Vector3<f64>> {
        if self.is_empty() {
            None
        } else {
            Some((self.min + self.max) * 0.5)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn empty_box_merges_to_point() {
        let mut b = Aabb3::empty();
        assert!(b.is_empty());
        assert!(!b.contains(Vector3::zeros()));
        assert_eq!(b.extent(), Vector3::zeros());
        assert!(b.center().is_none());

        let p = vector![1.0, -2.0, 3.0];
        b.merge(p);
        assert!(!b.is_empty());
        assert_eq!(b, Aabb3::from_point(p));
        assert!(b.contains(p));
    }

    #[test]
    fn merge_grows_per_axis() {
        let mut b = Aabb3::from_point(vector![0.0, 0.0, 0.0]);
        b.merge(vector![2.0, -1.0, 0.5]);
        b.merge(vector![-1.0, 3.0, 0.25]);
        assert_eq!(b.min, vector![-1.0, -1.0, 0.0]);
        assert_eq!(b.max, vector![2.0, 3.0, 0.5]);
        assert_eq!(b.extent(), vector![3.0, 4.0, 0.5]);
        assert_eq!(b.center(), Some(vector![0.5, 1.0, 0.25]));
        assert!(!b.contains(vector![0.0, 0.0, 1.0]));
    }
}
