//! In-plane bases and 2D projections of a 3D boundary.
//!
//! Conventions
//! - `orthonormal_basis(n)` returns `(axis0, axis1)` with `(axis0, axis1, n̂)`
//!   right-handed, so a boundary that winds counterclockwise around `n` has a
//!   positive signed projected area.
//! - The projection origin is the first boundary vertex. Projecting onto the
//!   fitted plane (rather than dropping the smallest bounding-box axis) keeps
//!   tilted polygons from collapsing into collinear 2D points.

use nalgebra::{Vector2, Vector3};

use super::types::IndexedVertex;

/// Orthonormal in-plane axes for the plane with normal `normal`.
///
/// The reference axis is the coordinate axis least aligned with `normal`.
/// Returns `None` for a zero or non-finite normal.
pub fn orthonormal_basis(normal: &Vector3<f64>) -> Option<(Vector3<f64>, Vector3<f64>)> {
    let len = normal.norm();
    if !len.is_finite() || len <= 0.0 {
        return None;
    }
    let n = normal / len;
    let (ax, ay, az) = (n.x.abs(), n.y.abs(), n.z.abs());
    let reference = if ax <= ay && ax <= az {
        Vector3::x()
    } else if ay <= az {
        Vector3::y()
    } else {
        Vector3::z()
    };
    let axis0 = n.cross(&reference).normalize();
    let axis1 = n.cross(&axis0);
    Some((axis0, axis1))
}

/// Boundary projected into a plane, one 2D point per vertex (same order).
#[derive(Clone, Debug)]
pub struct Projection {
    pub origin: Vector3<f64>,
    pub axis0: Vector3<f64>,
    pub axis1: Vector3<f64>,
    pub points: Vec<Vector2<f64>>,
}

impl Projection {
    /// Project `vertices` onto the plane spanned by `(axis0, axis1)` through
    /// the first vertex. Empty input yields an empty projection at the origin.
    pub fn new(vertices: &[IndexedVertex], axis0: Vector3<f64>, axis1: Vector3<f64>) -> Self {
        let origin = vertices
            .first()
            .map(|v| v.position)
            .unwrap_or_else(Vector3::zeros);
        let points = vertices
            .iter()
            .map(|v| {
                let d = v.position - origin;
                Vector2::new(d.dot(&axis0), d.dot(&axis1))
            })
            .collect();
        Self {
            origin,
            axis0,
            axis1,
            points,
        }
    }

    /// Shoelace signed area; positive for counterclockwise order in `(axis0, axis1)`.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Shoelace signed area of a closed 2D loop.
pub fn signed_area(points: &[Vector2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    let mut p = points[n - 1];
    for &q in points {
        a += p.x * q.y - q.x * p.y;
        p = q;
    }
    0.5 * a
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn assert_basis(n: Vector3<f64>) {
        let (a0, a1) = orthonormal_basis(&n).expect("basis");
        let nn = n.normalize();
        assert!((a0.norm() - 1.0).abs() < 1e-12);
        assert!((a1.norm() - 1.0).abs() < 1e-12);
        assert!(a0.dot(&a1).abs() < 1e-12);
        assert!(a0.dot(&nn).abs() < 1e-12);
        assert!(a1.dot(&nn).abs() < 1e-12);
        // right-handed: a0 × a1 = n̂
        assert!((a0.cross(&a1) - nn).norm() < 1e-12);
    }

    #[test]
    fn basis_orthonormal_and_right_handed() {
        assert_basis(vector![0.0, 0.0, 1.0]);
        assert_basis(vector![0.0, 0.0, -1.0]);
        assert_basis(vector![1.0, 0.0, 0.0]);
        assert_basis(vector![0.0, -3.0, 0.0]);
        assert_basis(vector![1.0, 1.0, 1.0]);
        assert_basis(vector![0.5, -0.866, 1e-5]);
    }

    #[test]
    fn basis_rejects_zero_normal() {
        assert!(orthonormal_basis(&Vector3::zeros()).is_none());
        assert!(orthonormal_basis(&vector![f64::NAN, 0.0, 1.0]).is_none());
    }

    #[test]
    fn unit_square_projects_with_positive_area() {
        let verts: Vec<IndexedVertex> = [
            vector![0.0, 0.0, 2.0],
            vector![1.0, 0.0, 2.0],
            vector![1.0, 1.0, 2.0],
            vector![0.0, 1.0, 2.0],
        ]
        .iter()
        .enumerate()
        .map(|(i, &p)| IndexedVertex::new(p, i as i64))
        .collect();
        let (a0, a1) = orthonormal_basis(&Vector3::z()).unwrap();
        let proj = Projection::new(&verts, a0, a1);
        assert_eq!(proj.len(), 4);
        assert_eq!(proj.points[0], Vector2::zeros());
        assert!((proj.signed_area() - 1.0).abs() < 1e-12);
        // Edge lengths survive the projection.
        for k in 0..4 {
            let d = proj.points[(k + 1) % 4] - proj.points[k];
            assert!((d.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn signed_area_short_loops_are_zero() {
        assert_eq!(signed_area(&[]), 0.0);
        assert_eq!(signed_area(&[vector![1.0, 2.0], vector![3.0, 4.0]]), 0.0);
    }
}
