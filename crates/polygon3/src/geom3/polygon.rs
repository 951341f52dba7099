//! Planar polygon boundary in R^3 with plane fitting, area and triangulation.

use nalgebra::Vector3;

use super::basis::{orthonormal_basis, Projection};
use super::cfg::TriCfg;
use super::earclip::{clip_ears, EarClipOutcome, Triangulation};
use super::types::{Aabb3, IndexedVertex};

/// Running-maximum value before any non-negative index was inserted.
const NO_INDEX: i64 = -1;

/// Ordered polygon boundary with external vertex indices.
///
/// Invariants:
/// - Insertion order is traversal order; vertices are only appended or cleared.
/// - `bounds` contains every stored position.
/// - `max_index` never decreases between clears; auto-assigned indices are
///   `max_index + 1` (saturating), so the first one is `0`.
#[derive(Clone, Debug)]
pub struct Polygon3 {
    vertices: Vec<IndexedVertex>,
    max_index: i64,
    bounds: Aabb3,
    cfg: TriCfg,
}

impl Default for Polygon3 {
    fn default() -> Self {
        Self::with_cfg(TriCfg::default())
    }
}

impl Polygon3 {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty boundary using custom tolerances for `normal`, `area` and `triangulate`.
    pub fn with_cfg(cfg: TriCfg) -> Self {
        Self {
            vertices: Vec::new(),
            max_index: NO_INDEX,
            bounds: Aabb3::empty(),
            cfg,
        }
    }

    /// Build from `(position, index)` pairs in traversal order.
    pub fn from_indexed<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (Vector3<f64>, i64)>,
    {
        let mut poly = Self::new();
        for (p, index) in items {
            poly.add_vertex_with_index(p, index);
        }
        poly
    }

    #[inline]
    pub fn cfg(&self) -> &TriCfg {
        &self.cfg
    }

    /// Append `p` with the next auto-assigned index; returns that index.
    pub fn add_vertex(&mut self, p: Vector3<f64>) -> i64 {
        let index = self.next_index();
        self.add_vertex_with_index(p, index);
        index
    }

    /// Append `p` with a caller-supplied index (no uniqueness check).
    pub fn add_vertex_with_index(&mut self, p: Vector3<f64>, index: i64) {
        self.bounds.merge(p);
        self.vertices.push(IndexedVertex::new(p, index));
        if index > self.max_index {
            self.max_index = index;
        }
        debug_assert!(self.bounds.contains(p) || p.iter().any(|c| c.is_nan()));
    }

    /// Remove all vertices and reset the index counter and bounds.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.max_index = NO_INDEX;
        self.bounds = Aabb3::empty();
    }

    /// Index the next `add_vertex` will assign.
    ///
    /// Saturates at `i64::MAX`: once that index is present, further
    /// auto-indexed vertices repeat it.
    #[inline]
    pub fn next_index(&self) -> i64 {
        self.max_index.saturating_add(1)
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex at boundary position `i`, or `None` when out of range.
    #[inline]
    pub fn vertex(&self, i: usize) -> Option<&IndexedVertex> {
        self.vertices.get(i)
    }

    #[inline]
    pub fn vertices(&self) -> &[IndexedVertex] {
        &self.vertices
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, IndexedVertex> {
        self.vertices.iter()
    }

    #[inline]
    pub fn bounds(&self) -> &Aabb3 {
        &self.bounds
    }

    /// Same vertices and indices in reverse traversal order.
    pub fn reversed(&self) -> Self {
        let mut out = Self::with_cfg(self.cfg);
        for v in self.vertices.iter().rev() {
            out.add_vertex_with_index(v.position, v.index);
        }
        out
    }

    /// Unit normal from the first non-degenerate cyclic vertex triple.
    ///
    /// For `(v[i], v[i+1], v[i+2])` the candidate is
    /// `(v[i+2] - v[i+1]) × (v[i] - v[i+1])`; it is accepted once its squared
    /// length reaches `eps_normal`. Returns the zero vector for fewer than 3
    /// vertices or when every triple is collinear/coincident.
    pub fn normal(&self) -> Vector3<f64> {
        self.normal_eps(self.cfg.eps_normal)
    }

    fn normal_eps(&self, eps_normal: f64) -> Vector3<f64> {
        let n = self.vertices.len();
        if n < 3 {
            return Vector3::zeros();
        }
        for i in 0..n {
            let p0 = self.vertices[i].position;
            let p1 = self.vertices[(i + 1) % n].position;
            let p2 = self.vertices[(i + 2) % n].position;
            let normal = (p2 - p1).cross(&(p0 - p1));
            if normal.norm_squared() >= eps_normal {
                return normal.normalize();
            }
        }
        tracing::debug!(vertices = n, "no non-degenerate vertex triple; zero normal");
        Vector3::zeros()
    }

    /// Unsigned area of the boundary.
    ///
    /// Triangles use the direct cross product. Larger polygons sum
    /// `normal · (prev × cur)` over all edges, which needs no explicit
    /// projection; a degenerate normal gives `0`.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        match n {
            0..=2 => 0.0,
            3 => {
                let [a, b, c] = [0, 1, 2].map(|k| self.vertices[k].position);
                0.5 * (c - b).cross(&(a - b)).norm()
            }
            _ => {
                let normal = self.normal();
                if normal.norm_squared() < self.cfg.eps_normal {
                    return 0.0;
                }
                let mut a = 0.0;
                let mut prev = self.vertices[n - 1].position;
                for v in &self.vertices {
                    a += prev.cross(&v.position).dot(&normal);
                    prev = v.position;
                }
                (0.5 * a).abs()
            }
        }
    }

    /// Projection onto the fitted plane, or `None` when the normal is degenerate.
    pub fn project(&self) -> Option<Projection> {
        let normal = self.normal();
        if normal.norm_squared() < self.cfg.eps_normal {
            return None;
        }
        Some(self.project_onto(&normal))
    }

    /// Projection onto the plane with the given normal, through vertex 0.
    ///
    /// A zero normal yields all-zero 2D points.
    pub fn project_onto(&self, normal: &Vector3<f64>) -> Projection {
        let (axis0, axis1) =
            orthonormal_basis(normal).unwrap_or_else(|| (Vector3::zeros(), Vector3::zeros()));
        Projection::new(&self.vertices, axis0, axis1)
    }

    /// Triangulate with the polygon's own tolerances.
    ///
    /// - `< 3` vertices: no triangles, `TooFewVertices`.
    /// - exactly 3: one triangle with the indices in input order. This path
    ///   skips winding normalization, unlike the general path.
    /// - otherwise: ear clipping in the fitted plane; output triangles wind like
    ///   the input boundary. A degenerate normal gives `Degenerate`, an
    ///   exhausted iteration budget gives `Partial`.
    pub fn triangulate(&self) -> Triangulation {
        self.triangulate_with(&self.cfg)
    }

    /// Like [`Polygon3::triangulate`] with explicit tolerances.
    pub fn triangulate_with(&self, cfg: &TriCfg) -> Triangulation {
        let mut indices = Vec::new();
        let outcome = self.triangulate_inner(cfg, &mut indices);
        Triangulation { indices, outcome }
    }

    /// Write triangle indices into `tri_indices` (cleared first) and return
    /// the number of triangles.
    pub fn triangulate_into(&self, tri_indices: &mut Vec<i64>) -> usize {
        self.triangulate_inner(&self.cfg, tri_indices);
        tri_indices.len() / 3
    }

    fn triangulate_inner(&self, cfg: &TriCfg, out: &mut Vec<i64>) -> EarClipOutcome {
        out.clear();
        let outcome = match self.vertices.len() {
            0..=2 => EarClipOutcome::TooFewVertices,
            3 => {
                out.extend(self.vertices.iter().map(|v| v.index));
                EarClipOutcome::Complete
            }
            n => {
                let normal = self.normal_eps(cfg.eps_normal);
                if normal.norm_squared() < cfg.eps_normal {
                    tracing::debug!(vertices = n, "degenerate polygon; nothing to triangulate");
                    EarClipOutcome::Degenerate
                } else {
                    let proj = self.project_onto(&normal);
                    clip_ears(&self.vertices, &proj, cfg.eps_ear, out)
                }
            }
        };
        debug_assert_eq!(out.len() % 3, 0);
        outcome
    }
}

impl std::ops::Index<usize> for Polygon3 {
    type Output = IndexedVertex;

    fn index(&self, i: usize) -> &IndexedVertex {
        match self.vertices.get(i) {
            Some(v) => v,
            None => panic!(
                "Polygon3: vertex index {i} out of bounds (num_vertices = {})",
                self.vertices.len()
            ),
        }
    }
}

impl FromIterator<Vector3<f64>> for Polygon3 {
    fn from_iter<I: IntoIterator<Item = Vector3<f64>>>(iter: I) -> Self {
        let mut poly = Self::new();
        poly.extend(iter);
        poly
    }
}

impl Extend<Vector3<f64>> for Polygon3 {
    fn extend<I: IntoIterator<Item = Vector3<f64>>>(&mut self, iter: I) {
        for p in iter {
            self.add_vertex(p);
        }
    }
}

impl<'a> IntoIterator for &'a Polygon3 {
    type Item = &'a IndexedVertex;
    type IntoIter = std::slice::Iter<'a, IndexedVertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
