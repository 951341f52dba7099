//! Ear clipping over a projected boundary.
//!
//! Algorithm
//! - Work on a list of projection indices ordered counterclockwise (reversed
//!   and flagged when the projected area is non-positive).
//! - Scan consecutive working triples `(u, v, w)`; clip `v` when the triangle is
//!   convex by at least `eps_ear` and no other working vertex lies inside or on
//!   its boundary.
//! - Each attempt spends one unit of a budget of `2·nv`; a clip resets it. An
//!   exhausted budget ends the loop with a partial result.
//!
//! Output triples carry the caller's external indices and are reversed back
//! when the working order was flipped, so every triangle winds like the input.

use nalgebra::Vector2;

use super::basis::Projection;
use super::types::IndexedVertex;

/// How a triangulation call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EarClipOutcome {
    /// Every vertex was consumed (`n - 2` triangles, or the 3-vertex fast path).
    Complete,
    /// Fewer than 3 vertices; no triangles.
    TooFewVertices,
    /// No plane could be fitted (all vertex triples collinear); no triangles.
    Degenerate,
    /// Iteration budget ran out with `remaining` working vertices left.
    Partial { remaining: usize },
}

/// Flat triangle list in external indices plus the outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangulation {
    pub indices: Vec<i64>,
    pub outcome: EarClipOutcome,
}

impl Triangulation {
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.outcome == EarClipOutcome::Complete
    }

    /// Triangles as index triples, in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [i64; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

#[inline]
fn cross2(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Closed point-in-triangle test for a counterclockwise `(a, b, c)`.
///
/// Points on an edge or corner count as inside.
#[inline]
fn inside_triangle(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, p: Vector2<f64>) -> bool {
    cross2(b, c, p) >= 0.0 && cross2(c, a, p) >= 0.0 && cross2(a, b, p) >= 0.0
}

/// Ear test for working positions `(u, v, w)` among the first `nv` entries.
fn is_ear(
    points: &[Vector2<f64>],
    working: &[usize],
    (u, v, w): (usize, usize, usize),
    eps_ear: f64,
) -> bool {
    let a = points[working[u]];
    let b = points[working[v]];
    let c = points[working[w]];

    if cross2(a, b, c) < eps_ear {
        tracing::trace!(u, v, w, "ear rejected: reflex or too thin");
        return false;
    }

    for (p, &k) in working.iter().enumerate() {
        if p == u || p == v || p == w {
            continue;
        }
        if inside_triangle(a, b, c, points[k]) {
            tracing::trace!(u, v, w, p, "ear rejected: contains vertex");
            return false;
        }
    }
    true
}

/// Clip ears of `proj` (projection of `vertices`), appending external indices
/// to `out`.
///
/// Pre: `vertices.len() == proj.len() >= 3`.
pub(crate) fn clip_ears(
    vertices: &[IndexedVertex],
    proj: &Projection,
    eps_ear: f64,
    out: &mut Vec<i64>,
) -> EarClipOutcome {
    let n = vertices.len();
    debug_assert_eq!(n, proj.len());
    debug_assert!(n >= 3);

    let flipped = proj.signed_area() <= 0.0;
    let mut working: Vec<usize> = if flipped {
        (0..n).rev().collect()
    } else {
        (0..n).collect()
    };

    out.reserve(3 * (n - 2));
    let mut nv = n;
    let mut count = 2 * nv;
    let mut v = nv - 1;
    while nv > 2 {
        if count == 0 {
            tracing::debug!(
                vertices = n,
                remaining = nv,
                triangles = out.len() / 3,
                "ear clipping budget exhausted"
            );
            return EarClipOutcome::Partial { remaining: nv };
        }
        count -= 1;

        let u = if v >= nv { 0 } else { v };
        v = if u + 1 >= nv { 0 } else { u + 1 };
        let w = if v + 1 >= nv { 0 } else { v + 1 };

        if is_ear(&proj.points, &working, (u, v, w), eps_ear) {
            let (a, b, c) = (working[u], working[v], working[w]);
            let tri = if flipped { [c, b, a] } else { [a, b, c] };
            out.extend(tri.iter().map(|&k| vertices[k].index));

            working.remove(v);
            nv -= 1;
            count = 2 * nv;
        }
    }
    EarClipOutcome::Complete
}
