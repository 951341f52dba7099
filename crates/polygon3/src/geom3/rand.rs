//! Random simple polygons in R^3 (radial jitter + random planes + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for property tests, benches and the CLI. Draws are
//!   reproducible from `(seed, index)`.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular jitter
//!   and sort, then give each angle a jittered radius. The loop is star-shaped
//!   around the plane origin, hence simple, and non-convex once radii vary.
//! - Embed the 2D loop in a plane with a uniformly random unit normal and a
//!   random offset (or in `z = 0` when `random_plane` is off).

use nalgebra::{Vector2, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::basis::orthonormal_basis;
use super::polygon::Polygon3;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`,
    /// `u ∈ [-radial_jitter, radial_jitter]`. Zero gives a convex polygon.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub random_phase: bool,
    /// Embed in a random plane (else `z = 0`, counterclockwise seen from +z).
    pub random_plane: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
            random_plane: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple polygon; vertex indices are `0..n` in traversal order.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Polygon3 {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pts: Vec<Vector2<f64>> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();

    let (axis0, axis1, offset) = if cfg.random_plane {
        let normal = random_unit(&mut rng);
        let (a0, a1) = orthonormal_basis(&normal).unwrap_or((Vector3::x(), Vector3::y()));
        let offset = Vector3::from_fn(|_, _| rng.gen_range(-5.0..5.0) * r0);
        (a0, a1, offset)
    } else {
        (Vector3::x(), Vector3::y(), Vector3::zeros())
    };
    pts.iter()
        .map(|p| offset + axis0 * p.x + axis1 * p.y)
        .collect()
}

/// Draw a random convex polygon with `n` vertices in a random plane.
pub fn draw_convex_polygon(n: usize, tok: ReplayToken) -> Polygon3 {
    draw_star_polygon(
        StarCfg {
            vertex_count: VertexCount::Fixed(n),
            radial_jitter: 0.0,
            ..StarCfg::default()
        },
        tok,
    )
}

/// Uniform direction on the sphere by rejection from the unit cube.
fn random_unit<R: Rng>(rng: &mut R) -> Vector3<f64> {
    loop {
        let v: Vector3<f64> = Vector3::from_fn(|_, _| rng.gen_range(-1.0..1.0));
        let n2 = v.norm_squared();
        if n2 > 1e-6 && n2 <= 1.0 {
            return v / n2.sqrt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 20 },
            ..StarCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_star_polygon(cfg, tok);
        let p2 = draw_star_polygon(cfg, tok);
        assert_eq!(p1.num_vertices(), p2.num_vertices());
        for (a, b) in p1.iter().zip(p2.iter()) {
            assert_eq!(a, b);
        }
        let p3 = draw_star_polygon(cfg, ReplayToken { seed: 42, index: 8 });
        assert!(p1
            .iter()
            .zip(p3.iter())
            .any(|(a, b)| (a.position - b.position).norm() > 1e-9));
    }

    #[test]
    fn draws_are_planar_and_indexed() {
        for index in 0..20 {
            let p = draw_star_polygon(StarCfg::default(), ReplayToken { seed: 3, index });
            assert_eq!(p.num_vertices(), 12);
            let n = p.normal();
            assert!((n.norm() - 1.0).abs() < 1e-9);
            let v0 = p[0].position;
            for (k, v) in p.iter().enumerate() {
                assert_eq!(v.index, k as i64);
                assert!((v.position - v0).dot(&n).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn flat_draw_is_counterclockwise_in_xy() {
        let cfg = StarCfg {
            random_plane: false,
            ..StarCfg::default()
        };
        let p = draw_star_polygon(cfg, ReplayToken { seed: 9, index: 0 });
        assert!(p.iter().all(|v| v.position.z == 0.0));
        let proj = p.project_onto(&Vector3::z());
        assert!(proj.signed_area() > 0.0);
    }

    #[test]
    fn convex_draw_has_no_reflex_vertex() {
        let p = draw_convex_polygon(9, ReplayToken { seed: 5, index: 1 });
        let n = p.normal();
        let k = p.num_vertices();
        let mut signs = Vec::with_capacity(k);
        for i in 0..k {
            let a = p[i].position;
            let b = p[(i + 1) % k].position;
            let c = p[(i + 2) % k].position;
            signs.push((b - a).cross(&(c - b)).dot(&n));
        }
        assert!(signs.iter().all(|&s| s > 0.0) || signs.iter().all(|&s| s < 0.0));
    }
}
