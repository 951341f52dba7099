//! Triangulate a tilted, thin octagon and a few random star polygons.
//!
//! Usage:
//!   cargo run -p polygon3 --example tilted_polygon
//!
//! The octagon's vertices become collinear when projected onto the two largest
//! bounding-box axes; projecting onto its fitted plane keeps them apart.

use polygon3::prelude::*;

fn main() {
    let octagon: Polygon3 = [
        Vec3::new(-13.7199, 4.45725, -8.00059),
        Vec3::new(-0.115787, 12.3116, -4.96109),
        Vec3::new(0.88992, 12.8922, -3.80342),
        Vec3::new(-0.115787, 12.3116, -2.64576),
        Vec3::new(-13.7199, 4.45725, 0.393742),
        Vec3::new(-13.7199, 4.45725, -0.856258),
        Vec3::new(-12.5335, 5.14221, -3.80342),
        Vec3::new(-13.7199, 4.45725, -6.75059),
    ]
    .into_iter()
    .collect();
    report("octagon", &octagon);

    let cfg = StarCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 25 },
        ..StarCfg::default()
    };
    for index in 0..5 {
        let poly = draw_star_polygon(cfg, ReplayToken { seed: 1, index });
        report(&format!("star#{index}"), &poly);
    }
}

fn report(name: &str, poly: &Polygon3) {
    let tri = poly.triangulate();
    let n = poly.normal();
    println!(
        "{name}: V={} area={:.6} normal=({:.4}, {:.4}, {:.4}) triangles={} outcome={:?}",
        poly.num_vertices(),
        poly.area(),
        n.x,
        n.y,
        n.z,
        tri.num_triangles(),
        tri.outcome
    );
}
