//! Criterion benchmarks for plane fitting and ear clipping.
//! Focus sizes: n in {4, 16, 64, 256}.
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polygon3::api::{draw_convex_polygon, draw_star_polygon, PolygonReplay, StarCfg, VertexCount};

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon3");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("triangulate_convex", n), &n, |b, &n| {
            b.iter_batched(
                || draw_convex_polygon(n, PolygonReplay { seed: 43, index: n as u64 }),
                |poly| {
                    let _tri = poly.triangulate();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("triangulate_star", n), &n, |b, &n| {
            let cfg = StarCfg {
                vertex_count: VertexCount::Fixed(n),
                ..StarCfg::default()
            };
            b.iter_batched(
                || draw_star_polygon(cfg, PolygonReplay { seed: 44, index: n as u64 }),
                |poly| {
                    let _tri = poly.triangulate();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("area", n), &n, |b, &n| {
            let cfg = StarCfg {
                vertex_count: VertexCount::Fixed(n),
                ..StarCfg::default()
            };
            let poly = draw_star_polygon(cfg, PolygonReplay { seed: 45, index: 0 });
            b.iter(|| poly.area())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_triangulate);
criterion_main!(benches);
