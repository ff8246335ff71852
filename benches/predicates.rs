use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use simple_features::algorithms::point_ring_side;
use simple_features::{ConstructorOptions, Geometry, LineString, Sequence, XY};

// A jagged closed ring approximating a circle, with per-vertex noise so the
// segment envelopes do not degenerate.
fn noisy_ring(n: usize, seed: u64) -> Vec<XY> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut coords: Vec<XY> = (0..n)
        .map(|i| {
            let angle = (i as f64) / (n as f64) * std::f64::consts::TAU;
            let radius = 100. + rng.gen_range(-5.0..5.0);
            XY::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    coords.push(coords[0]);
    coords
}

fn random_points(n: usize, extent: f64, seed: u64) -> Vec<XY> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            XY::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            )
        })
        .collect()
}

pub fn point_in_ring_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_in_ring");
    for n in [100usize, 1_000, 10_000] {
        let ring = Sequence::from_xys(noisy_ring(n, 7));
        let queries = random_points(1000, 120., 342);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                for &point in &queries {
                    black_box(point_ring_side(point, &ring));
                }
            })
        });
    }
    group.finish();
}

pub fn is_simple_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_string_is_simple");
    for n in [100usize, 1_000, 10_000] {
        let ls = LineString::from_xys(noisy_ring(n, 7), ConstructorOptions::default()).unwrap();
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(ls.is_simple()))
        });
    }
    group.finish();
}

pub fn intersects_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersects_line_line");
    for n in [100usize, 1_000] {
        let a: Geometry = LineString::from_xys(noisy_ring(n, 7), ConstructorOptions::default())
            .unwrap()
            .into();
        // Same shape nudged outward so the two rings never touch.
        let b_geom: Geometry = LineString::from_xys(
            noisy_ring(n, 8).into_iter().map(|p| p * 1.2),
            ConstructorOptions::default(),
        )
        .unwrap()
        .into();
        group.bench_function(BenchmarkId::from_parameter(n), |bench| {
            bench.iter(|| black_box(a.intersects(&b_geom)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    point_in_ring_benchmark,
    is_simple_benchmark,
    intersects_benchmark
);

criterion_main!(benches);
