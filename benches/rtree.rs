use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use simple_features::{BulkItem, Envelope, RTree, XY};

fn random_boxes(n: usize, seed: u64) -> Vec<BulkItem> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|record| {
            let x: f64 = rng.gen_range(0.0..1000.0);
            let y: f64 = rng.gen_range(0.0..1000.0);
            let w: f64 = rng.gen_range(0.0..5.0);
            let h: f64 = rng.gen_range(0.0..5.0);
            BulkItem::new(
                Envelope::new(XY::new(x, y), XY::new(x + w, y + h)),
                record,
            )
        })
        .collect()
}

pub fn bulk_load_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_bulk_load");
    for n in [100usize, 1_000, 10_000] {
        let items = random_boxes(n, 42);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(RTree::bulk_load(items.clone())))
        });
    }
    group.finish();
}

pub fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_search");
    for n in [1_000usize, 10_000] {
        let tree = RTree::bulk_load(random_boxes(n, 42));
        let mut rng = SmallRng::seed_from_u64(1234);
        let queries: Vec<Envelope> = (0..1000)
            .map(|_| {
                let x: f64 = rng.gen_range(0.0..1000.0);
                let y: f64 = rng.gen_range(0.0..1000.0);
                Envelope::new(XY::new(x, y), XY::new(x + 10., y + 10.))
            })
            .collect();
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                for query in &queries {
                    black_box(tree.search_collect(*query));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bulk_load_benchmark, search_benchmark);

criterion_main!(benches);
