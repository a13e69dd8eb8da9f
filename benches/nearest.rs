use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use median_kdtree::kdtree::{KdTree, KdTreeBuilder, KdTreeIndex, MedianStrategy};
use median_kdtree::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;

const NUM_POINTS: &[usize] = &[1_000, 10_000, 100_000];
const DIMENSIONS: &[usize] = &[2, 5, 10];

fn generate_points(n: usize, dimension: usize) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(12345);
    (0..n)
        .map(|_| {
            Point::try_new((0..dimension).map(|_| rng.gen_range(0.0..1000.0)))
                .expect("random coordinates are always finite")
        })
        .collect()
}

fn generate_target(dimension: usize) -> Point<f64> {
    let mut rng = StdRng::seed_from_u64(54321);
    Point::try_new((0..dimension).map(|_| rng.gen_range(0.0..1000.0))).unwrap()
}

fn build(points: Vec<Point<f64>>, dimension: usize, strategy: MedianStrategy) -> KdTree<f64> {
    let mut builder = KdTreeBuilder::with_capacity(dimension, points.len())
        .unwrap()
        .median_strategy(strategy);
    builder.extend(points).unwrap();
    builder.finish()
}

fn to_array<const D: usize>(point: &Point<f64>) -> [f64; D] {
    let mut out = [0.; D];
    out.copy_from_slice(point.coords());
    out
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.sample_size(10);

    for &dimension in DIMENSIONS {
        for &n in NUM_POINTS {
            let points = generate_points(n, dimension);
            for strategy in [MedianStrategy::Sort, MedianStrategy::Select] {
                let id = BenchmarkId::new(format!("{strategy:?}/{dimension}d"), n);
                group.bench_with_input(id, &points, |b, points| {
                    b.iter_batched(
                        || points.clone(),
                        |points| build(points, dimension, strategy),
                        BatchSize::LargeInput,
                    )
                });
            }
        }
    }

    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");

    for &dimension in DIMENSIONS {
        for &n in NUM_POINTS {
            let tree = KdTree::build(generate_points(n, dimension)).unwrap();
            let target = generate_target(dimension);
            let id = BenchmarkId::new(format!("kdtree/{dimension}d"), n);
            group.bench_with_input(id, &target, |b, target| {
                b.iter(|| tree.find_nearest(black_box(target)))
            });
        }
    }

    group.finish();
}

fn bench_rstar_baseline<const D: usize>(c: &mut Criterion)
where
    [f64; D]: rstar::Point<Scalar = f64>,
{
    let mut group = c.benchmark_group("nearest");

    for &n in NUM_POINTS {
        let points: Vec<[f64; D]> = generate_points(n, D).iter().map(to_array).collect();
        let tree = RTree::bulk_load(points);
        let target: [f64; D] = to_array(&generate_target(D));
        let id = BenchmarkId::new(format!("rstar/{D}d"), n);
        group.bench_with_input(id, &target, |b, target| {
            b.iter(|| tree.nearest_neighbor(black_box(target)))
        });
    }

    group.finish();
}

fn bench_rstar(c: &mut Criterion) {
    bench_rstar_baseline::<2>(c);
    bench_rstar_baseline::<5>(c);
    bench_rstar_baseline::<10>(c);
}

criterion_group!(benches, bench_construction, bench_nearest, bench_rstar);
criterion_main!(benches);
