//! Build a k-d tree over uniformly random points and time a nearest-neighbor lookup.
//!
//! ```sh
//! RUST_LOG=debug cargo run --release --example random_points -- 1000000 5
//! ```

use std::time::Instant;

use median_kdtree::kdtree::{KdTree, KdTreeIndex};
use median_kdtree::Point;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_NUM_POINTS: usize = 1_000_000;
const DEFAULT_DIMENSION: usize = 5;

fn generate_random_points(
    rng: &mut impl Rng,
    n: usize,
    dimension: usize,
) -> median_kdtree::Result<Vec<Point<f64>>> {
    (0..n)
        .map(|_| Point::try_new((0..dimension).map(|_| rng.gen_range(0.0..1000.0))))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("random_points=info".parse()?))
        .init();

    let mut args = std::env::args().skip(1);
    let num_points = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_NUM_POINTS,
    };
    let dimension = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_DIMENSION,
    };

    let mut rng = rand::thread_rng();
    let points = generate_random_points(&mut rng, num_points, dimension)?;

    let start = Instant::now();
    let tree = KdTree::build(points)?;
    info!(num_points, dimension, elapsed = ?start.elapsed(), "built k-d tree");

    let target = generate_random_points(&mut rng, 1, dimension)?.remove(0);

    let start = Instant::now();
    let nearest = tree.nearest(&target)?;
    let elapsed = start.elapsed();

    info!(%target, "target point");
    match nearest {
        Some(nearest) => info!(
            nearest = %nearest.point,
            index = nearest.index,
            distance = nearest.distance(),
            ?elapsed,
            "nearest neighbor"
        ),
        None => info!("tree is empty"),
    }

    Ok(())
}
