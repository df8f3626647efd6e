use criterion::{criterion_group, criterion_main, Criterion};
use env_logger::Env;

use bitgrid_pathfinding::{prelude::*, Point};
use log::info;
use nanorand::{Rng, WyRand};

/// A Grid where roughly `percent_blocked` percent of the cells are walls
fn random_grid(width: usize, height: usize, percent_blocked: u8, seed: u64) -> Grid {
    let mut rng = WyRand::new_seed(seed);
    let matrix: Vec<Vec<u8>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| (rng.generate_range(0..100u8) < percent_blocked) as u8)
                .collect()
        })
        .collect();
    Grid::from_matrix(width, height, &matrix).unwrap()
}

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug to log every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_single_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Path");
    init();

    for size in [128, 1024] {
        let grid = Grid::open(size, size).unwrap();
        let (start, goal) = (Point::new(0, 0), Point::new(size as u16 - 1, size as u16 / 2));

        for (name, config) in [
            ("Four Way", SearchConfig::FOUR_WAY),
            ("Eight Way", SearchConfig::EIGHT_WAY),
            ("Eight Way Smooth", SearchConfig::EIGHT_WAY_SMOOTH),
        ] {
            let id = format!("{}, Open Grid, Size: ({}, {})", name, size, size);
            let mut finder = PathFinder::with_capacity(config, size * 4);
            group.bench_function(&id, |b| b.iter(|| finder.find_path(&grid, start, goal)));
        }
    }

    let (width, height) = (512, 512);
    let grid = random_grid(width, height, 25, 4);
    let mut rng = WyRand::new_seed(8);
    let start = grid.random_walkable_cell(&mut rng).unwrap();
    let goal = grid.random_walkable_cell(&mut rng).unwrap();
    info!(
        "Random Grid: {} of {} cells walkable, searching {} -> {}",
        grid.walkable_count(),
        width * height,
        start,
        goal
    );

    let id = format!("Eight Way, Random Grid, Size: ({}, {})", width, height);
    let mut finder = PathFinder::new(SearchConfig::EIGHT_WAY);
    group.bench_function(&id, |b| b.iter(|| finder.find_path(&grid, start, goal)));
}

#[cfg(feature = "parallel")]
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch");
    group.sample_size(10);

    let (width, height) = (512, 512);
    let grid = random_grid(width, height, 25, 15);
    let mut rng = WyRand::new_seed(16);
    let queries: Vec<(Point, Point)> = (0..64)
        .map(|_| {
            (
                grid.random_walkable_cell(&mut rng).unwrap(),
                grid.random_walkable_cell(&mut rng).unwrap(),
            )
        })
        .collect();

    let id = format!(
        "{} Queries, Parallel, Size: ({}, {})",
        queries.len(),
        width,
        height
    );
    group.bench_function(&id, |b| {
        b.iter(|| find_paths_parallel(&grid, &queries, &SearchConfig::EIGHT_WAY))
    });

    let id = format!(
        "{} Queries, Single Threaded, Size: ({}, {})",
        queries.len(),
        width,
        height
    );
    let mut finder = PathFinder::new(SearchConfig::EIGHT_WAY);
    group.bench_function(&id, |b| {
        b.iter(|| {
            queries
                .iter()
                .map(|&(start, goal)| finder.find_path(&grid, start, goal))
                .collect::<Vec<_>>()
        })
    });
}

#[cfg(feature = "parallel")]
criterion_group!(benches, bench_single_path, bench_batch);
#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_single_path);
criterion_main!(benches);
