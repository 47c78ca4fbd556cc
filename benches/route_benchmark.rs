use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use nanorand::{Rng, WyRand};
use waypoint_pathfinding::prelude::*;

/// A square lattice of two way roads with slightly displaced Nodes, so that the Costs differ
fn lattice(size: usize, seed: u64) -> (RoadNetwork, Vec<Point>) {
    let mut rng = WyRand::new_seed(seed);
    let mut points = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            let jitter_x = rng.generate_range(0_u32..100) as f64 / 400.0;
            let jitter_y = rng.generate_range(0_u32..100) as f64 / 400.0;
            points.push(Point::new(x as f64 + jitter_x, y as f64 + jitter_y));
        }
    }

    let mut network = RoadNetwork::with_capacity(points.len());
    for y in 0..size {
        for x in 0..size {
            let here = points[y * size + x];
            if x + 1 < size {
                network.add_road(here, points[y * size + x + 1]);
            }
            if y + 1 < size {
                network.add_road(here, points[(y + 1) * size + x]);
            }
        }
    }
    (network, points)
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "debug") // Change this from debug to trace to enable more in-depth timings.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("Find Path");
    group.sample_size(20);

    init();

    for size in [32, 128] {
        let (network, points) = lattice(size, 4);
        let (start, goal) = (points[0], points[points.len() - 1]);

        let id = format!("Corner to corner, Lattice Size: ({}, {})", size, size);
        group.bench_function(&id, |b| b.iter(|| find_path(&network, start, goal)));

        let id = format!("Corner to corner, Haversine, Lattice Size: ({}, {})", size, size);
        group.bench_function(&id, |b| {
            b.iter(|| a_star_search(&network, start, goal, &Haversine, &SearchConfig::UNBOUNDED))
        });
    }
}

fn bench_build_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("Build Route");
    group.sample_size(10);

    init();

    let size = 64;
    let (network, points) = lattice(size, 9);
    let waypoints: Vec<Point> = [0, size - 1, size * size - 1, size * (size - 1), size * size / 2]
        .iter()
        .map(|&index| points[index])
        .collect();

    let id = format!("5 Waypoints, Lattice Size: ({}, {})", size, size);
    group.bench_function(&id, |b| b.iter(|| build_route(&network, &waypoints)));

    let requests: Vec<RouteRequest> = (0..8)
        .map(|seed| {
            let (network, points) = lattice(size, seed);
            RouteRequest::new(network, vec![points[0], points[points.len() - 1]])
        })
        .collect();
    let chainer = RouteChainer::default();

    #[cfg(feature = "parallel")]
    let id = format!("Batch of 8, Parallel, Lattice Size: ({}, {})", size, size);
    #[cfg(not(feature = "parallel"))]
    let id = format!("Batch of 8, Single Threaded, Lattice Size: ({}, {})", size, size);

    group.bench_function(&id, |b| b.iter(|| chainer.build_routes(&requests)));
}

fn bench_worker(c: &mut Criterion) {
    let mut group = c.benchmark_group("Route Worker");
    group.sample_size(10);

    init();

    let size = 64;
    let (network, points) = lattice(size, 2);
    let request = RouteRequest::new(network, vec![points[0], points[points.len() - 1]]);

    let worker = RouteWorker::spawn().unwrap();
    let id = format!("Round trip, Lattice Size: ({}, {})", size, size);
    group.bench_function(&id, |b| {
        b.iter(|| worker.route(request.clone()).unwrap());
    });
}

criterion_group!(benches, bench_find_path, bench_build_route, bench_worker);
criterion_main!(benches);
