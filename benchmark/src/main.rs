use rand::Rng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use waypoint_pathfinding::prelude::*;

const SIZE: usize = 256;
const ROUNDS: usize = 10;

/// A lattice where every road is missing with a chance of 1 in 8
fn random_network(rng: &mut impl Rng) -> (RoadNetwork, Vec<Point>) {
    let points: Vec<Point> = (0..SIZE * SIZE)
        .map(|i| {
            Point::new(
                (i % SIZE) as f64 + rng.gen_range(0.0..0.3),
                (i / SIZE) as f64 + rng.gen_range(0.0..0.3),
            )
        })
        .collect();

    let mut network = RoadNetwork::with_capacity(points.len());
    for (i, &here) in points.iter().enumerate() {
        if i % SIZE + 1 < SIZE && rng.gen_range(0..8) != 0 {
            network.add_road(here, points[i + 1]);
        }
        if i + SIZE < points.len() && rng.gen_range(0..8) != 0 {
            network.add_road(here, points[i + SIZE]);
        }
    }
    (network, points)
}

fn pick_waypoints(points: &[Point]) -> Vec<Point> {
    [0, SIZE - 1, SIZE * SIZE - 1, SIZE * (SIZE - 1), SIZE * SIZE / 2 + SIZE / 2]
        .iter()
        .map(|&i| points[i])
        .collect()
}

fn main() {
    let mut rng = rand::thread_rng();

    let mut results: HashMap<&str, Vec<(u128, Cost)>> = HashMap::new();

    let chainers: [(&str, RouteChainer); 2] = [
        ("default", RouteChainer::default()),
        ("strict", RouteChainer::with_config(RouteConfig::STRICT)),
    ];

    for _ in 0..ROUNDS {
        let (network, points) = random_network(&mut rng);
        let waypoints = pick_waypoints(&points);
        println!("finished Network gen");

        for (name, chainer) in &chainers {
            let start_time = Instant::now();
            let route = chainer.route(&network, &waypoints);
            let dt = duration_as_nanos(Instant::now() - start_time);
            let cost = route.map(|route| route.cost()).unwrap_or(Cost::NAN);
            results.entry(*name).or_default().push((dt, cost));
        }

        let worker = RouteWorker::spawn().expect("failed to spawn worker");
        let start_time = Instant::now();
        let reply = worker.route(RouteRequest::new(network.clone(), waypoints.clone()));
        let dt = duration_as_nanos(Instant::now() - start_time);
        let cost = reply.map(|reply| reply.cost).unwrap_or(Cost::NAN);
        results.entry("worker").or_default().push((dt, cost));

        let requests: Vec<RouteRequest> = (0..8)
            .map(|_| RouteRequest::new(network.clone(), waypoints.clone()))
            .collect();
        let start_time = Instant::now();
        let routes = RouteChainer::default().build_routes(&requests);
        let dt = duration_as_nanos(Instant::now() - start_time) / requests.len() as u128;
        let costs: Vec<Cost> = routes
            .par_iter()
            .map(|route| route.as_ref().map(|route| route.cost()).unwrap_or(Cost::NAN))
            .collect();
        results.entry("batch").or_default().push((dt, costs[0]));
    }

    let best = results["default"]
        .iter()
        .map(|(_, cost)| *cost)
        .collect::<Vec<_>>();

    for (name, results) in results {
        let times = results.iter().map(|r| r.0);
        let min_time = times.clone().min().unwrap_or(0) as f64 / 1_000_000.0;
        let max_time = times.clone().max().unwrap_or(0) as f64 / 1_000_000.0;
        let avg_time = times.sum::<u128>() as f64 / results.len() as f64 / 1_000_000.0;

        let same_cost = results
            .iter()
            .zip(best.iter())
            .filter(|(a, b)| (a.1 - **b).abs() < 1e-9)
            .count();

        println!(
            "{} | {:.3}ms - {:.3}ms; {:.3}ms | {}/{} costs equal to default",
            name,
            min_time,
            max_time,
            avg_time,
            same_cost,
            results.len()
        );
    }
}

fn duration_as_nanos(d: Duration) -> u128 {
    d.as_secs() as u128 * 1_000_000_000 + d.subsec_nanos() as u128
}
