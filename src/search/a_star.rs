use super::node_list::NodeList;
use super::{HeuristicElement, SearchConfig};
use crate::metric::{Euclidean, Metric};
use crate::{network::RoadNetwork, Path, Point, SearchError};

use std::collections::BinaryHeap;
use std::time::Instant;

/// Searches the shortest Path from `start` to `goal` with the [`Euclidean`] Metric and no limits.
///
/// Returns `None` if `goal` cannot be reached from `start`. A `start` that is not part of
/// the Network has no neighbors, so only `start == goal` can succeed from there.
///
/// ## Examples
/// ```
/// # use waypoint_pathfinding::{network::RoadNetwork, search::find_path, Point};
/// let network: RoadNetwork =
///     serde_json::from_str(r#"{ "0,0": [[0, 1]], "0,1": [[0, 2]] }"#).unwrap();
///
/// let path = find_path(&network, Point::new(0.0, 0.0), Point::new(0.0, 2.0)).unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.cost(), 2.0);
///
/// assert!(find_path(&network, Point::new(0.0, 2.0), Point::new(0.0, 0.0)).is_none());
/// ```
pub fn find_path(network: &RoadNetwork, start: Point, goal: Point) -> Option<Path<Point>> {
    match a_star_search(network, start, goal, &Euclidean, &SearchConfig::UNBOUNDED) {
        Ok(path) => path,
        // an unbounded search never gives up
        Err(_) => None,
    }
}

/// Searches the shortest Path from `start` to `goal` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// `metric` prices every Edge and estimates the remaining Cost to `goal`.
///
/// The open set is expanded lowest estimated total Cost first. When several Nodes share the
/// lowest estimate, the one that was discovered first is expanded, so that the same input
/// always yields the same Path. An expanded Node is never expanded again.
///
/// ## Returns
/// - `Ok(Some(path))`: the first Node in the Path is always `start` and the last is `goal`.
///   If `start == goal` the Path is just `[start]` with Cost 0.
/// - `Ok(None)`: `goal` cannot be reached. This is an expected outcome, not an error.
/// - `Err(_)`: the search exceeded a limit of `config` before reaching a conclusion.
pub fn a_star_search<M: Metric + ?Sized>(
    network: &RoadNetwork,
    start: Point,
    goal: Point,
    metric: &M,
    config: &SearchConfig,
) -> Result<Option<Path<Point>>, SearchError> {
    let started = Instant::now();
    let timer = started;

    let mut nodes = NodeList::with_capacity(config.size_hint);
    let mut next = BinaryHeap::with_capacity(config.size_hint / 2);

    let start_f = metric.heuristic(start, goal);
    let start_id = nodes.admit(start, 0.0, start_f, None);
    next.push(HeuristicElement {
        id: start_id,
        g_score: 0.0,
        f_score: start_f,
    });

    let mut expansions = 0;

    while let Some(HeuristicElement {
        id: current_id,
        g_score: current_cost,
        ..
    }) = next.pop()
    {
        let current = &nodes[current_id];
        // stale entry of a Node that was re-queued with a better score
        if current.closed || current_cost > current.g_score {
            continue;
        }
        let current_pos = current.pos;

        if current_pos == goal {
            let path = Path::new(nodes.reconstruct(current_id), current.g_score);
            log::debug!(
                "found path {} -> {}: {} nodes, cost {}, {} expanded, {} discovered",
                start,
                goal,
                path.len(),
                path.cost(),
                expansions,
                nodes.len()
            );
            re_trace!("search path", timer);
            return Ok(Some(path));
        }

        config.check_budget(expansions, started)?;
        expansions += 1;
        nodes[current_id].closed = true;

        for &neighbor in network.neighbors(current_pos) {
            let other_cost = current_cost + metric.distance(current_pos, neighbor);

            match nodes.id_at(neighbor) {
                Some(other_id) => {
                    let other = &mut nodes[other_id];
                    if other.closed || other.g_score <= other_cost {
                        continue;
                    }
                    other.g_score = other_cost;
                    other.f_score = other_cost + metric.heuristic(neighbor, goal);
                    other.came_from = Some(current_id);
                    let f_score = other.f_score;
                    next.push(HeuristicElement {
                        id: other_id,
                        g_score: other_cost,
                        f_score,
                    });
                }
                None => {
                    let f_score = other_cost + metric.heuristic(neighbor, goal);
                    let other_id = nodes.admit(neighbor, other_cost, f_score, Some(current_id));
                    next.push(HeuristicElement {
                        id: other_id,
                        g_score: other_cost,
                        f_score,
                    });
                }
            }
        }
    }

    log::debug!(
        "no path {} -> {}: {} expanded, {} discovered",
        start,
        goal,
        expansions,
        nodes.len()
    );
    re_trace!("exhaust search", timer);
    Ok(None)
}
