//! Joining the Paths between consecutive Waypoints into one Route

mod route_config;
pub use route_config::{RouteConfig, UnreachablePolicy};

mod route_report;
pub use route_report::{Route, RouteStatus, SegmentReport, SegmentStatus};

use crate::metric::{Euclidean, Metric};
use crate::protocol::RouteRequest;
use crate::search::a_star_search;
use crate::{network::RoadNetwork, Path, Point, RouteError};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the Path through all `waypoints` with default options.
///
/// For every consecutive pair of Waypoints the shortest Path is searched. The Paths are joined
/// in order without removing the Waypoint they share, so that Waypoint appears twice.
/// A pair without a Path contributes nothing, leaving a gap in the result.
/// Fewer than two Waypoints result in an empty Path.
///
/// Use [`RouteChainer`] to learn which Segments were skipped.
pub fn build_route(network: &RoadNetwork, waypoints: &[Point]) -> Vec<Point> {
    match RouteChainer::default().route(network, waypoints) {
        Ok(route) => route.into_points(),
        // skipping never fails
        Err(_) => Vec::new(),
    }
}

/// Routes through Waypoints Segment by Segment, with a configurable [`Metric`] and
/// [`RouteConfig`].
///
/// ## Examples
/// ```
/// use waypoint_pathfinding::{prelude::*, route::UnreachablePolicy, RouteError};
///
/// let (a, b, c) = (Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(0.0, 2.0));
/// let mut network = RoadNetwork::new();
/// network.add_edge(a, b);
///
/// let chainer = RouteChainer::new(
///     Euclidean,
///     RouteConfig {
///         on_unreachable: UnreachablePolicy::Abort,
///         ..Default::default()
///     },
/// );
///
/// assert_eq!(
///     chainer.route(&network, &[a, b, c]),
///     Err(RouteError::SegmentUnreachable { index: 1 })
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RouteChainer<M: Metric = Euclidean> {
    metric: M,
    config: RouteConfig,
}

impl RouteChainer {
    /// Creates a new RouteChainer using the [`Euclidean`] Metric
    pub fn with_config(config: RouteConfig) -> RouteChainer {
        RouteChainer::new(Euclidean, config)
    }
}

impl Default for RouteChainer {
    fn default() -> RouteChainer {
        RouteChainer::with_config(RouteConfig::default())
    }
}

impl<M: Metric> RouteChainer<M> {
    /// Creates a new RouteChainer
    pub fn new(metric: M, config: RouteConfig) -> RouteChainer<M> {
        RouteChainer { metric, config }
    }

    /// Returns the RouteConfig used by this RouteChainer
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Returns the Metric used by this RouteChainer
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Computes the Route through all `waypoints`.
    ///
    /// Every consecutive pair is searched independently. How Segments without a Path are
    /// handled depends on [`RouteConfig::on_unreachable`]: with
    /// [`Skip`](UnreachablePolicy::Skip) this never returns an error.
    pub fn route(&self, network: &RoadNetwork, waypoints: &[Point]) -> Result<Route, RouteError> {
        let timer = std::time::Instant::now();

        let mut path = Path::empty();
        let mut segments = Vec::with_capacity(waypoints.len().saturating_sub(1));

        for (index, pair) in waypoints.windows(2).enumerate() {
            let (start, goal) = (pair[0], pair[1]);
            let status =
                match a_star_search(network, start, goal, &self.metric, &self.config.search) {
                    Ok(Some(segment)) => {
                        let status = SegmentStatus::Found {
                            len: segment.len(),
                            cost: segment.cost(),
                        };
                        path.concat(segment, self.config.merge_boundaries);
                        status
                    }
                    Ok(None) => {
                        log::warn!("no path for segment {}: {} -> {}", index, start, goal);
                        if self.config.on_unreachable == UnreachablePolicy::Abort {
                            return Err(RouteError::SegmentUnreachable { index });
                        }
                        SegmentStatus::Unreachable
                    }
                    Err(source) => {
                        log::warn!("search for segment {} failed: {}", index, source);
                        if self.config.on_unreachable == UnreachablePolicy::Abort {
                            return Err(RouteError::Search { index, source });
                        }
                        SegmentStatus::Aborted {
                            reason: source.to_string(),
                        }
                    }
                };
            segments.push(SegmentReport {
                index,
                start,
                goal,
                status,
            });
        }

        let route = Route::new(path, segments);
        log::debug!(
            "route through {} waypoints: {} points, cost {}, {:?}",
            waypoints.len(),
            route.points().len(),
            route.cost(),
            route.status()
        );
        re_trace!("build route", timer);
        Ok(route)
    }

    /// Computes the Routes of several independent requests, in the order of `requests`.
    ///
    /// Every request is searched with its own state. With the `parallel` feature, the requests
    /// are spread over the rayon thread pool.
    pub fn build_routes(&self, requests: &[RouteRequest]) -> Vec<Result<Route, RouteError>> {
        #[cfg(feature = "parallel")]
        let routes = requests
            .par_iter()
            .map(|request| self.route(&request.road_network, &request.points))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let routes = requests
            .iter()
            .map(|request| self.route(&request.road_network, &request.points))
            .collect();

        routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchConfig;
    use crate::SearchError;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn chain() -> (RoadNetwork, [Point; 3]) {
        let points = [p(0.0, 0.0), p(0.0, 1.0), p(0.0, 2.0)];
        let mut network = RoadNetwork::new();
        network
            .add_edge(points[0], points[1])
            .add_edge(points[1], points[2]);
        (network, points)
    }

    #[test]
    fn boundary_appears_twice() {
        let (network, [a, b, c]) = chain();

        assert_eq!(build_route(&network, &[a, b, c]), vec![a, b, b, c]);
    }

    #[test]
    fn nothing_to_compute() {
        let (network, [a, ..]) = chain();

        assert!(build_route(&network, &[]).is_empty());
        assert!(build_route(&network, &[a]).is_empty());

        let route = RouteChainer::default().route(&network, &[a]).unwrap();
        assert_eq!(route.status(), RouteStatus::NoWork);
        assert!(route.segments().is_empty());
    }

    #[test]
    fn unreachable_segment_is_skipped() {
        let (network, [a, b, c]) = chain();

        // c -> a has no path, a -> c does
        let route = RouteChainer::default().route(&network, &[c, a, c]).unwrap();

        assert_eq!(route.points(), &[a, b, c][..]);
        assert_eq!(route.status(), RouteStatus::Partial);
        assert_eq!(route.segments()[0].status, SegmentStatus::Unreachable);
        assert_eq!(
            route.segments()[1].status,
            SegmentStatus::Found { len: 3, cost: 2.0 }
        );
    }

    #[test]
    fn all_unreachable_differs_from_no_work() {
        let (network, [a, _, c]) = chain();

        let route = RouteChainer::default().route(&network, &[c, a]).unwrap();

        assert!(route.points().is_empty());
        assert_eq!(route.status(), RouteStatus::NotFound);
    }

    #[test]
    fn merge_boundaries() {
        let (network, [a, b, c]) = chain();
        let chainer = RouteChainer::with_config(RouteConfig {
            merge_boundaries: true,
            ..Default::default()
        });

        let route = chainer.route(&network, &[a, b, c]).unwrap();

        assert_eq!(route.points(), &[a, b, c][..]);
        assert_eq!(route.cost(), 2.0);
        assert!(route.is_complete());
    }

    #[test]
    fn abort_on_search_limit() {
        let (network, [a, _, c]) = chain();
        let chainer = RouteChainer::new(
            Euclidean,
            RouteConfig {
                search: SearchConfig {
                    max_expansions: Some(1),
                    ..Default::default()
                },
                on_unreachable: UnreachablePolicy::Abort,
                ..Default::default()
            },
        );

        assert_eq!(
            chainer.route(&network, &[a, c]),
            Err(RouteError::Search {
                index: 0,
                source: SearchError::ExpansionLimit { expansions: 1 }
            })
        );
    }

    #[test]
    fn skip_on_search_limit() {
        let (network, [a, _, c]) = chain();
        let chainer = RouteChainer::new(
            Euclidean,
            RouteConfig {
                search: SearchConfig {
                    max_expansions: Some(1),
                    ..Default::default()
                },
                ..Default::default()
            },
        );

        let route = chainer.route(&network, &[a, c]).unwrap();

        assert!(route.points().is_empty());
        assert!(matches!(
            route.segments()[0].status,
            SegmentStatus::Aborted { .. }
        ));
    }

    #[test]
    fn build_routes_keeps_request_order() {
        let (network, [a, b, c]) = chain();
        let requests = vec![
            RouteRequest::new(network.clone(), vec![a, c]),
            RouteRequest::new(network.clone(), vec![c, a]),
            RouteRequest::new(network, vec![b, c]),
        ];

        let routes = RouteChainer::default().build_routes(&requests);

        let points: Vec<Vec<Point>> = routes
            .into_iter()
            .map(|route| route.unwrap().into_points())
            .collect();
        assert_eq!(points, vec![vec![a, b, c], vec![], vec![b, c]]);
    }
}
