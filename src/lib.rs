#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find Routes through a list of Waypoints on a Road Network of coordinates.
//!
//! ## Introduction
//! A Route drawn by a user is an ordered list of Waypoints. Between every two consecutive
//! Waypoints, the shortest Path along the Road Network is searched using A*, and the resulting
//! Segments are joined into one Path. Since a Road Network with a lot of Waypoints can take a
//! while to search, the whole computation can be moved onto a dedicated
//! [`RouteWorker`](worker::RouteWorker) thread that answers one request message with exactly
//! one reply message.
//!
//! The Road Network is an adjacency list from a coordinate to the coordinates reachable from
//! it. Nodes are identified by their coordinate value alone: two Points with equal coordinates
//! are the same Node. The Cost of an Edge and the Heuristic both use the same
//! [`Metric`](metric::Metric), which defaults to the planar [`Euclidean`](metric::Euclidean)
//! distance between the raw coordinates.
//!
//! ## Examples
//! Finding the Path between two Nodes:
//! ```
//! use waypoint_pathfinding::prelude::*;
//!
//! let mut network = RoadNetwork::new();
//! network
//!     .add_edge(Point::new(0.0, 0.0), Point::new(0.0, 1.0))
//!     .add_edge(Point::new(0.0, 1.0), Point::new(0.0, 2.0));
//!
//! let path = find_path(&network, Point::new(0.0, 0.0), Point::new(0.0, 2.0)).unwrap();
//!
//! assert_eq!(path.cost(), 2.0);
//! assert_eq!(
//!     path,
//!     vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(0.0, 2.0)]
//! );
//! ```
//!
//! ### Routing through Waypoints
//! [`build_route`](route::build_route) searches every Segment and joins them. Segments that
//! cannot be reached are skipped, and the Node shared by two Segments appears twice:
//! ```
//! # use waypoint_pathfinding::prelude::*;
//! let (a, b, c) = (Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(0.0, 2.0));
//! let mut network = RoadNetwork::new();
//! network.add_edge(a, b).add_edge(b, c);
//!
//! let points = build_route(&network, &[a, b, c]);
//! assert_eq!(points, vec![a, b, b, c]);
//!
//! // a single Waypoint is nothing to compute
//! assert!(build_route(&network, &[a]).is_empty());
//! ```
//!
//! A [`RouteChainer`](route::RouteChainer) with a [`RouteConfig`](route::RouteConfig) reports
//! the outcome of every Segment instead of silently dropping it:
//! ```
//! # use waypoint_pathfinding::prelude::*;
//! # let (a, b, c) = (Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(0.0, 2.0));
//! let mut network = RoadNetwork::new();
//! network.add_edge(a, b);
//!
//! let route = RouteChainer::default().route(&network, &[a, b, c]).unwrap();
//!
//! assert_eq!(route.status(), RouteStatus::Partial);
//! assert_eq!(route.points(), &[a, b][..]);
//! ```
//!
//! ### Off-thread Routing
//! ```
//! # use waypoint_pathfinding::prelude::*;
//! # let (a, b, c) = (Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(0.0, 2.0));
//! # let mut network = RoadNetwork::new();
//! # network.add_edge(a, b).add_edge(b, c);
//! let worker = RouteWorker::spawn().unwrap();
//!
//! let pending = worker.submit(RouteRequest::new(network, vec![a, b, c])).unwrap();
//! let reply = pending.wait().unwrap();
//!
//! assert_eq!(reply.path, vec![a, b, b, c]);
//! worker.shutdown().unwrap();
//! ```

/// Logs the time elapsed since `$timer` on the trace level and resets `$timer` to now.
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}

mod error;
pub use error::{ParsePointError, ProtocolError, RouteError, SearchError, WorkerError};

mod point;
pub use point::{Point, PointKey};
pub(crate) use point::PointMap;

mod path;
pub use path::Path;

pub mod metric;

pub mod network;

pub mod search;

pub mod route;

pub mod protocol;

pub mod worker;

/// The Type used for the Cost of an Edge or a Path
pub type Cost = f64;

/// The most commonly used Types and Functions of this crate
pub mod prelude {
    pub use crate::{
        metric::{Euclidean, Haversine, Metric},
        network::RoadNetwork,
        protocol::{RouteReply, RouteRequest},
        route::{build_route, Route, RouteChainer, RouteConfig, RouteStatus, UnreachablePolicy},
        search::{a_star_search, find_path, SearchConfig},
        worker::RouteWorker,
        Cost, Path, Point,
    };
}
