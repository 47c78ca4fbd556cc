//! The request and reply messages exchanged with a [`RouteWorker`](crate::worker::RouteWorker)
//!
//! A request carries the Road Network and the Waypoints:
//! ```json
//! { "roadNetwork": { "0,0": [[0, 1]], "0,1": [[0, 2]] }, "points": [[0, 0], [0, 2]] }
//! ```
//! The plain reply is the joined Path as a list of pairs, `[[0,0],[0,1],[0,2]]`. The
//! [`RouteReply`] adds the Cost and the outcome of every Segment, so that "nothing could be
//! computed" can be told apart from "nothing needed to be computed".

use crate::metric::Metric;
use crate::route::{Route, RouteChainer, RouteStatus, SegmentReport};
use crate::{network::RoadNetwork, Cost, Point, ProtocolError};
use serde::{Deserialize, Serialize};

/// One routing job: find the Route through `points` on `road_network`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// the Network to search. Owned by the request, so nobody else can change it during the job.
    pub road_network: RoadNetwork,
    /// the Waypoints, in travel order. At least two are needed for a non-empty Route.
    pub points: Vec<Point>,
}

impl RouteRequest {
    /// Creates a new RouteRequest
    pub fn new(road_network: RoadNetwork, points: Vec<Point>) -> RouteRequest {
        RouteRequest {
            road_network,
            points,
        }
    }
}

/// The answer to one [`RouteRequest`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteReply {
    /// the joined Path, possibly empty
    pub path: Vec<Point>,
    /// the total Cost of `path`
    pub cost: Cost,
    /// the summary of `segments`
    pub status: RouteStatus,
    /// one report per Segment, in Waypoint order
    pub segments: Vec<SegmentReport>,
}

impl From<Route> for RouteReply {
    fn from(route: Route) -> RouteReply {
        let status = route.status();
        let cost = route.cost();
        let segments = route.segments().to_vec();
        RouteReply {
            path: route.into_points(),
            cost,
            status,
            segments,
        }
    }
}

/// Decodes a [`RouteRequest`] from its JSON form
pub fn decode_request(input: &str) -> Result<RouteRequest, ProtocolError> {
    Ok(serde_json::from_str(input)?)
}

/// Encodes a Path as the plain list of `[x, y]` pairs
pub fn encode_path(path: &[Point]) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(path)?)
}

/// Encodes a [`RouteReply`] including its Segment reports
pub fn encode_reply(reply: &RouteReply) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(reply)?)
}

/// Answers one JSON request with the JSON list of pairs of the joined Path.
///
/// ## Examples
/// ```
/// # use waypoint_pathfinding::{protocol::handle_message, route::RouteChainer};
/// let reply = handle_message(
///     &RouteChainer::default(),
///     r#"{ "roadNetwork": { "0,0": [[0, 1]], "0,1": [[0, 2]] }, "points": [[0, 0], [0, 2]] }"#,
/// )
/// .unwrap();
///
/// assert_eq!(reply, "[[0.0,0.0],[0.0,1.0],[0.0,2.0]]");
/// ```
pub fn handle_message<M: Metric>(
    chainer: &RouteChainer<M>,
    input: &str,
) -> Result<String, ProtocolError> {
    let request = decode_request(input)?;
    let route = chainer.route(&request.road_network, &request.points)?;
    encode_path(route.points())
}
