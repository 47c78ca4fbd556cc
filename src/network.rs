//! The Road Network searched by this crate

use crate::{Point, PointMap};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An adjacency list from a Node to the Nodes reachable from it in one step.
///
/// The Network is built by the caller and only read during a search. Edges are directed and
/// there is no requirement on symmetry or connectivity. A Node that was never added simply has
/// no neighbors. The order of a Node's neighbors is kept as inserted.
///
/// On the wire the Network is a map from `"x,y"` keys to lists of `[x, y]` pairs:
/// ```
/// # use waypoint_pathfinding::{network::RoadNetwork, Point};
/// let network: RoadNetwork =
///     serde_json::from_str(r#"{ "0,0": [[0, 1]], "0,1": [[0, 2]] }"#).unwrap();
///
/// assert_eq!(network.neighbors(Point::new(0.0, 0.0)), &[Point::new(0.0, 1.0)][..]);
/// assert!(network.neighbors(Point::new(0.0, 2.0)).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoadNetwork {
    adjacency: PointMap<Vec<Point>>,
}

impl RoadNetwork {
    /// Creates an empty Network
    pub fn new() -> RoadNetwork {
        RoadNetwork::default()
    }

    /// Creates an empty Network with room for `capacity` Nodes
    pub fn with_capacity(capacity: usize) -> RoadNetwork {
        RoadNetwork {
            adjacency: PointMap::with_capacity(capacity),
        }
    }

    /// Adds a directed Edge from `from` to `to`, after all existing neighbors of `from`
    pub fn add_edge(&mut self, from: Point, to: Point) -> &mut Self {
        self.adjacency.entry(from.key()).or_default().push(to);
        self
    }

    /// Adds Edges in both directions between `a` and `b`
    pub fn add_road(&mut self, a: Point, b: Point) -> &mut Self {
        self.add_edge(a, b).add_edge(b, a)
    }

    /// Adds a Node without any outgoing Edges, if it is not already present
    pub fn add_node(&mut self, node: Point) -> &mut Self {
        self.adjacency.entry(node.key()).or_default();
        self
    }

    /// Appends all `neighbors` to the neighbors of `node`
    pub fn extend_neighbors(
        &mut self,
        node: Point,
        neighbors: impl IntoIterator<Item = Point>,
    ) -> &mut Self {
        self.adjacency
            .entry(node.key())
            .or_default()
            .extend(neighbors);
        self
    }

    /// The Nodes reachable from `node` in one step, in insertion order.
    ///
    /// Empty if `node` is not part of the Network.
    pub fn neighbors(&self, node: Point) -> &[Point] {
        self.adjacency
            .get(&node.key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `true` if `node` has an entry in the Network
    pub fn contains(&self, node: Point) -> bool {
        self.adjacency.contains_key(&node.key())
    }

    /// The number of Nodes with an entry in the Network
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// The number of directed Edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// `true` if the Network has no Nodes
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates all Nodes with an entry and their neighbors, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Point, &[Point])> + '_ {
        self.adjacency
            .iter()
            .map(|(key, neighbors)| (key.point(), neighbors.as_slice()))
    }
}

impl FromIterator<(Point, Point)> for RoadNetwork {
    fn from_iter<I: IntoIterator<Item = (Point, Point)>>(edges: I) -> RoadNetwork {
        let mut network = RoadNetwork::new();
        network.extend(edges);
        network
    }
}

impl Extend<(Point, Point)> for RoadNetwork {
    fn extend<I: IntoIterator<Item = (Point, Point)>>(&mut self, edges: I) {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }
}

impl Serialize for RoadNetwork {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.iter()
                .map(|(node, neighbors)| (node.to_string(), neighbors)),
        )
    }
}

/// Keys that parse to the same Node (like `"0,1"` and `"0.0,1"`) have their neighbor lists
/// appended in the order they appear.
impl<'de> Deserialize<'de> for RoadNetwork {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RoadNetwork, D::Error> {
        struct NetworkVisitor;

        impl<'de> Visitor<'de> for NetworkVisitor {
            type Value = RoadNetwork;

            fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
                fmt.write_str("a map from \"x,y\" keys to lists of [x, y] neighbors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RoadNetwork, A::Error> {
                let mut network = RoadNetwork::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, neighbors)) = map.next_entry::<String, Vec<Point>>()? {
                    let node: Point = key.parse().map_err(de::Error::custom)?;
                    network.extend_neighbors(node, neighbors);
                }
                Ok(network)
            }
        }

        deserializer.deserialize_map(NetworkVisitor)
    }
}
