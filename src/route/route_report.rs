use crate::{Cost, Path, Point};
use serde::{Deserialize, Serialize};

/// The outcome of the search of one Segment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentStatus {
    /// a Path with `len` Nodes and Cost `cost` was found
    Found {
        /// number of Nodes of the Segment's Path
        len: usize,
        /// Cost of the Segment's Path
        cost: Cost,
    },
    /// no Path connects the two Waypoints
    Unreachable,
    /// the search gave up before a conclusion, see [`SearchError`](crate::SearchError)
    Aborted {
        /// the reason the search gave up
        reason: String,
    },
}

/// The outcome for the Segment between Waypoints `index` and `index + 1`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentReport {
    /// the index of the Segment's first Waypoint
    pub index: usize,
    /// the Waypoint the Segment starts at
    pub start: Point,
    /// the Waypoint the Segment leads to
    pub goal: Point,
    /// what the search found
    pub status: SegmentStatus,
}

impl SegmentReport {
    /// `true` if the Segment contributed a Path to the Route
    pub fn is_found(&self) -> bool {
        matches!(self.status, SegmentStatus::Found { .. })
    }
}

/// Summary of all Segments of a [`Route`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    /// fewer than two Waypoints, so there was nothing to compute
    NoWork,
    /// every Segment was found
    Complete,
    /// some Segments were found, others were skipped
    Partial,
    /// no Segment was found
    NotFound,
}

/// The Path through all Waypoints together with a report of every Segment.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Route {
    path: Path<Point>,
    segments: Vec<SegmentReport>,
}

impl Route {
    pub(crate) fn new(path: Path<Point>, segments: Vec<SegmentReport>) -> Route {
        Route { path, segments }
    }

    /// the joined Path of all found Segments
    pub fn path(&self) -> &Path<Point> {
        &self.path
    }

    /// the Nodes of the joined Path
    pub fn points(&self) -> &[Point] {
        self.path.as_slice()
    }

    /// consumes the Route, returning the Nodes of the joined Path
    pub fn into_points(self) -> Vec<Point> {
        self.path.into_nodes()
    }

    /// the sum of the Costs of all found Segments
    pub fn cost(&self) -> Cost {
        self.path.cost()
    }

    /// one report per Segment, in Waypoint order
    pub fn segments(&self) -> &[SegmentReport] {
        &self.segments
    }

    /// the Segments that did not contribute to the Path
    pub fn missing_segments(&self) -> impl Iterator<Item = &SegmentReport> + '_ {
        self.segments.iter().filter(|segment| !segment.is_found())
    }

    /// summarizes the Segment reports
    pub fn status(&self) -> RouteStatus {
        let found = self.segments.iter().filter(|s| s.is_found()).count();
        if self.segments.is_empty() {
            RouteStatus::NoWork
        } else if found == self.segments.len() {
            RouteStatus::Complete
        } else if found == 0 {
            RouteStatus::NotFound
        } else {
            RouteStatus::Partial
        }
    }

    /// `true` if every Segment was found. A Route with nothing to compute is not complete.
    pub fn is_complete(&self) -> bool {
        self.status() == RouteStatus::Complete
    }
}

impl From<Route> for Vec<Point> {
    fn from(route: Route) -> Vec<Point> {
        route.into_points()
    }
}
