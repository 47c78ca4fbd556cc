use std::time::Duration;
use thiserror::Error;

/// Reasons for a search to give up before the open set ran empty.
///
/// A search that simply cannot reach its goal is not an error; see
/// [`a_star_search`](crate::search::a_star_search).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// [`SearchConfig::max_expansions`](crate::search::SearchConfig::max_expansions) was reached
    #[error("search gave up after expanding {expansions} nodes")]
    ExpansionLimit {
        /// the number of Nodes expanded before giving up
        expansions: usize,
    },
    /// [`SearchConfig::timeout`](crate::search::SearchConfig::timeout) was exceeded
    #[error("search timed out after {elapsed:?}")]
    TimedOut {
        /// the time spent searching
        elapsed: Duration,
    },
}

/// Failures of a [`RouteChainer`](crate::route::RouteChainer) running with
/// [`UnreachablePolicy::Abort`](crate::route::UnreachablePolicy::Abort).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// no Path connects waypoint `index` to waypoint `index + 1`
    #[error("no path from waypoint {index} to waypoint {}", .index + 1)]
    SegmentUnreachable {
        /// the index of the Segment, which is the index of its first waypoint
        index: usize,
    },
    /// the search for a Segment gave up
    #[error("search for segment {index} failed")]
    Search {
        /// the index of the Segment
        index: usize,
        /// why the search gave up
        #[source]
        source: SearchError,
    },
}

/// Failures of talking to a [`RouteWorker`](crate::worker::RouteWorker).
#[derive(Error, Debug)]
pub enum WorkerError {
    /// the worker thread could not be started
    #[error("failed to spawn route worker thread")]
    Spawn(#[source] std::io::Error),
    /// the worker thread is gone, so no reply will arrive
    #[error("route worker is no longer running")]
    Disconnected,
    /// the job panicked on the worker thread. The worker keeps serving further jobs.
    #[error("route job panicked on the worker thread")]
    JobPanicked,
    /// the worker loop itself panicked, so the thread ended abnormally
    #[error("route worker thread panicked")]
    Crashed,
    /// the route could not be computed
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Failures of decoding or encoding the message contract in [`protocol`](crate::protocol).
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// the message is not valid JSON for the expected shape
    #[error("malformed route message")]
    Json(#[from] serde_json::Error),
    /// the decoded request could not be routed
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Failures of parsing a [`Point`](crate::Point) from its `"x,y"` form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    /// the text is not two values separated by a comma
    #[error("expected two comma separated coordinates, got {0:?}")]
    Format(String),
    /// one of the two values is not a number
    #[error("invalid coordinate {0:?}")]
    Number(String),
}
