use crate::SearchError;
use std::time::{Duration, Instant};

/// Options for a single [`a_star_search`](super::a_star_search)
///
/// Default options:
/// ```
/// # use waypoint_pathfinding::search::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         size_hint: 64,
///         max_expansions: None,
///         timeout: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The number of Nodes the search reserves room for up front (defaults to `64`)
    pub size_hint: usize,
    /// `None` (default): the search runs until the goal is found or the open set is empty.
    ///
    /// `Some(n)`: the search gives up with [`SearchError::ExpansionLimit`] once `n` Nodes
    /// have been expanded without reaching the goal.
    pub max_expansions: Option<usize>,
    /// `None` (default): no time limit.
    ///
    /// `Some(duration)`: the search gives up with [`SearchError::TimedOut`] once it has been
    /// running for longer than `duration`. The clock is only read every
    /// [`CLOCK_INTERVAL`](SearchConfig::CLOCK_INTERVAL) expansions.
    pub timeout: Option<Duration>,
}

impl SearchConfig {
    /// Every how many expansions the timeout is checked
    pub const CLOCK_INTERVAL: usize = 64;

    /// a SearchConfig without any limits. This is the default.
    pub const UNBOUNDED: SearchConfig = SearchConfig {
        size_hint: 64,
        max_expansions: None,
        timeout: None,
    };

    /// an example SearchConfig for searches that must not stall an interactive caller
    ///
    /// Values:
    /// ```
    /// # use waypoint_pathfinding::search::SearchConfig;
    /// # use std::time::Duration;
    /// assert_eq!(
    ///     SearchConfig {
    ///         size_hint: 1024,
    ///         max_expansions: Some(2_000_000),
    ///         timeout: Some(Duration::from_secs(5)),
    ///     },
    ///     SearchConfig::INTERACTIVE
    /// );
    /// ```
    pub const INTERACTIVE: SearchConfig = SearchConfig {
        size_hint: 1024,
        max_expansions: Some(2_000_000),
        timeout: Some(Duration::from_secs(5)),
    };

    /// Fails if the search has used up its budget after `expansions` expansions
    pub(crate) fn check_budget(
        &self,
        expansions: usize,
        started: Instant,
    ) -> Result<(), SearchError> {
        if let Some(max) = self.max_expansions {
            if expansions >= max {
                return Err(SearchError::ExpansionLimit { expansions });
            }
        }
        if let Some(timeout) = self.timeout {
            if expansions % Self::CLOCK_INTERVAL == 0 {
                let elapsed = started.elapsed();
                if elapsed > timeout {
                    return Err(SearchError::TimedOut { elapsed });
                }
            }
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::UNBOUNDED
    }
}
