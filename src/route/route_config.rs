use crate::search::SearchConfig;

/// What a [`RouteChainer`](super::RouteChainer) does with a Segment that has no Path
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnreachablePolicy {
    /// the Segment contributes no Nodes and the Route continues with the next Segment,
    /// leaving a gap. The Segment is reported as unreachable in the
    /// [`Route`](super::Route).
    #[default]
    Skip,
    /// the Route ends with an error at the first such Segment
    Abort,
}

/// Options for configuring a [`RouteChainer`](super::RouteChainer)
///
/// Default options:
/// ```
/// # use waypoint_pathfinding::{prelude::*, route::UnreachablePolicy};
/// assert_eq!(
///     RouteConfig {
///         search: SearchConfig::UNBOUNDED,
///         on_unreachable: UnreachablePolicy::Skip,
///         merge_boundaries: false,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteConfig {
    /// The options used for the search of every Segment
    pub search: SearchConfig,
    /// see [`UnreachablePolicy`] (defaults to [`Skip`](UnreachablePolicy::Skip))
    pub on_unreachable: UnreachablePolicy,
    /// `false` (default): the Waypoint shared by two Segments appears twice in the Route,
    /// once as the end of the first and once as the start of the second Segment.
    ///
    /// `true`: that Waypoint only appears once.
    pub merge_boundaries: bool,
}

impl RouteConfig {
    /// an example RouteConfig that fails instead of leaving gaps, and keeps interactive limits
    ///
    /// Values:
    /// ```
    /// # use waypoint_pathfinding::{prelude::*, route::UnreachablePolicy};
    /// assert_eq!(
    ///     RouteConfig {
    ///         search: SearchConfig::INTERACTIVE,
    ///         on_unreachable: UnreachablePolicy::Abort,
    ///         merge_boundaries: true,
    ///     },
    ///     RouteConfig::STRICT
    /// );
    /// ```
    pub const STRICT: RouteConfig = RouteConfig {
        search: SearchConfig::INTERACTIVE,
        on_unreachable: UnreachablePolicy::Abort,
        merge_boundaries: true,
    };
}

impl Default for RouteConfig {
    fn default() -> RouteConfig {
        RouteConfig {
            search: SearchConfig::UNBOUNDED,
            on_unreachable: UnreachablePolicy::Skip,
            merge_boundaries: false,
        }
    }
}
