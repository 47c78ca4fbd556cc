//! Distance functions used both as Edge Cost and as A* Heuristic

use crate::{Cost, Point};
use std::fmt::Debug;

/// Defines how far apart two Points are.
///
/// The search uses the same Metric for the Cost of every Edge and for the estimate of the
/// remaining Cost to the goal. Because the estimate is the direct distance under the very same
/// Metric that prices the Edges, it never overestimates, and a Node never has to be expanded twice.
///
/// The provided implementations are:
/// - [`Euclidean`]: the straight line distance between the raw coordinates (default)
/// - [`Haversine`]: the great circle distance in meters, reading `x` as latitude and `y` as longitude
pub trait Metric: Debug + Send + Sync {
    /// The Cost of the Edge from `a` to `b`
    fn distance(&self, a: Point, b: Point) -> Cost;

    /// The estimated Cost of reaching `goal` from `point`.
    ///
    /// Defaults to [`distance`](Metric::distance). An override has to stay at or below the cost
    /// of any actual Path, or the search stops returning shortest Paths.
    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        self.distance(point, goal)
    }
}

impl<M: Metric + ?Sized> Metric for &M {
    fn distance(&self, a: Point, b: Point) -> Cost {
        (**self).distance(a, b)
    }
    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        (**self).heuristic(point, goal)
    }
}

/// Planar straight line distance between the raw coordinates.
///
/// Applied to latitude/longitude pairs this is only an approximation, and its error grows with
/// the span of the Route. It is the default, since it is what Routes have always been priced by.
/// See [`Haversine`] for the geodesic alternative.
///
/// ```
/// # use waypoint_pathfinding::{metric::{Euclidean, Metric}, Point};
/// assert_eq!(Euclidean.distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn distance(&self, a: Point, b: Point) -> Cost {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Mean radius of the earth in meters
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great circle distance in meters on a sphere of [`EARTH_RADIUS`].
///
/// Points are read as `x` = latitude and `y` = longitude, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Haversine;

impl Metric for Haversine {
    fn distance(&self, a: Point, b: Point) -> Cost {
        let lat1 = a.x.to_radians();
        let lat2 = b.x.to_radians();
        let dlat = lat2 - lat1;
        let dlng = (b.y - a.y).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        EARTH_RADIUS * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_is_symmetric() {
        let a = Point::new(56.8796, 24.6032);
        let b = Point::new(56.9496, 24.1052);
        assert_eq!(Euclidean.distance(a, b), Euclidean.distance(b, a));
        assert_eq!(Euclidean.distance(a, a), 0.0);
    }

    #[test]
    fn haversine_one_degree() {
        let d = Haversine.distance(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert!((d - 111_195.0).abs() < 1.0, "{}", d);
    }

    #[test]
    fn haversine_longitude_shrinks_with_latitude() {
        let equator = Haversine.distance(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        let riga = Haversine.distance(Point::new(56.95, 24.0), Point::new(56.95, 25.0));
        assert!(riga < equator * 0.6);
    }

    #[test]
    fn heuristic_defaults_to_distance() {
        let (a, b) = (Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(Euclidean.heuristic(a, b), 5.0);
        assert_eq!((&Euclidean).heuristic(a, b), 5.0);
    }
}
