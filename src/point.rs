use crate::ParsePointError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A Node of the Road Network: a coordinate pair.
///
/// For geographic data `x` is the latitude and `y` the longitude, which is the order the pairs
/// arrive in. On the wire a Point is a two element array `[x, y]`.
///
/// Equality is exact floating point equality of both components, with `0.0` and `-0.0` being
/// the same Point and all NaNs being the same Point. This makes `Point` usable as a Node
/// identity, see [`PointKey`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    /// the first component (latitude)
    pub x: f64,
    /// the second component (longitude)
    pub y: f64,
}

impl Point {
    /// Creates a new Point
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// The identity of this Point when used as a Node
    pub fn key(self) -> PointKey {
        PointKey(canonical_bits(self.x), canonical_bits(self.y))
    }
}

/// The hashable identity of a [`Point`].
///
/// Stores the bit patterns of both components after folding `-0.0` into `0.0` and every NaN
/// into one NaN, so that two keys are equal exactly when the coordinates are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey(u64, u64);

impl PointKey {
    /// The Point this key was created from (up to the sign of zero and the NaN payload)
    pub fn point(self) -> Point {
        Point::new(f64::from_bits(self.0), f64::from_bits(self.1))
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

/// A [`HashMap`](hashbrown::HashMap) keyed by Node identity
pub(crate) type PointMap<V> = hashbrown::HashMap<PointKey, V>;

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Point {
        Point::new(x, y)
    }
}
impl From<Point> for [f64; 2] {
    fn from(point: Point) -> [f64; 2] {
        [point.x, point.y]
    }
}
impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

/// Formats the Point as `x,y`, the key format of a serialized Road Network
impl fmt::Display for Point {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{},{}", self.x, self.y)
    }
}

/// Parses the `x,y` format produced by [`Display`](fmt::Display)
impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Point, ParsePointError> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError::Format(s.to_owned()))?;
        let parse = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| ParsePointError::Number(value.to_owned()))
        };
        Ok(Point::new(parse(x)?, parse(y)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zero_is_one_node() {
        assert_eq!(Point::new(0.0, -0.0), Point::new(-0.0, 0.0));
        assert_eq!(Point::new(0.0, -0.0).key(), Point::new(0.0, 0.0).key());
    }

    #[test]
    fn nan_is_one_node() {
        let a = Point::new(f64::NAN, 1.0);
        let b = Point::new(-f64::NAN, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn nearby_values_are_distinct() {
        assert_ne!(Point::new(0.1 + 0.2, 0.0), Point::new(0.3, 0.0));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(56.8796, 24.6032).to_string(), "56.8796,24.6032");
        assert_eq!(Point::new(0.0, 1.0).to_string(), "0,1");
    }

    #[test]
    fn parse() {
        assert_eq!("0,1".parse::<Point>(), Ok(Point::new(0.0, 1.0)));
        assert_eq!(" 56.8796 , 24.6032".parse::<Point>(), Ok(Point::new(56.8796, 24.6032)));
        assert_eq!(
            "0;1".parse::<Point>(),
            Err(ParsePointError::Format("0;1".to_owned()))
        );
        assert_eq!(
            "0,north".parse::<Point>(),
            Err(ParsePointError::Number("north".to_owned()))
        );
    }

    #[test]
    fn key_round_trip() {
        let point = Point::new(-12.5, 7.25);
        assert_eq!(point.key().point(), point);
    }

    #[test]
    fn serde_pair() {
        let point: Point = serde_json::from_str("[0, 2]").unwrap();
        assert_eq!(point, Point::new(0.0, 2.0));
        assert_eq!(serde_json::to_string(&point).unwrap(), "[0.0,2.0]");
    }
}
