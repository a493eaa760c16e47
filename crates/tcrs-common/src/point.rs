//! Planar points and geographic positions.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A 2-D coordinate in projected or pixel space.
///
/// All operations return a new point; a `Point` is never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Divide both ordinates by `num`.
    pub fn divide_by(&self, num: f64) -> Point {
        Point::new(self.x / num, self.y / num)
    }

    pub fn floor(&self) -> Point {
        Point::new(self.x.floor(), self.y.floor())
    }

    pub fn ceil(&self) -> Point {
        Point::new(self.x.ceil(), self.y.ceil())
    }

    /// Round to the nearest integer; halves round toward positive infinity.
    pub fn round(&self) -> Point {
        Point::new((self.x + 0.5).floor(), (self.y + 0.5).floor())
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        self.divide_by(rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_and_floor() {
        let p = Point::new(2429887.0, 3004190.0);
        let t = p.divide_by(256.0).floor();
        assert_eq!(t, Point::new(9491.0, 11735.0));
        // p itself is unchanged
        assert_eq!(p.x, 2429887.0);
    }

    #[test]
    fn test_round_halves() {
        assert_eq!(Point::new(1.5, -1.5).round(), Point::new(2.0, -1.0));
        assert_eq!(Point::new(1.49, -1.51).round(), Point::new(1.0, -2.0));
    }

    #[test]
    fn test_ceil() {
        assert_eq!(Point::new(0.1, -0.1).ceil(), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, -4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_operators() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(0.5, 0.5);
        assert_eq!(a + b, Point::new(1.5, 2.5));
        assert_eq!(a - b, Point::new(0.5, 1.5));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(a / 2.0, Point::new(0.5, 1.0));
    }
}
