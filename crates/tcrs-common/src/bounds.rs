//! Axis-aligned rectangles in planar and geographic space.

use crate::point::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle spanning two points.
///
/// `min.x <= max.x` and `min.y <= max.y` hold for every constructed value,
/// regardless of the order the corners were supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Create the smallest bounds containing both points.
    pub fn new(a: Point, b: Point) -> Self {
        Self { min: a, max: a }.extend(b)
    }

    /// Create the smallest bounds containing every point, or `None` for an
    /// empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |b, p| b.extend(p)))
    }

    /// Return these bounds grown to include `point`.
    pub fn extend(&self, point: Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Point::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }

    /// Midpoint of the rectangle.
    pub fn centre(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check if this rectangle overlaps another. Touching edges intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        let x_intersects = other.max.x >= self.min.x && other.min.x <= self.max.x;
        let y_intersects = other.max.y >= self.min.y && other.min.y <= self.max.y;
        x_intersects && y_intersects
    }

    /// Check if a point lies inside or on the edge of this rectangle.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// A geographic rectangle given by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Create the geographic bounds spanning both positions.
    pub fn new(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    pub fn south(&self) -> f64 {
        self.south_west.lat
    }

    pub fn west(&self) -> f64 {
        self.south_west.lng
    }

    pub fn north(&self) -> f64 {
        self.north_east.lat
    }

    pub fn east(&self) -> f64 {
        self.north_east.lng
    }
}
