//! Affine transform from projected meters to pixel space.

use tcrs_common::{Point, TcrsError, TcrsResult};

/// `pixel = scale * (a * x + b, c * y + d)`
///
/// The coefficients are fixed per tiled CRS; `scale` varies per zoom level
/// and is pixels per projected unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Transformation {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> TcrsResult<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite()) {
            return Err(TcrsError::configuration(format!(
                "transformation coefficients must be finite: ({}, {}, {}, {})",
                a, b, c, d
            )));
        }
        if a == 0.0 || c == 0.0 {
            return Err(TcrsError::configuration(
                "transformation is not invertible: a and c must be non-zero",
            ));
        }
        Ok(Self { a, b, c, d })
    }

    /// Transform placing `origin` at pixel (0, 0) with y increasing downward.
    pub fn from_origin(origin: Point) -> TcrsResult<Self> {
        Self::new(1.0, -origin.x, -1.0, origin.y)
    }

    pub fn transform(&self, point: Point, scale: f64) -> Point {
        Point::new(
            scale * (self.a * point.x + self.b),
            scale * (self.c * point.y + self.d),
        )
    }

    pub fn untransform(&self, point: Point, scale: f64) -> Point {
        Point::new(
            (point.x / scale - self.b) / self.a,
            (point.y / scale - self.d) / self.c,
        )
    }
}
