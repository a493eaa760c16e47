//! Spherical ("Web") Mercator projection, EPSG:3857.
//!
//! Geodetic coordinates are treated as if on a sphere with the WGS84
//! semi-major axis, which is what every slippy-map client does.

use crate::geodesy::{Ellipsoid, ProjTransform};
use tcrs_common::{LatLng, Point, TcrsResult};

/// Latitude at which the Mercator world becomes square.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Half the width of the Mercator world in meters.
pub const HALF_WORLD: f64 = 20037508.342789244;

#[derive(Debug, Clone, PartialEq)]
pub struct SphericalMercator {
    transform: ProjTransform,
}

impl SphericalMercator {
    pub fn new() -> TcrsResult<Self> {
        Ok(Self {
            transform: ProjTransform::new(
                "+proj=merc +lat_ts=0 +lon_0=0 +k=1 +x_0=0 +y_0=0 +units=m",
                Ellipsoid::WebSphere,
            )?,
        })
    }

    /// Project a position to meters. Latitudes beyond ±[`MAX_LATITUDE`] are
    /// clamped since the poles project to infinity.
    pub fn project(&self, latlng: LatLng) -> TcrsResult<Point> {
        let lat = latlng.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        self.transform.forward(LatLng::new(lat, latlng.lng))
    }

    pub fn unproject(&self, point: Point) -> TcrsResult<LatLng> {
        self.transform.inverse(point)
    }
}
