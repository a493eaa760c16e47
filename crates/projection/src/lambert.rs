//! Lambert Conformal Conic projection (two standard parallels, ellipsoidal).
//!
//! Used by Natural Resources Canada for the Canada-wide base map grid
//! (EPSG:3978, NAD83 / Canada Atlas Lambert): a cone secant to the
//! ellipsoid along two standard parallels.

use crate::geodesy::{Ellipsoid, ProjTransform};
use tcrs_common::{LatLng, Point, TcrsError, TcrsResult};

/// Lambert Conformal Conic parameters, all angles in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct LambertConformal {
    pub lat0: f64,
    pub lon0: f64,
    pub lat1: f64,
    pub lat2: f64,
    /// False easting (meters)
    pub x0: f64,
    /// False northing (meters)
    pub y0: f64,
    pub ellipsoid: Ellipsoid,
    transform: ProjTransform,
}

impl LambertConformal {
    pub fn new(
        lat0: f64,
        lon0: f64,
        lat1: f64,
        lat2: f64,
        x0: f64,
        y0: f64,
        ellipsoid: Ellipsoid,
    ) -> TcrsResult<Self> {
        let params = [lat0, lon0, lat1, lat2, x0, y0];
        if params.iter().any(|v| !v.is_finite()) {
            return Err(TcrsError::configuration("Lambert parameters must be finite"));
        }
        if [lat0, lat1, lat2].iter().any(|lat| lat.abs() > 90.0) {
            return Err(TcrsError::configuration(format!(
                "Lambert latitudes must be within ±90, got lat_0={} lat_1={} lat_2={}",
                lat0, lat1, lat2
            )));
        }
        // the cone degenerates to a cylinder
        if (lat1 + lat2).abs() < 1e-10 {
            return Err(TcrsError::configuration(format!(
                "standard parallels {} and {} are symmetric about the equator",
                lat1, lat2
            )));
        }

        let transform = ProjTransform::new(
            &format!(
                "+proj=lcc +lat_0={} +lon_0={} +lat_1={} +lat_2={} +x_0={} +y_0={} +units=m",
                lat0, lon0, lat1, lat2, x0, y0
            ),
            ellipsoid,
        )?;

        Ok(Self {
            lat0,
            lon0,
            lat1,
            lat2,
            x0,
            y0,
            ellipsoid,
            transform,
        })
    }

    /// NAD83 / Canada Atlas Lambert (EPSG:3978).
    ///
    /// - Standard parallels: 49°N and 77°N
    /// - Origin: 49°N, 95°W
    /// - No false easting/northing
    pub fn canada_atlas() -> TcrsResult<Self> {
        Self::new(49.0, -95.0, 49.0, 77.0, 0.0, 0.0, Ellipsoid::Grs80)
    }

    pub fn project(&self, latlng: LatLng) -> TcrsResult<Point> {
        self.transform.forward(latlng)
    }

    pub fn unproject(&self, point: Point) -> TcrsResult<LatLng> {
        self.transform.inverse(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_false_origin() {
        let proj = LambertConformal::canada_atlas().unwrap();
        let p = proj.project(LatLng::new(49.0, -95.0)).unwrap();
        assert!(p.x.abs() < 1e-6, "x={}", p.x);
        assert!(p.y.abs() < 1e-6, "y={}", p.y);
    }

    #[test]
    fn test_north_is_up_on_central_meridian() {
        let proj = LambertConformal::canada_atlas().unwrap();
        let south = proj.project(LatLng::new(45.0, -95.0)).unwrap();
        let north = proj.project(LatLng::new(60.0, -95.0)).unwrap();
        assert!(south.x.abs() < 1e-6);
        assert!(north.y > south.y);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(LambertConformal::new(49.0, -95.0, 30.0, -30.0, 0.0, 0.0, Ellipsoid::Grs80).is_err());
        assert!(LambertConformal::new(49.0, -95.0, 95.0, 77.0, 0.0, 0.0, Ellipsoid::Grs80).is_err());
        assert!(LambertConformal::new(f64::NAN, -95.0, 49.0, 77.0, 0.0, 0.0, Ellipsoid::Grs80).is_err());
    }

    #[test]
    fn test_infinite_longitude_is_an_error() {
        let proj = LambertConformal::canada_atlas().unwrap();
        assert!(proj.project(LatLng::new(45.0, f64::INFINITY)).is_err());
        assert!(proj.project(LatLng::new(45.0, f64::NEG_INFINITY)).is_err());
    }
}
