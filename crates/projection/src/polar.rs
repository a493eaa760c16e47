//! Polar Stereographic projection (ellipsoidal).
//!
//! Supports both EPSG variants:
//! - Variant A: natural origin at the pole with a scale factor `k0`
//!   (EPSG:5936, the Alaska/Arctic ocean basemap grid)
//! - Variant B: a standard parallel `lat_ts` at which scale is true
//!   (EPSG:3413 NSIDC Sea Ice North, EPSG:3031 Antarctic)

use crate::geodesy::{Ellipsoid, ProjTransform};
use tcrs_common::{LatLng, Point, TcrsError, TcrsResult};

/// Which pole the projection is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pole {
    North,
    South,
}

impl Pole {
    fn latitude(&self) -> f64 {
        match self {
            Pole::North => 90.0,
            Pole::South => -90.0,
        }
    }
}

/// How scale is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolarScale {
    /// Scale factor at the pole
    Factor(f64),
    /// Latitude of true scale, degrees
    StandardParallel(f64),
}

/// Polar Stereographic projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarStereographic {
    pub pole: Pole,
    /// Central meridian (the longitude pointing "down" from the pole), degrees
    pub lon0: f64,
    pub scale: PolarScale,
    /// False easting (meters)
    pub x0: f64,
    /// False northing (meters)
    pub y0: f64,
    transform: ProjTransform,
}

impl PolarStereographic {
    /// Variant A: scale factor given at the pole.
    pub fn with_scale_factor(
        pole: Pole,
        lon0: f64,
        k0: f64,
        x0: f64,
        y0: f64,
        ellipsoid: Ellipsoid,
    ) -> TcrsResult<Self> {
        if !(k0.is_finite() && k0 > 0.0) {
            return Err(TcrsError::configuration(format!(
                "polar stereographic scale factor must be positive, got {}",
                k0
            )));
        }
        let definition = format!(
            "+proj=stere +lat_0={} +lon_0={} +k={} +x_0={} +y_0={} +units=m",
            pole.latitude(),
            lon0,
            k0,
            x0,
            y0
        );
        Self::build(pole, lon0, PolarScale::Factor(k0), x0, y0, &definition, ellipsoid)
    }

    /// Variant B: scale is true along the standard parallel `lat_ts`.
    pub fn with_standard_parallel(
        pole: Pole,
        lon0: f64,
        lat_ts: f64,
        x0: f64,
        y0: f64,
        ellipsoid: Ellipsoid,
    ) -> TcrsResult<Self> {
        let same_hemisphere = match pole {
            Pole::North => lat_ts > 0.0,
            Pole::South => lat_ts < 0.0,
        };
        if !(same_hemisphere && lat_ts.abs() <= 90.0) {
            return Err(TcrsError::configuration(format!(
                "standard parallel {} is not in the {:?} hemisphere",
                lat_ts, pole
            )));
        }
        let definition = format!(
            "+proj=stere +lat_0={} +lat_ts={} +lon_0={} +k=1 +x_0={} +y_0={} +units=m",
            pole.latitude(),
            lat_ts,
            lon0,
            x0,
            y0
        );
        Self::build(pole, lon0, PolarScale::StandardParallel(lat_ts), x0, y0, &definition, ellipsoid)
    }

    fn build(
        pole: Pole,
        lon0: f64,
        scale: PolarScale,
        x0: f64,
        y0: f64,
        definition: &str,
        ellipsoid: Ellipsoid,
    ) -> TcrsResult<Self> {
        if ![lon0, x0, y0].iter().all(|v| v.is_finite()) {
            return Err(TcrsError::configuration("polar stereographic parameters must be finite"));
        }
        Ok(Self {
            pole,
            lon0,
            scale,
            x0,
            y0,
            transform: ProjTransform::new(definition, ellipsoid)?,
        })
    }

    /// WGS 84 / EPSG Alaska Polar Stereographic (EPSG:5936).
    pub fn alaska() -> TcrsResult<Self> {
        Self::with_scale_factor(Pole::North, -150.0, 0.994, 2000000.0, 2000000.0, Ellipsoid::Wgs84)
    }

    /// WGS 84 / NSIDC Sea Ice Polar Stereographic North (EPSG:3413).
    pub fn nsidc_north() -> TcrsResult<Self> {
        Self::with_standard_parallel(Pole::North, -45.0, 70.0, 0.0, 0.0, Ellipsoid::Wgs84)
    }

    /// WGS 84 / Antarctic Polar Stereographic (EPSG:3031).
    pub fn antarctic() -> TcrsResult<Self> {
        Self::with_standard_parallel(Pole::South, 0.0, -71.0, 0.0, 0.0, Ellipsoid::Wgs84)
    }

    pub fn project(&self, latlng: LatLng) -> TcrsResult<Point> {
        self.transform.forward(latlng)
    }

    pub fn unproject(&self, point: Point) -> TcrsResult<LatLng> {
        self.transform.inverse(point)
    }
}
