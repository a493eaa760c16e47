//! Coordinate reference system transformations.
//!
//! Wraps `proj4rs` with the parameters of each map projection used by the
//! tiled CRS grids. The supported families form a closed set, so
//! [`Projection`] is an enum rather than a trait object.

pub mod geodesy;
pub mod lambert;
pub mod mercator;
pub mod polar;
pub mod transform;

pub use geodesy::{wrap_longitude, Ellipsoid, ProjTransform};
pub use lambert::LambertConformal;
pub use mercator::SphericalMercator;
pub use polar::{PolarScale, PolarStereographic, Pole};
pub use transform::Transformation;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tcrs_common::{LatLng, Point, TcrsError, TcrsResult};

/// Projection codes with a built-in definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionCode {
    /// Web Mercator (meters)
    #[serde(rename = "EPSG:3857")]
    Epsg3857,
    /// NAD83 / Canada Atlas Lambert
    #[serde(rename = "EPSG:3978")]
    Epsg3978,
    /// WGS 84 / EPSG Alaska Polar Stereographic
    #[serde(rename = "EPSG:5936")]
    Epsg5936,
    /// WGS 84 / NSIDC Sea Ice Polar Stereographic North
    #[serde(rename = "EPSG:3413")]
    Epsg3413,
    /// WGS 84 / Antarctic Polar Stereographic
    #[serde(rename = "EPSG:3031")]
    Epsg3031,
}

impl ProjectionCode {
    /// Parse a code such as "EPSG:3857" (case-insensitive).
    pub fn parse(s: &str) -> TcrsResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "EPSG:3857" | "EPSG:900913" => Ok(ProjectionCode::Epsg3857),
            "EPSG:3978" => Ok(ProjectionCode::Epsg3978),
            "EPSG:5936" => Ok(ProjectionCode::Epsg5936),
            "EPSG:3413" => Ok(ProjectionCode::Epsg3413),
            "EPSG:3031" => Ok(ProjectionCode::Epsg3031),
            _ => Err(TcrsError::UnknownProjection(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionCode::Epsg3857 => "EPSG:3857",
            ProjectionCode::Epsg3978 => "EPSG:3978",
            ProjectionCode::Epsg5936 => "EPSG:5936",
            ProjectionCode::Epsg3413 => "EPSG:3413",
            ProjectionCode::Epsg3031 => "EPSG:3031",
        }
    }
}

impl FromStr for ProjectionCode {
    type Err = TcrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProjectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A forward/inverse geodetic projection.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    SphericalMercator(SphericalMercator),
    LambertConformal(LambertConformal),
    PolarStereographic(PolarStereographic),
}

impl Projection {
    /// Build the projection registered under `code`.
    pub fn new(code: &str) -> TcrsResult<Self> {
        Self::from_code(ProjectionCode::parse(code)?)
    }

    pub fn from_code(code: ProjectionCode) -> TcrsResult<Self> {
        Ok(match code {
            ProjectionCode::Epsg3857 => Projection::SphericalMercator(SphericalMercator::new()?),
            ProjectionCode::Epsg3978 => Projection::LambertConformal(LambertConformal::canada_atlas()?),
            ProjectionCode::Epsg5936 => Projection::PolarStereographic(PolarStereographic::alaska()?),
            ProjectionCode::Epsg3413 => Projection::PolarStereographic(PolarStereographic::nsidc_north()?),
            ProjectionCode::Epsg3031 => Projection::PolarStereographic(PolarStereographic::antarctic()?),
        })
    }

    /// Geographic position to projected coordinates. Longitudes outside
    /// [-180, 180] are wrapped; non-finite input is a
    /// [`TcrsError::Transform`].
    pub fn project(&self, latlng: LatLng) -> TcrsResult<Point> {
        match self {
            Projection::SphericalMercator(p) => p.project(latlng),
            Projection::LambertConformal(p) => p.project(latlng),
            Projection::PolarStereographic(p) => p.project(latlng),
        }
    }

    /// Projected coordinates to geographic position.
    pub fn unproject(&self, point: Point) -> TcrsResult<LatLng> {
        match self {
            Projection::SphericalMercator(p) => p.unproject(point),
            Projection::LambertConformal(p) => p.unproject(point),
            Projection::PolarStereographic(p) => p.unproject(point),
        }
    }
}
