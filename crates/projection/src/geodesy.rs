//! Geographic <-> projected conversion backed by `proj4rs`.
//!
//! Every projection pairs a PROJ definition with a geographic CRS on the
//! same ellipsoid, so no datum shift is ever applied between the two.

use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use std::fmt;
use std::sync::Arc;
use tcrs_common::{LatLng, Point, TcrsError, TcrsResult};

/// Reference surface of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ellipsoid {
    Wgs84,
    /// GRS 1980, the NAD83 ellipsoid
    Grs80,
    /// Sphere with the WGS84 semi-major axis, as used by Web Mercator
    WebSphere,
}

impl Ellipsoid {
    /// PROJ parameters selecting this surface.
    pub fn proj_params(&self) -> &'static str {
        match self {
            Ellipsoid::Wgs84 => "+datum=WGS84",
            Ellipsoid::Grs80 => "+ellps=GRS80",
            Ellipsoid::WebSphere => "+a=6378137 +b=6378137",
        }
    }
}

/// Bring a longitude in degrees into [-180, 180].
///
/// Values already in range are returned untouched, so both 180 and -180
/// survive.
pub fn wrap_longitude(lng: f64) -> f64 {
    if lng.abs() <= 180.0 {
        lng
    } else {
        (lng + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// A forward/inverse transform between latitude/longitude and one projected
/// CRS.
#[derive(Clone)]
pub struct ProjTransform {
    definition: String,
    geographic: Arc<Proj>,
    projected: Arc<Proj>,
}

impl ProjTransform {
    /// Build from a PROJ definition string, e.g.
    /// `+proj=lcc +lat_1=49 +lat_2=77 ... +units=m`.
    pub fn new(definition: &str, ellipsoid: Ellipsoid) -> TcrsResult<Self> {
        let definition = format!("{} {} +no_defs", definition.trim(), ellipsoid.proj_params());
        let geographic_def = format!("+proj=longlat {} +no_defs", ellipsoid.proj_params());

        let projected = Proj::from_proj_string(&definition)
            .map_err(|e| TcrsError::configuration(format!("invalid projection '{}': {:?}", definition, e)))?;
        let geographic = Proj::from_proj_string(&geographic_def)
            .map_err(|e| TcrsError::configuration(format!("invalid projection '{}': {:?}", geographic_def, e)))?;

        Ok(Self {
            definition,
            geographic: Arc::new(geographic),
            projected: Arc::new(projected),
        })
    }

    /// The full PROJ definition of the projected CRS.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Geographic position (degrees) to projected coordinates.
    pub fn forward(&self, latlng: LatLng) -> TcrsResult<Point> {
        if !(latlng.lat.is_finite() && latlng.lng.is_finite()) {
            return Err(TcrsError::Transform(format!(
                "position ({}, {}) is not finite",
                latlng.lat, latlng.lng
            )));
        }
        // proj4rs takes geographic coordinates in radians
        let mut point = (
            wrap_longitude(latlng.lng).to_radians(),
            latlng.lat.to_radians(),
            0.0,
        );
        transform(&self.geographic, &self.projected, &mut point).map_err(|e| {
            TcrsError::Transform(format!(
                "cannot project ({}, {}): {:?}",
                latlng.lat, latlng.lng, e
            ))
        })?;
        Ok(Point::new(point.0, point.1))
    }

    /// Projected coordinates to geographic position (degrees).
    pub fn inverse(&self, p: Point) -> TcrsResult<LatLng> {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(TcrsError::Transform(format!(
                "point ({}, {}) is not finite",
                p.x, p.y
            )));
        }
        let mut point = (p.x, p.y, 0.0);
        transform(&self.projected, &self.geographic, &mut point)
            .map_err(|e| TcrsError::Transform(format!("cannot unproject ({}, {}): {:?}", p.x, p.y, e)))?;
        Ok(LatLng::new(point.1.to_degrees(), point.0.to_degrees()))
    }
}

impl fmt::Debug for ProjTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjTransform")
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ProjTransform {
    fn eq(&self, other: &Self) -> bool {
        self.definition == other.definition
    }
}
