//! Static tiled CRS definitions.
//!
//! A definition names a projection, the projected extent of the grid, the
//! pixel origin and the scale table. `scales[zoom]` is the reciprocal of the
//! ground resolution at that zoom, i.e. pixels per projected unit.

use projection::ProjectionCode;
use tcrs_common::{Bounds, Point, TcrsError, TcrsResult};

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// One entry of the CRS registry.
#[derive(Debug, Clone, PartialEq)]
pub struct CrsDefinition {
    /// Registry name, e.g. "OSMTILE"
    pub name: String,
    /// Projection of the grid
    pub code: ProjectionCode,
    /// Extent of the grid in projected (unscaled) units
    pub bounds: Bounds,
    /// Tile edge length in pixels
    pub tile_size: u32,
    /// Projected coordinates of pixel (0, 0)
    pub origin: Point,
    /// Pixels per projected unit, indexed by zoom
    pub scales: Vec<f64>,
}

impl CrsDefinition {
    /// Check the definition is usable to build a tile grid.
    pub fn validate(&self) -> TcrsResult<()> {
        if self.name.trim().is_empty() {
            return Err(TcrsError::configuration("CRS name must not be empty"));
        }
        if self.tile_size == 0 {
            return Err(TcrsError::configuration(format!(
                "{}: tile_size must be > 0",
                self.name
            )));
        }
        if self.scales.is_empty() {
            return Err(TcrsError::configuration(format!(
                "{}: scale table must not be empty",
                self.name
            )));
        }
        if let Some((zoom, scale)) = self
            .scales
            .iter()
            .enumerate()
            .find(|(_, s)| !(s.is_finite() && **s > 0.0))
        {
            return Err(TcrsError::configuration(format!(
                "{}: scale at zoom {} must be a positive number, got {}",
                self.name, zoom, scale
            )));
        }
        let corners = [self.bounds.min(), self.bounds.max(), self.origin];
        if corners.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(TcrsError::configuration(format!(
                "{}: bounds and origin must be finite",
                self.name
            )));
        }
        Ok(())
    }

    /// Number of zoom levels in the scale table.
    pub fn zoom_levels(&self) -> usize {
        self.scales.len()
    }

    /// Spherical Mercator grid used by OpenStreetMap and most web maps.
    pub fn osmtile() -> Self {
        // the Web Mercator square, ±180 by ±85.0511287798 degrees
        let bounds = Bounds::new(
            Point::new(-20037508.342789244, -20037508.34278071),
            Point::new(20037508.342789244, 20037508.34278071),
        );

        // "scale" is the reciprocal of "resolution", per Proj4Leaflet.js
        let resolutions = [
            156543.0339,
            78271.51695,
            39135.758475,
            19567.8792375,
            9783.93961875,
            4891.969809375,
            2445.9849046875,
            1222.9924523438,
            611.49622617188,
            305.74811308594,
            152.87405654297,
            76.437028271484,
            38.218514135742,
            19.109257067871,
            9.5546285339355,
            4.7773142669678,
            2.3886571334839,
            1.1943285667419,
            0.59716428337097,
        ];

        Self {
            name: "OSMTILE".to_string(),
            code: ProjectionCode::Epsg3857,
            bounds,
            tile_size: DEFAULT_TILE_SIZE,
            origin: Point::new(-20037508.342787, 20037508.342787),
            scales: reciprocals(&resolutions),
        }
    }

    /// Canada Base Map grid, Lambert Conformal Conic.
    pub fn cbmtile() -> Self {
        let resolutions = [
            38364.660062653464,
            22489.62831258996,
            13229.193125052918,
            7937.5158750317505,
            4630.2175937685215,
            2645.8386250105837,
            1587.5031750063501,
            926.0435187537042,
            529.1677250021168,
            317.50063500127004,
            185.20870375074085,
            111.12522225044451,
            66.1459656252646,
            38.36466006265346,
            22.48962831258996,
            13.229193125052918,
            7.9375158750317505,
            4.6302175937685215,
        ];

        Self {
            name: "CBMTILE".to_string(),
            code: ProjectionCode::Epsg3978,
            bounds: Bounds::new(
                Point::new(-7786476.885838887, -5153821.09213678),
                Point::new(7148753.233541353, 7928343.534071138),
            ),
            tile_size: DEFAULT_TILE_SIZE,
            origin: Point::new(-34655800.0, 39310000.0),
            scales: reciprocals(&resolutions),
        }
    }

    /// Arctic Polar Stereographic grid, origin and resolutions as published
    /// by the Arctic_Polar_Ocean_Base map service.
    pub fn apstile() -> Self {
        let resolutions = [
            238810.813354,
            119405.406677,
            59702.7033384999,
            29851.3516692501,
            14925.675834625,
            7462.83791731252,
            3731.41895865639,
            1865.70947932806,
            932.854739664032,
            466.427369832148,
            233.213684916074,
            116.606842458037,
            58.3034212288862,
            29.1517106145754,
            14.5758553072877,
            7.28792765351156,
            3.64396382688807,
            1.82198191331174,
            0.910990956788164,
            0.45549547826179,
        ];

        Self {
            name: "APSTILE".to_string(),
            code: ProjectionCode::Epsg5936,
            bounds: Bounds::new(
                Point::new(-28567784.109254867, -28567784.109254755),
                Point::new(32567784.109255023, 32567784.10925506),
            ),
            tile_size: DEFAULT_TILE_SIZE,
            origin: Point::new(-28567784.109255, 32567784.109255),
            scales: reciprocals(&resolutions),
        }
    }
}

/// Convert resolutions (projected units per pixel) to scales.
pub fn reciprocals(resolutions: &[f64]) -> Vec<f64> {
    resolutions.iter().map(|r| 1.0 / r).collect()
}
