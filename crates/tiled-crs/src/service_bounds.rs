//! The zoom range and coverage one deployed endpoint answers for.

use crate::tiled::TiledCrs;
use std::sync::Arc;
use tcrs_common::{Bounds, TcrsError, TcrsResult};
use tracing::debug;

/// Maximum number of zoom levels a service may span.
pub const MAX_ZOOM_LEVELS: u32 = 26;

/// Validated zoom range plus the coverage's pixel bounds at every zoom in it.
#[derive(Debug, Clone)]
pub struct ServiceBounds {
    min_zoom: u32,
    max_zoom: u32,
    tiled_crs: Arc<TiledCrs>,
    /// Indexed by `zoom - min_zoom`
    pixel_bounds: Vec<Bounds>,
}

impl ServiceBounds {
    /// Create service bounds allowing up to [`MAX_ZOOM_LEVELS`] levels.
    ///
    /// `coverage` is in the CRS's projected, unscaled units.
    pub fn new(min_zoom: i32, max_zoom: i32, coverage: Bounds, tiled_crs: Arc<TiledCrs>) -> TcrsResult<Self> {
        Self::with_level_limit(min_zoom, max_zoom, coverage, tiled_crs, MAX_ZOOM_LEVELS)
    }

    /// Create service bounds with an explicit cap on the number of levels.
    pub fn with_level_limit(
        min_zoom: i32,
        max_zoom: i32,
        coverage: Bounds,
        tiled_crs: Arc<TiledCrs>,
        max_levels: u32,
    ) -> TcrsResult<Self> {
        if min_zoom < 0 {
            return Err(TcrsError::configuration(format!(
                "minimum zoom must be >= 0, got {}",
                min_zoom
            )));
        }
        if max_zoom < min_zoom {
            return Err(TcrsError::configuration(format!(
                "maximum zoom {} is below minimum zoom {}",
                max_zoom, min_zoom
            )));
        }
        let levels = i64::from(max_zoom) - i64::from(min_zoom) + 1;
        if levels > i64::from(max_levels) {
            return Err(TcrsError::configuration(format!(
                "zoom range {}..={} spans {} levels, at most {} are supported",
                min_zoom, max_zoom, levels, max_levels
            )));
        }
        if max_zoom as u32 > tiled_crs.max_zoom() {
            return Err(TcrsError::configuration(format!(
                "maximum zoom {} exceeds the highest zoom {} of {}",
                max_zoom,
                tiled_crs.max_zoom(),
                tiled_crs.name()
            )));
        }

        let (min_zoom, max_zoom) = (min_zoom as u32, max_zoom as u32);
        let pixel_bounds = (min_zoom..=max_zoom)
            .map(|zoom| tiled_crs.pixel_bounds(&coverage, zoom))
            .collect::<TcrsResult<Vec<_>>>()?;

        debug!(
            crs = tiled_crs.name(),
            min_zoom,
            max_zoom,
            "Initialized service bounds"
        );

        Ok(Self {
            min_zoom,
            max_zoom,
            tiled_crs,
            pixel_bounds,
        })
    }

    pub fn min_zoom(&self) -> u32 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> u32 {
        self.max_zoom
    }

    pub fn tiled_crs(&self) -> &Arc<TiledCrs> {
        &self.tiled_crs
    }

    pub fn contains_zoom(&self, zoom: u32) -> bool {
        (self.min_zoom..=self.max_zoom).contains(&zoom)
    }

    /// Pixel bounds of the coverage at `zoom`.
    pub fn pixel_bounds(&self, zoom: u32) -> TcrsResult<Bounds> {
        if !self.contains_zoom(zoom) {
            return Err(TcrsError::zoom_out_of_range(zoom, self.min_zoom, self.max_zoom));
        }
        Ok(self.pixel_bounds[(zoom - self.min_zoom) as usize])
    }

    /// Whether a query at `zoom` covering `other` (pixel units) touches the
    /// coverage. False when either is absent or the zoom is out of range.
    pub fn intersects(&self, zoom: Option<u32>, other: Option<&Bounds>) -> bool {
        match (zoom, other) {
            (Some(zoom), Some(other)) => self
                .pixel_bounds(zoom)
                .map(|b| b.intersects(other))
                .unwrap_or(false),
            _ => false,
        }
    }
}
