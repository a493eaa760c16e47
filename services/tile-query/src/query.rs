//! Answering one tile query against a configured service.

use clap::ValueEnum;
use serde::Serialize;
use std::sync::Arc;
use tcrs_common::{BoundingBox, Bounds, TcrsError, TcrsResult, TileCoord};
use tiled_crs::{CrsRegistry, ServiceBounds, TcrsConfig, TiledCrs};
use tracing::{debug, info};

/// Units the query bounding box is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BboxUnits {
    /// west,south,east,north in decimal degrees
    Latlng,
    /// Pixel coordinates at the query zoom
    Pixel,
    /// Projected CRS units
    Projected,
}

/// A validated request.
#[derive(Debug, Clone)]
pub struct TileQuery {
    pub zoom: u32,
    pub bbox: BoundingBox,
    pub units: BboxUnits,
    pub start: u64,
}

/// What the query prints.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub crs: String,
    pub code: String,
    pub zoom: u32,
    pub intersects: bool,
    pub total: u64,
    pub start: u64,
    pub next: Option<u64>,
    pub tiles: Vec<TileCoord>,
}

/// Summary of one registry entry, printed by `--list`.
#[derive(Debug, Clone, Serialize)]
pub struct CrsSummary {
    pub name: String,
    pub code: String,
    pub tile_size: u32,
    pub zoom_levels: usize,
}

/// Build the tiled CRS and service bounds for `crs_name`.
///
/// `coverage` is geographic; without it the service covers the CRS's native
/// bounds. `max_zoom` defaults to the highest zoom in the scale table.
pub fn build_service(
    registry: &CrsRegistry,
    config: &TcrsConfig,
    crs_name: &str,
    min_zoom: i32,
    max_zoom: Option<i32>,
    coverage: Option<&BoundingBox>,
) -> TcrsResult<ServiceBounds> {
    let crs = Arc::new(TiledCrs::from_registry(registry, crs_name, config.page_size)?);
    let max_zoom = max_zoom.unwrap_or(crs.max_zoom() as i32);

    let coverage = match coverage {
        Some(bbox) => {
            let ll = bbox.to_lat_lng_bounds();
            Bounds::new(crs.project(ll.south_west)?, crs.project(ll.north_east)?)
        }
        None => crs.native_bounds(),
    };

    ServiceBounds::with_level_limit(min_zoom, max_zoom, coverage, crs, config.max_zoom_levels)
}

/// Run `query` against `service`.
///
/// A zoom outside the service's range is an error; a query that misses the
/// coverage returns no tiles.
pub fn run_query(service: &ServiceBounds, query: &TileQuery) -> TcrsResult<QueryResponse> {
    let crs = service.tiled_crs();
    if !service.contains_zoom(query.zoom) {
        return Err(TcrsError::zoom_out_of_range(
            query.zoom,
            service.min_zoom(),
            service.max_zoom(),
        ));
    }

    let pixel_bounds = match query.units {
        BboxUnits::Latlng => crs.pixel_bounds_for_lat_lng(&query.bbox.to_lat_lng_bounds(), query.zoom)?,
        BboxUnits::Projected => crs.pixel_bounds(&query.bbox.to_bounds(), query.zoom)?,
        BboxUnits::Pixel => query.bbox.to_bounds(),
    };
    debug!(zoom = query.zoom, ?pixel_bounds, "Resolved query bounds");

    let intersects = service.intersects(Some(query.zoom), Some(&pixel_bounds));
    let page = if intersects {
        crs.page(&pixel_bounds, query.zoom, query.start)
    } else {
        info!(crs = crs.name(), zoom = query.zoom, "Query does not intersect service coverage");
        tiled_crs::TilePage::empty(query.start)
    };

    Ok(QueryResponse {
        crs: crs.name().to_string(),
        code: crs.code().to_string(),
        zoom: query.zoom,
        intersects,
        total: page.total,
        start: page.start,
        next: page.next,
        tiles: page.tiles,
    })
}

/// Describe every entry in `registry`.
pub fn list_registry(registry: &CrsRegistry) -> TcrsResult<Vec<CrsSummary>> {
    registry
        .names()
        .map(|name| {
            let def = registry.get(name)?;
            Ok(CrsSummary {
                name: def.name.clone(),
                code: def.code.to_string(),
                tile_size: def.tile_size,
                zoom_levels: def.zoom_levels(),
            })
        })
        .collect()
}
