//! The tiled CRS engine: projection helpers, tile counting and the
//! paginated, distance-ordered tile enumeration.

use crate::definition::CrsDefinition;
use crate::paging::{next_start, TilePage};
use crate::registry::CrsRegistry;
use projection::{Projection, ProjectionCode, Transformation};
use std::cmp::Ordering;
use tcrs_common::{Bounds, LatLng, LatLngBounds, Point, TcrsError, TcrsResult, TileCoord};
use tracing::{debug, warn};

/// Largest tile column and row that hold data at one zoom level.
///
/// The minimum is always (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLimit {
    pub max_col: i64,
    pub max_row: i64,
}

/// Tile-index rectangle covered by some pixel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TileSpan {
    min_col: i64,
    min_row: i64,
    max_col: i64,
    max_row: i64,
}

impl TileSpan {
    /// `None` if the span is empty or too large to count.
    fn width(&self) -> Option<u64> {
        let w = self.max_col.checked_sub(self.min_col)?.checked_add(1)?;
        u64::try_from(w).ok().filter(|w| *w > 0)
    }

    fn height(&self) -> Option<u64> {
        let h = self.max_row.checked_sub(self.min_row)?.checked_add(1)?;
        u64::try_from(h).ok().filter(|h| *h > 0)
    }

    fn count(&self) -> Option<u64> {
        self.width()?.checked_mul(self.height()?)
    }
}

/// A projection, pixel transform, tile size and scale table bound under one
/// name.
///
/// Everything derived from the definition is computed once in the
/// constructor; afterwards every method takes `&self`, so one instance can
/// be shared (e.g. behind an `Arc`) by any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct TiledCrs {
    name: String,
    code: ProjectionCode,
    projection: Projection,
    transformation: Transformation,
    tile_size: u32,
    scales: Vec<f64>,
    /// Native extent in projected (unscaled) units
    bounds: Bounds,
    /// Indexed by zoom
    tile_limits: Vec<TileLimit>,
    page_size: usize,
}

impl TiledCrs {
    /// Build a tiled CRS from a definition.
    ///
    /// `page_size` caps the number of tiles [`get_tiles_for_extent`](Self::get_tiles_for_extent)
    /// returns per call.
    pub fn new(definition: &CrsDefinition, page_size: usize) -> TcrsResult<Self> {
        definition.validate()?;
        if page_size == 0 {
            return Err(TcrsError::configuration("page size must be > 0"));
        }

        let transformation = Transformation::from_origin(definition.origin)?;
        let tile_size = definition.tile_size as f64;

        let tile_limits = definition
            .scales
            .iter()
            .map(|&scale| {
                let pixel_bounds = Bounds::new(
                    transformation.transform(definition.bounds.min(), scale),
                    transformation.transform(definition.bounds.max(), scale),
                );
                let max = pixel_bounds.max().divide_by(tile_size).floor();
                TileLimit {
                    max_col: clamp_index(max.x),
                    max_row: clamp_index(max.y),
                }
            })
            .collect::<Vec<_>>();

        debug!(
            name = %definition.name,
            code = %definition.code,
            zoom_levels = tile_limits.len(),
            tile_size = definition.tile_size,
            page_size,
            "Initialized tiled CRS"
        );

        Ok(Self {
            name: definition.name.clone(),
            code: definition.code,
            projection: Projection::from_code(definition.code)?,
            transformation,
            tile_size: definition.tile_size,
            scales: definition.scales.clone(),
            bounds: definition.bounds,
            tile_limits,
            page_size,
        })
    }

    /// Look up `name` in `registry` and build it.
    pub fn from_registry(registry: &CrsRegistry, name: &str, page_size: usize) -> TcrsResult<Self> {
        Self::new(registry.get(name)?, page_size)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> ProjectionCode {
        self.code
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Native extent in projected units.
    pub fn native_bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of entries in the scale table.
    pub fn zoom_levels(&self) -> usize {
        self.scales.len()
    }

    /// Highest zoom with a scale.
    pub fn max_zoom(&self) -> u32 {
        (self.scales.len() - 1) as u32
    }

    /// Pixels per projected unit at `zoom`.
    pub fn scale(&self, zoom: u32) -> TcrsResult<f64> {
        self.scales
            .get(zoom as usize)
            .copied()
            .ok_or_else(|| TcrsError::zoom_out_of_range(zoom, 0, self.max_zoom()))
    }

    /// Maximum tile index that holds data at `zoom`.
    pub fn max_tile_index(&self, zoom: u32) -> Option<TileLimit> {
        self.tile_limits.get(zoom as usize).copied()
    }

    // ------------------------------------------------------------------------
    // Projection helpers
    // ------------------------------------------------------------------------

    pub fn project(&self, latlng: LatLng) -> TcrsResult<Point> {
        self.projection.project(latlng)
    }

    pub fn unproject(&self, point: Point) -> TcrsResult<LatLng> {
        self.projection.unproject(point)
    }

    /// Geographic position to pixel coordinates at `zoom`.
    pub fn lat_lng_to_point(&self, latlng: LatLng, zoom: u32) -> TcrsResult<Point> {
        let scale = self.scale(zoom)?;
        Ok(self.transformation.transform(self.projection.project(latlng)?, scale))
    }

    /// Pixel coordinates at `zoom` to geographic position.
    pub fn point_to_lat_lng(&self, point: Point, zoom: u32) -> TcrsResult<LatLng> {
        let scale = self.scale(zoom)?;
        self.projection.unproject(self.transformation.untransform(point, scale))
    }

    /// Projected (unscaled) bounds to pixel bounds at `zoom`, each corner
    /// rounded to the nearest pixel.
    pub fn pixel_bounds(&self, bounds: &Bounds, zoom: u32) -> TcrsResult<Bounds> {
        let scale = self.scale(zoom)?;
        let min = self.transformation.transform(bounds.min(), scale).round();
        let max = self.transformation.transform(bounds.max(), scale).round();
        Ok(Bounds::new(min, max))
    }

    /// Geographic bounds to (unrounded) pixel bounds at `zoom`.
    pub fn pixel_bounds_for_lat_lng(&self, bounds: &LatLngBounds, zoom: u32) -> TcrsResult<Bounds> {
        Ok(Bounds::new(
            self.lat_lng_to_point(bounds.south_west, zoom)?,
            self.lat_lng_to_point(bounds.north_east, zoom)?,
        ))
    }

    // ------------------------------------------------------------------------
    // Tile counting and enumeration
    // ------------------------------------------------------------------------

    /// `None` when the bounds are not finite.
    fn tile_span(&self, pixel_bounds: &Bounds) -> Option<TileSpan> {
        let tile_size = self.tile_size as f64;
        let min = pixel_bounds.min().divide_by(tile_size).floor();
        let max = pixel_bounds.max().divide_by(tile_size).floor();
        if [min.x, min.y, max.x, max.y].iter().any(|v| !v.is_finite()) {
            return None;
        }
        Some(TileSpan {
            min_col: clamp_index(min.x),
            min_row: clamp_index(min.y),
            max_col: clamp_index(max.x),
            max_row: clamp_index(max.y),
        })
    }

    /// Width in tiles of bounds already expressed in tile units.
    pub fn tile_width(&self, zoom: Option<u32>, tile_bounds: Option<&Bounds>) -> u64 {
        match (zoom, tile_bounds) {
            (Some(_), Some(b)) => {
                let w = b.max().x.floor() - b.min().x.floor() + 1.0;
                if w.is_finite() && w > 0.0 {
                    w as u64
                } else {
                    0
                }
            }
            _ => 0,
        }
    }

    /// Number of candidate tiles covered by `pixel_bounds`, including any
    /// that fall outside the grid. Zero when no zoom or bounds is given.
    pub fn tile_count(&self, zoom: Option<u32>, pixel_bounds: Option<&Bounds>) -> u64 {
        match (zoom, pixel_bounds) {
            (Some(_), Some(b)) => self.tile_span(b).and_then(|span| span.count()).unwrap_or(0),
            _ => 0,
        }
    }

    /// One page of the tiles covering `pixel_bounds` at `zoom`.
    ///
    /// The candidate tile indices are read in row-major order as a single
    /// sequence and `start` is an offset into it. The page covers positions
    /// `[start, start + page_size)` of that sequence and keeps only the
    /// tiles inside the grid, so consecutive pages never overlap and a page
    /// may hold fewer than `page_size` tiles. The page is then ordered by
    /// distance from the centre of `pixel_bounds`; ties are broken by row,
    /// then column.
    pub fn get_tiles_for_extent(&self, pixel_bounds: &Bounds, zoom: u32, start: u64) -> Vec<TileCoord> {
        let Some(limit) = self.max_tile_index(zoom) else {
            warn!(
                crs = %self.name,
                zoom,
                max_zoom = self.max_zoom(),
                "Zoom outside scale table; returning no tiles"
            );
            return Vec::new();
        };

        let Some(span) = self.tile_span(pixel_bounds) else {
            return Vec::new();
        };
        let (Some(width), Some(total)) = (span.width(), span.count()) else {
            return Vec::new();
        };
        if start >= total {
            return Vec::new();
        }

        let end = start.saturating_add(self.page_size as u64).min(total);
        let mut tiles = Vec::with_capacity((end - start) as usize);

        // Walk the window one row segment at a time
        let mut pos = start;
        while pos < end {
            // pos / width < height and pos % width < width, both fit in i64
            let row = span.min_row + (pos / width) as i64;
            let col_offset = pos % width;
            let row_end = (pos - col_offset + width).min(end);

            if row >= 0 && row <= limit.max_row {
                let first = span.min_col + col_offset as i64;
                let last = first + (row_end - pos - 1) as i64;
                for col in first.max(0)..=last.min(limit.max_col - 1) {
                    tiles.push(TileCoord::new(col as u32, row as u32, zoom));
                }
            }
            pos = row_end;
        }

        // the centre of the extent in decimal tiles, not truncated
        let centre = pixel_bounds.centre().divide_by(self.tile_size as f64);
        tiles.sort_by(|a, b| compare_by_distance(&centre, a, b));

        debug!(
            crs = %self.name,
            zoom,
            start,
            end,
            total,
            min_col = span.min_col,
            min_row = span.min_row,
            max_col = span.max_col,
            max_row = span.max_row,
            returned = tiles.len(),
            "Enumerated tiles for extent"
        );

        tiles
    }

    /// Geographic overload of [`get_tiles_for_extent`](Self::get_tiles_for_extent).
    pub fn tiles_for_lat_lng_extent(&self, extent: &LatLngBounds, zoom: u32, start: u64) -> Vec<TileCoord> {
        match self.pixel_bounds_for_lat_lng(extent, zoom) {
            Ok(pixel_bounds) => self.get_tiles_for_extent(&pixel_bounds, zoom, start),
            Err(e) => {
                warn!(crs = %self.name, zoom, error = %e, "Cannot convert extent to pixels");
                Vec::new()
            }
        }
    }

    /// A page of tiles together with the total candidate count and the
    /// offset of the following page.
    pub fn page(&self, pixel_bounds: &Bounds, zoom: u32, start: u64) -> TilePage {
        let total = self.tile_count(Some(zoom), Some(pixel_bounds));
        TilePage {
            tiles: self.get_tiles_for_extent(pixel_bounds, zoom, start),
            total,
            start,
            next: next_start(start, self.page_size, total),
        }
    }
}

/// Rank two tiles by distance of their centres from `centre` (tile units).
pub fn compare_by_distance(centre: &Point, a: &TileCoord, b: &TileCoord) -> Ordering {
    let da = centre.distance_to(&a.centre());
    let db = centre.distance_to(&b.centre());
    da.total_cmp(&db)
        .then_with(|| a.row.cmp(&b.row))
        .then_with(|| a.col.cmp(&b.col))
}

/// Tile indices stay within `u32` so they fit a [`TileCoord`]; anything
/// beyond is outside every grid anyway.
fn clamp_index(v: f64) -> i64 {
    const LIMIT: f64 = u32::MAX as f64;
    v.clamp(-LIMIT, LIMIT) as i64
}
