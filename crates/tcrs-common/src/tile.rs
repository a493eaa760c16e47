//! Tile coordinates within a tiled CRS grid.

use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One tile in a zoom level's grid, origin at the grid's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    /// Column (x)
    pub col: u32,
    /// Row (y)
    pub row: u32,
    /// Zoom level (index into the scale table)
    pub zoom: u32,
}

impl TileCoord {
    pub fn new(col: u32, row: u32, zoom: u32) -> Self {
        Self { col, row, zoom }
    }

    /// Geometric centre of the tile in tile units.
    pub fn centre(&self) -> Point {
        Point::new(self.col as f64 + 0.5, self.row as f64 + 0.5)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.col, self.row)
    }
}
