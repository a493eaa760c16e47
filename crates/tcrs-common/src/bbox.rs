//! Query bounding boxes as supplied by map clients.

use crate::bounds::{Bounds, LatLngBounds};
use crate::error::{TcrsError, TcrsResult};
use crate::point::{LatLng, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated query bounding box in west, south, east, north order.
///
/// Ordinates are geographic degrees or projected units depending on what
/// the caller is querying with; either way the box must have a non-zero
/// extent on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Create a bounding box, rejecting non-finite, inverted or zero-area
    /// boxes.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> TcrsResult<Self> {
        if ![west, south, east, north].iter().all(|v| v.is_finite()) {
            return Err(TcrsError::InvalidBbox(format!(
                "ordinates must be finite, got {},{},{},{}",
                west, south, east, north
            )));
        }
        if !(west < east) {
            return Err(TcrsError::InvalidBbox(format!(
                "west ({}) must be less than east ({})",
                west, east
            )));
        }
        if !(south < north) {
            return Err(TcrsError::InvalidBbox(format!(
                "south ({}) must be less than north ({})",
                south, north
            )));
        }
        Ok(Self {
            west,
            south,
            east,
            north,
        })
    }

    /// Parse a BBOX parameter string: "west,south,east,north"
    pub fn from_query_string(s: &str) -> TcrsResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(TcrsError::InvalidBbox(format!(
                "expected 4 ordinates 'west,south,east,north', got {} in '{}'",
                parts.len(),
                s
            )));
        }

        let mut ords = [0.0f64; 4];
        for (ord, part) in ords.iter_mut().zip(&parts) {
            *ord = part
                .parse()
                .map_err(|_| TcrsError::InvalidBbox(format!("invalid number '{}'", part)))?;
        }

        Self::new(ords[0], ords[1], ords[2], ords[3])
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Interpret the box as longitude/latitude degrees.
    pub fn to_lat_lng_bounds(&self) -> LatLngBounds {
        LatLngBounds::new(
            LatLng::new(self.south, self.west),
            LatLng::new(self.north, self.east),
        )
    }

    /// Interpret the box as planar (projected or pixel) coordinates.
    pub fn to_bounds(&self) -> Bounds {
        Bounds::new(
            Point::new(self.west, self.south),
            Point::new(self.east, self.north),
        )
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_bbox() {
        let bbox = BoundingBox::from_query_string("-75.7205,45.3907,-75.6930,45.4052").unwrap();
        assert_eq!(bbox.west, -75.7205);
        assert_eq!(bbox.south, 45.3907);
        assert_eq!(bbox.east, -75.6930);
        assert_eq!(bbox.north, 45.4052);
    }

    #[test]
    fn test_display_round_trips() {
        let bbox = BoundingBox::new(-1.5, 2.0, 3.25, 4.0).unwrap();
        let parsed = BoundingBox::from_query_string(&bbox.to_string()).unwrap();
        assert_eq!(bbox, parsed);
    }
}
