//! Common types and utilities shared across the tiled CRS crates.

pub mod bbox;
pub mod bounds;
pub mod error;
pub mod point;
pub mod tile;

pub use bbox::BoundingBox;
pub use bounds::{Bounds, LatLngBounds};
pub use error::{TcrsError, TcrsResult};
pub use point::{LatLng, Point};
pub use tile::TileCoord;
