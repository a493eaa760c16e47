//! Tiled coordinate reference systems.
//!
//! A [`TiledCrs`] binds a projection, a pixel transformation, a tile size and
//! a per-zoom scale table. It converts between geographic, projected and
//! pixel coordinates and enumerates the tiles that cover a query extent one
//! page at a time, nearest to the extent's centre first.
//!
//! [`ServiceBounds`] restricts a tiled CRS to the zoom range and coverage of
//! one service endpoint.
//!
//! ```
//! use std::sync::Arc;
//! use tiled_crs::{CrsRegistry, ServiceBounds, TiledCrs};
//!
//! let registry = CrsRegistry::builtin();
//! let crs = Arc::new(TiledCrs::from_registry(&registry, "OSMTILE", 100).unwrap());
//! let service = ServiceBounds::new(0, 18, crs.native_bounds(), crs.clone()).unwrap();
//! assert!(service.contains_zoom(15));
//! ```

pub mod config;
pub mod definition;
pub mod paging;
pub mod registry;
pub mod service_bounds;
pub mod tiled;

pub use config::{TcrsConfig, DEFAULT_PAGE_SIZE};
pub use definition::{CrsDefinition, DEFAULT_TILE_SIZE};
pub use paging::{next_start, TilePage};
pub use registry::CrsRegistry;
pub use service_bounds::{ServiceBounds, MAX_ZOOM_LEVELS};
pub use tiled::{compare_by_distance, TileLimit, TiledCrs};
