//! Registry of named tiled CRS definitions.
//!
//! The registry is plain configuration loaded once at startup and handed to
//! whatever builds [`TiledCrs`](crate::TiledCrs) instances. It can be the
//! built-in table or a YAML file:
//!
//! ```yaml
//! crs:
//!   - name: OSMTILE
//!     code: "EPSG:3857"
//!     tile_size: 256
//!     origin: [-20037508.342787, 20037508.342787]
//!     geographic_bounds: { south: -85.0511287798, west: -180, north: 85.0511287798, east: 180 }
//!     resolutions: [156543.0339, 78271.51695]
//! ```
//!
//! Native bounds are given either projected (`bounds: {min: [x, y], max: [x, y]}`)
//! or geographic (`geographic_bounds`), and the zoom table either as
//! `scales` (pixels per unit) or `resolutions` (units per pixel).

use crate::definition::{reciprocals, CrsDefinition, DEFAULT_TILE_SIZE};
use projection::{Projection, ProjectionCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tcrs_common::{Bounds, LatLng, Point, TcrsError, TcrsResult};
use tracing::{debug, info};

/// Named CRS definitions.
#[derive(Debug, Clone, Default)]
pub struct CrsRegistry {
    definitions: BTreeMap<String, CrsDefinition>,
}

impl CrsRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The OSMTILE, CBMTILE and APSTILE grids.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for def in [
            CrsDefinition::osmtile(),
            CrsDefinition::cbmtile(),
            CrsDefinition::apstile(),
        ] {
            registry.definitions.insert(def.name.clone(), def);
        }
        registry
    }

    /// Add a definition. Fails if it is invalid or the name is taken.
    pub fn insert(&mut self, definition: CrsDefinition) -> TcrsResult<()> {
        definition.validate()?;
        if self.definitions.contains_key(&definition.name) {
            return Err(TcrsError::configuration(format!(
                "duplicate CRS definition: {}",
                definition.name
            )));
        }
        debug!(name = %definition.name, code = %definition.code, "Registered tiled CRS");
        self.definitions.insert(definition.name.clone(), definition);
        Ok(())
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> TcrsResult<&CrsDefinition> {
        self.definitions
            .get(name)
            .ok_or_else(|| TcrsError::UnknownCrs(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Parse a registry from YAML text.
    pub fn from_yaml_str(yaml: &str) -> TcrsResult<Self> {
        let file: RegistryFile = serde_yaml::from_str(yaml)
            .map_err(|e| TcrsError::Config(format!("invalid CRS registry YAML: {}", e)))?;

        let mut registry = Self::new();
        for entry in file.crs {
            registry.insert(entry.into_definition()?)?;
        }
        if registry.is_empty() {
            return Err(TcrsError::configuration("CRS registry defines no CRS"));
        }
        Ok(registry)
    }

    /// Load a registry from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> TcrsResult<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .map_err(|e| TcrsError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let registry = Self::from_yaml_str(&yaml)?;
        info!(
            path = %path.display(),
            count = registry.len(),
            "Loaded CRS registry"
        );
        Ok(registry)
    }
}

// ============================================================================
// YAML file format
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    crs: Vec<CrsEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CrsEntry {
    name: String,
    code: String,
    #[serde(default = "default_tile_size")]
    tile_size: u32,
    origin: [f64; 2],
    #[serde(default)]
    bounds: Option<ProjectedBounds>,
    #[serde(default)]
    geographic_bounds: Option<GeographicBounds>,
    #[serde(default)]
    scales: Option<Vec<f64>>,
    #[serde(default)]
    resolutions: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectedBounds {
    min: [f64; 2],
    max: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GeographicBounds {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

impl CrsEntry {
    fn into_definition(self) -> TcrsResult<CrsDefinition> {
        let code = ProjectionCode::parse(&self.code)?;

        let bounds = match (self.bounds, self.geographic_bounds) {
            (Some(b), None) => Bounds::new(Point::new(b.min[0], b.min[1]), Point::new(b.max[0], b.max[1])),
            (None, Some(g)) => {
                let proj = Projection::from_code(code)?;
                Bounds::new(
                    proj.project(LatLng::new(g.south, g.west))?,
                    proj.project(LatLng::new(g.north, g.east))?,
                )
            }
            _ => {
                return Err(TcrsError::configuration(format!(
                    "{}: exactly one of 'bounds' or 'geographic_bounds' is required",
                    self.name
                )))
            }
        };

        let scales = match (self.scales, self.resolutions) {
            (Some(scales), None) => scales,
            (None, Some(resolutions)) => reciprocals(&resolutions),
            _ => {
                return Err(TcrsError::configuration(format!(
                    "{}: exactly one of 'scales' or 'resolutions' is required",
                    self.name
                )))
            }
        };

        Ok(CrsDefinition {
            name: self.name,
            code,
            bounds,
            tile_size: self.tile_size,
            origin: Point::new(self.origin[0], self.origin[1]),
            scales,
        })
    }
}
