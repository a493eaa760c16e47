//! Runtime configuration for tiled CRS instances.

use crate::registry::CrsRegistry;
use crate::service_bounds::MAX_ZOOM_LEVELS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tcrs_common::{TcrsError, TcrsResult};

/// Default number of tiles per enumeration page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Configuration shared by every tiled CRS built in a process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcrsConfig {
    /// Maximum tiles returned per enumeration call.
    pub page_size: usize,

    /// Maximum zoom levels a service may span.
    pub max_zoom_levels: u32,

    /// YAML registry to load instead of the built-in definitions.
    pub registry_path: Option<PathBuf>,
}

impl Default for TcrsConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_zoom_levels: MAX_ZOOM_LEVELS,
            registry_path: None,
        }
    }
}

impl TcrsConfig {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("TCRS_PAGE_SIZE") {
            if let Ok(size) = val.parse() {
                config.page_size = size;
            }
        }

        if let Ok(val) = std::env::var("TCRS_MAX_ZOOM_LEVELS") {
            if let Ok(levels) = val.parse() {
                config.max_zoom_levels = levels;
            }
        }

        if let Ok(val) = std::env::var("TCRS_REGISTRY") {
            if !val.trim().is_empty() {
                config.registry_path = Some(PathBuf::from(val));
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> TcrsResult<()> {
        if self.page_size == 0 {
            return Err(TcrsError::configuration("page_size must be > 0"));
        }

        if self.max_zoom_levels == 0 {
            return Err(TcrsError::configuration("max_zoom_levels must be > 0"));
        }

        Ok(())
    }

    /// The registry from `registry_path`, or the built-in one when unset.
    pub fn load_registry(&self) -> TcrsResult<CrsRegistry> {
        match &self.registry_path {
            Some(path) => CrsRegistry::from_yaml_file(path),
            None => Ok(CrsRegistry::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TcrsConfig::default();
        assert_eq!(config.page_size, 100);
        assert_eq!(config.max_zoom_levels, 26);
        assert!(config.registry_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = TcrsConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().is_configuration());

        let config = TcrsConfig {
            max_zoom_levels: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builtin_registry_when_no_path() {
        let registry = TcrsConfig::default().load_registry().unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_missing_registry_file() {
        let config = TcrsConfig {
            registry_path: Some(PathBuf::from("/nonexistent/tcrs.yaml")),
            ..Default::default()
        };
        assert!(matches!(config.load_registry(), Err(TcrsError::Config(_))));
    }
}
