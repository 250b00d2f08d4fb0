use std::path::Path;

use crate::error::{ConfigError, GridError};
use crate::grid::{Grid, Point};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub walk: WalkConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            grid: GridConfig::default(),
            walk: WalkConfig::default(),
        }
    }
}

/// Grid shape and endpoints.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub height: usize,
    pub width: usize,
    pub start_x: usize,
    pub start_y: usize,
    pub end_x: usize,
    pub end_y: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            height: 5,
            width: 10,
            start_x: 0,
            start_y: 2,
            end_x: 9,
            end_y: 2,
        }
    }
}

impl GridConfig {
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    pub fn end(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }

    /// Construct the configured grid, validating the endpoints.
    pub fn build_grid(&self) -> Result<Grid, GridError> {
        Grid::new(self.height, self.width, self.start(), self.end())
    }
}

/// Random walk settings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Fixed RNG seed. Leave unset for a fresh seed per run.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid
            .build_grid()
            .map_err(|e| ConfigError::Validation(format!("grid: {e}")))?;
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
