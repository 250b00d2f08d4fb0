use std::path::PathBuf;

use crate::grid::Point;

/// Errors that can occur when constructing a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("start {start} is outside the {height}x{width} grid")]
    StartOutOfBounds {
        start: Point,
        height: usize,
        width: usize,
    },

    #[error("end {end} is outside the {height}x{width} grid")]
    EndOutOfBounds {
        end: Point,
        height: usize,
        width: usize,
    },

    #[error("start column {start_x} must lie strictly left of end column {end_x}")]
    StartNotLeftOfEnd { start_x: usize, end_x: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_out_of_bounds_display() {
        let err = GridError::StartOutOfBounds {
            start: Point::new(7, 0),
            height: 3,
            width: 5,
        };
        assert_eq!(err.to_string(), "start (7, 0) is outside the 3x5 grid");
    }

    #[test]
    fn test_end_out_of_bounds_display() {
        let err = GridError::EndOutOfBounds {
            end: Point::new(4, 9),
            height: 3,
            width: 5,
        };
        assert_eq!(err.to_string(), "end (4, 9) is outside the 3x5 grid");
    }

    #[test]
    fn test_start_not_left_of_end_display() {
        let err = GridError::StartNotLeftOfEnd {
            start_x: 2,
            end_x: 1,
        };
        assert_eq!(
            err.to_string(),
            "start column 2 must lie strictly left of end column 1"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("grid: bad shape".to_string());
        assert_eq!(err.to_string(), "config validation error: grid: bad shape");
    }
}
