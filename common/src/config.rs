use std::env;

use dotenvy;
use glam::{Vec2, vec2};

use crate::{
    constants::{DEFAULT_COLUMNS, DEFAULT_ROWS},
    error::ConfigError,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl GameConfig {
    pub fn new(rows: usize, columns: usize, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            rows,
            columns,
            viewport_width,
            viewport_height,
        }
    }

    /// Grid size from `MAZE_ROWS` and `MAZE_COLUMNS` (read from the process
    /// environment or a `.env` file), falling back to the defaults. The
    /// viewport is whatever the window currently measures.
    pub fn from_env(viewport_width: f32, viewport_height: f32) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let rows = read_var("MAZE_ROWS")?.unwrap_or(DEFAULT_ROWS);
        let columns = read_var("MAZE_COLUMNS")?.unwrap_or(DEFAULT_COLUMNS);
        let config = Self::new(rows, columns, viewport_width, viewport_height);
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }

        let has_area = |side: f32| side.is_finite() && side > 0.0;
        if !has_area(self.viewport_width) || !has_area(self.viewport_height) {
            return Err(ConfigError::EmptyViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }

        Ok(())
    }

    pub fn viewport(&self) -> Vec2 {
        vec2(self.viewport_width, self.viewport_height)
    }
}

/// Optional seed for a reproducible sequence of mazes.
pub fn seed_from_env() -> Result<Option<u64>, ConfigError> {
    dotenvy::dotenv().ok();
    read_var("MAZE_SEED")
}

fn read_var<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => parse_value(key, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Unparsable {
        key,
        value: value.to_string(),
    })
}
