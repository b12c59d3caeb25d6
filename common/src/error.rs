use std::fmt;

use crate::{maze::Cell, scene::Role};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroRows,
    ZeroColumns,
    EmptyViewport {
        width: f32,
        height: f32,
    },
    StartOutOfBounds {
        start: Cell,
        rows: usize,
        columns: usize,
    },
    Unparsable {
        key: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroRows => write!(f, "maze must have at least one row"),
            ConfigError::ZeroColumns => write!(f, "maze must have at least one column"),
            ConfigError::EmptyViewport { width, height } => {
                write!(f, "viewport {}x{} has no area", width, height)
            }
            ConfigError::StartOutOfBounds {
                start,
                rows,
                columns,
            } => write!(
                f,
                "start cell ({}, {}) lies outside a {}x{} grid",
                start.row, start.column, rows, columns
            ),
            ConfigError::Unparsable { key, value } => {
                write!(f, "could not parse {}={:?}", key, value)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    InvalidConfiguration(ConfigError),
    EngineUnavailable(String),
    MissingObstacle(Role),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfiguration(e) => write!(f, "invalid configuration: {}", e),
            GameError::EngineUnavailable(reason) => {
                write!(f, "physics engine unavailable: {}", reason)
            }
            GameError::MissingObstacle(role) => write!(f, "scene has no {:?}", role),
        }
    }
}

impl std::error::Error for GameError {}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        GameError::InvalidConfiguration(e)
    }
}
