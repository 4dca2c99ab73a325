use std::ops::Range;
use thiserror::Error;

/// Every failure the map core can report. None of these are transient, so nothing here is
/// retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Invalid map size ({width}, {height}): both dimensions must be positive")]
    InvalidSize { width: i64, height: i64 },

    #[error("Coordinates ({x}, {y}) are out of bounds for map size ({width}, {height})")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("Invalid sub-view rows {rows:?} x columns {cols:?} of map size ({width}, {height})")]
    InvalidRange {
        rows: Range<i32>,
        cols: Range<i32>,
        width: usize,
        height: usize,
    },

    #[error("Door draw {draw} does not fall on a wall of {span} cells")]
    InvalidDoor { draw: usize, span: usize },

    #[error("Malformed map data: {0}")]
    MalformedData(String),

    #[error("No saved map named '{0}'")]
    NotFound(String),

    #[error("Invalid map spec: {0}")]
    InvalidSpec(String),
}

impl From<ron::Error> for MapError {
    fn from(e: ron::Error) -> Self {
        MapError::MalformedData(e.to_string())
    }
}

impl From<serde_json::Error> for MapError {
    fn from(e: serde_json::Error) -> Self {
        MapError::MalformedData(e.to_string())
    }
}
