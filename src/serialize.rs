use crate::{
    cell::Cell,
    grid::{CellGrid, Grid},
    MapError,
};

use serde::{Deserialize, Serialize};

/// The portable form of a map: its size and every cell's wall flags, row-major. Views do not
/// survive this; only flag content does.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SerializedMap {
    pub width: i64,
    pub height: i64,
    pub cells: Vec<Cell>,
}

impl SerializedMap {
    pub fn to_ron(&self) -> Result<String, MapError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn from_ron(text: &str) -> Result<Self, MapError> {
        Ok(ron::de::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, MapError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Flattens any grid or view into a `SerializedMap`.
pub fn serialize(grid: &impl CellGrid) -> Result<SerializedMap, MapError> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(MapError::InvalidSize {
            width: width as i64,
            height: height as i64,
        });
    }

    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            cells.push(grid.get(x, y)?);
        }
    }

    Ok(SerializedMap {
        width: width as i64,
        height: height as i64,
        cells,
    })
}

/// Rebuilds a fresh top-level grid from `map`.
pub fn deserialize(map: &SerializedMap) -> Result<Grid, MapError> {
    let valid = |n: i64| n > 0 && n <= i64::from(i32::MAX);
    if !valid(map.width) || !valid(map.height) {
        return Err(MapError::MalformedData(format!(
            "map size ({}, {}) is not a valid grid size",
            map.width, map.height
        )));
    }

    let expected = (map.width as u128) * (map.height as u128);
    if map.cells.len() as u128 != expected {
        return Err(MapError::MalformedData(format!(
            "expected {} cells for map size ({}, {}), found {}",
            expected,
            map.width,
            map.height,
            map.cells.len()
        )));
    }

    Ok(Grid::from_cells(
        map.width as usize,
        map.height as usize,
        map.cells.clone(),
    ))
}
