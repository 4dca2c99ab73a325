use crate::{
    grid::{CellGrid, Grid},
    serialize::{deserialize, serialize, SerializedMap},
    MapError,
};

use fnv::FnvHashMap;

/// Name-keyed persistence for maps. Where and how the names map to storage is up to the
/// implementation.
pub trait MapStore {
    fn load(&self, name: &str) -> Result<SerializedMap, MapError>;

    fn save(&mut self, name: &str, map: &SerializedMap) -> Result<(), MapError>;
}

/// Keeps each saved map as RON text, the same form a file-backed store would write.
#[derive(Debug, Default)]
pub struct MemoryMapStore {
    maps: FnvHashMap<String, String>,
}

impl MemoryMapStore {
    pub fn new() -> Self {
        MemoryMapStore {
            maps: FnvHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl MapStore for MemoryMapStore {
    fn load(&self, name: &str) -> Result<SerializedMap, MapError> {
        let text = self
            .maps
            .get(name)
            .ok_or_else(|| MapError::NotFound(name.to_string()))?;

        SerializedMap::from_ron(text)
    }

    fn save(&mut self, name: &str, map: &SerializedMap) -> Result<(), MapError> {
        let text = map.to_ron()?;
        log::debug!("Saving map '{}' ({} x {})", name, map.width, map.height);
        self.maps.insert(name.to_string(), text);

        Ok(())
    }
}

pub fn save_grid(
    store: &mut impl MapStore,
    name: &str,
    grid: &impl CellGrid,
) -> Result<(), MapError> {
    store.save(name, &serialize(grid)?)
}

pub fn load_grid(store: &impl MapStore, name: &str) -> Result<Grid, MapError> {
    deserialize(&store.load(name)?)
}
