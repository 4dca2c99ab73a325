pub mod cell;
pub mod error;
pub mod extent;
pub mod graph;
pub mod grid;
pub mod map_types;
pub mod sampling;
pub mod serialize;
pub mod store;

pub use cell::{Cell, Side};
pub use error::MapError;
pub use extent::Extent;
pub use grid::{CellGrid, Grid, GridView, GridViewMut, Orientation};
pub use map_types::partition::{
    generate, generate_with_sampler, GenerationReport, PartitionMapSpec,
};
pub use sampling::{RngSplitSampler, SplitSampler};
pub use serialize::{deserialize, serialize, SerializedMap};
pub use store::{MapStore, MemoryMapStore};
