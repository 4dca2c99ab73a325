use crate::{
    extent::Extent,
    grid::{CellGrid, Grid, GridViewMut, Orientation},
    sampling::{small_rng, RngSplitSampler, SplitSampler, DEFAULT_HORIZONTAL_SPLIT_CHANCE},
    MapError,
};

use rand::Rng;
use serde::{Deserialize, Serialize};
use stats::OnlineStats;

/// A wall carved during generation, in top-level coordinates.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CarvedWall {
    pub orientation: Orientation,
    /// The cells whose bottom (horizontal) or right (vertical) side was considered for walling.
    pub cells: Extent,
    /// Offset of the open cell along the wall.
    pub door: usize,
}

impl CarvedWall {
    /// Top-level `(x, y)` of the door cell.
    pub fn door_cell(&self) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.cells.col + self.door, self.cells.row),
            Orientation::Vertical => (self.cells.col, self.cells.row + self.door),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomAreaStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

/// What the generator did, for callers that want more than the final flags.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GenerationReport {
    pub walls: Vec<CarvedWall>,
    /// The regions left when partitioning stopped, in top-level coordinates.
    pub rooms: Vec<Extent>,
}

impl GenerationReport {
    pub fn room_area_stats(&self) -> RoomAreaStats {
        let mut stats = OnlineStats::new();
        for room in self.rooms.iter() {
            stats.add(room.area());
        }

        RoomAreaStats {
            count: self.rooms.len(),
            mean: stats.mean(),
            std_dev: stats.stddev(),
        }
    }
}

/// Builds a `width` x `height` map by recursive binary partitioning, drawing from `rng`.
pub fn generate(width: i32, height: i32, rng: &mut impl Rng) -> Result<Grid, MapError> {
    let mut sampler = RngSplitSampler::new(rng)?;
    let (grid, _) = generate_with_sampler(width, height, &mut sampler)?;

    Ok(grid)
}

pub fn generate_with_sampler(
    width: i32,
    height: i32,
    sampler: &mut impl SplitSampler,
) -> Result<(Grid, GenerationReport), MapError> {
    log::debug!("Generating {} x {} partition map", width, height);

    let mut grid = Grid::new(width, height)?;
    let mut report = GenerationReport::default();
    partition(grid.view_mut(), sampler, &mut report)?;

    let stats = report.room_area_stats();
    log::debug!(
        "Carved {} walls, {} rooms (area mean = {:.2}, std dev = {:.2})",
        report.walls.len(),
        stats.count,
        stats.mean,
        stats.std_dev
    );

    Ok((grid, report))
}

/// Splits `view` in half along a random axis, walls off the middle line, and recurses into the
/// halves on either side of it. The wall line belongs to neither half.
fn partition(
    mut view: GridViewMut<'_>,
    sampler: &mut impl SplitSampler,
    report: &mut GenerationReport,
) -> Result<(), MapError> {
    let extent = view.extent();
    let (width, height) = (extent.width as i32, extent.height as i32);

    if width <= 1 || height <= 1 {
        report.rooms.push(extent);
        return Ok(());
    }

    let orientation = sampler.sample_orientation();
    let length = match orientation {
        Orientation::Horizontal => height,
        Orientation::Vertical => width,
    };
    let index = (length - 1) / 2;
    let door = view.build_wall(orientation, index, sampler)?;

    let wall_cells = match orientation {
        Orientation::Horizontal => Extent {
            row: extent.row + index as usize,
            height: 1,
            ..extent
        },
        Orientation::Vertical => Extent {
            col: extent.col + index as usize,
            width: 1,
            ..extent
        },
    };
    log::trace!("{:?} wall over {:?}, door {}", orientation, wall_cells, door);
    report.walls.push(CarvedWall {
        orientation,
        cells: wall_cells,
        door,
    });

    // A split at index 0 leaves nothing on the near side.
    for halves in [(0, index), (index + 1, length)].iter() {
        let (start, end) = *halves;
        if start >= end {
            continue;
        }
        let half = match orientation {
            Orientation::Horizontal => view.sub_view(start..end, 0..width)?,
            Orientation::Vertical => view.sub_view(0..height, start..end)?,
        };
        partition(half, sampler, report)?;
    }

    Ok(())
}

fn default_horizontal_split_chance() -> f64 {
    DEFAULT_HORIZONTAL_SPLIT_CHANCE
}

/// Everything needed to reproduce a map. Usually loaded from RON.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PartitionMapSpec {
    pub seed: [u32; 4],
    pub width: i32,
    pub height: i32,
    #[serde(default = "default_horizontal_split_chance")]
    pub horizontal_split_chance: f64,
}

impl PartitionMapSpec {
    pub fn new(seed: [u32; 4], width: i32, height: i32) -> Self {
        PartitionMapSpec {
            seed,
            width,
            height,
            horizontal_split_chance: DEFAULT_HORIZONTAL_SPLIT_CHANCE,
        }
    }

    pub fn from_ron(text: &str) -> Result<Self, MapError> {
        ron::de::from_str(text).map_err(|e| MapError::InvalidSpec(e.to_string()))
    }

    pub fn generate(&self) -> Result<(Grid, GenerationReport), MapError> {
        let rng = small_rng(self.seed);
        let mut sampler =
            RngSplitSampler::with_horizontal_chance(rng, self.horizontal_split_chance)?;

        generate_with_sampler(self.width, self.height, &mut sampler)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
