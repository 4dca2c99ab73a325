//! Bounds-checked cell grids and the views that alias them.
//!
//! A [`Grid`] owns a flat row-major buffer of [`Cell`]s. A [`GridView`] or [`GridViewMut`]
//! borrows that buffer together with an [`Extent`] describing the window it exposes, so
//! sub-views never copy cells and writes through a view land in the owning grid. Views of
//! views compose: the extent is always kept in top-level coordinates.

use crate::{
    cell::{Cell, Side},
    extent::Extent,
    sampling::{door_position, SplitSampler},
    MapError,
};

use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Orientation {
    /// A wall along a row, blocking the bottom side of its cells.
    Horizontal,
    /// A wall along a column, blocking the right side of its cells.
    Vertical,
}

impl Orientation {
    pub fn wall_side(self) -> Side {
        match self {
            Orientation::Horizontal => Side::Bottom,
            Orientation::Vertical => Side::Right,
        }
    }
}

/// Read access shared by grids and views. Coordinates are local: `x` is the column and `y`
/// the row, both counted from the top-left of this grid's own extent.
pub trait CellGrid {
    fn extent(&self) -> Extent;

    fn get(&self, x: i32, y: i32) -> Result<Cell, MapError>;

    fn width(&self) -> usize {
        self.extent().width
    }

    fn height(&self) -> usize {
        self.extent().height
    }
}

fn locate(extent: &Extent, stride: usize, x: i32, y: i32) -> Result<usize, MapError> {
    if !extent.contains_local(x, y) {
        return Err(MapError::OutOfBounds {
            x,
            y,
            width: extent.width,
            height: extent.height,
        });
    }

    Ok(extent.storage_index(x as usize, y as usize, stride))
}

fn window(extent: &Extent, rows: Range<i32>, cols: Range<i32>) -> Result<Extent, MapError> {
    extent
        .sub_extent(&rows, &cols)
        .ok_or_else(|| MapError::InvalidRange {
            rows,
            cols,
            width: extent.width,
            height: extent.height,
        })
}

/// A top-level grid that owns its cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// A grid of open cells. Fails with `InvalidSize` unless both dimensions are positive.
    pub fn new(width: i32, height: i32) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidSize {
                width: width.into(),
                height: height.into(),
            });
        }
        let (width, height) = (width as usize, height as usize);

        Ok(Grid {
            cells: vec![Cell::default(); width * height],
            width,
            height,
        })
    }

    /// Takes ownership of row-major `cells`. The caller has already checked the length.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);

        Grid {
            cells,
            width,
            height,
        }
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), MapError> {
        let i = locate(&self.extent(), self.width, x, y)?;
        self.cells[i] = cell;

        Ok(())
    }

    pub fn view(&self) -> GridView<'_> {
        GridView {
            cells: &self.cells,
            stride: self.width,
            extent: self.extent(),
        }
    }

    pub fn view_mut(&mut self) -> GridViewMut<'_> {
        let extent = self.extent();
        GridViewMut {
            cells: &mut self.cells,
            stride: self.width,
            extent,
        }
    }

    /// A mutable window onto `rows` x `cols` of this grid.
    pub fn sub_view(
        &mut self,
        rows: Range<i32>,
        cols: Range<i32>,
    ) -> Result<GridViewMut<'_>, MapError> {
        self.view_mut().into_sub_view(rows, cols)
    }

    pub fn build_wall(
        &mut self,
        orientation: Orientation,
        index: i32,
        sampler: &mut impl SplitSampler,
    ) -> Result<usize, MapError> {
        self.view_mut().build_wall(orientation, index, sampler)
    }
}

impl CellGrid for Grid {
    fn extent(&self) -> Extent {
        Extent::from_size(self.width, self.height)
    }

    fn get(&self, x: i32, y: i32) -> Result<Cell, MapError> {
        Ok(self.cells[locate(&self.extent(), self.width, x, y)?])
    }
}

/// A read-only window onto some grid's cells.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    cells: &'a [Cell],
    stride: usize,
    extent: Extent,
}

impl<'a> GridView<'a> {
    pub fn sub_view(&self, rows: Range<i32>, cols: Range<i32>) -> Result<GridView<'a>, MapError> {
        Ok(GridView {
            cells: self.cells,
            stride: self.stride,
            extent: window(&self.extent, rows, cols)?,
        })
    }
}

impl CellGrid for GridView<'_> {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn get(&self, x: i32, y: i32) -> Result<Cell, MapError> {
        Ok(self.cells[locate(&self.extent, self.stride, x, y)?])
    }
}

/// A mutable window onto some grid's cells. Only one of these can be alive per grid at a
/// time, which is what keeps the aliasing sound.
#[derive(Debug)]
pub struct GridViewMut<'a> {
    cells: &'a mut [Cell],
    stride: usize,
    extent: Extent,
}

impl<'a> GridViewMut<'a> {
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), MapError> {
        let i = locate(&self.extent, self.stride, x, y)?;
        self.cells[i] = cell;

        Ok(())
    }

    /// Shortens the borrow so a sub-view can be taken without giving this view up.
    pub fn reborrow(&mut self) -> GridViewMut<'_> {
        GridViewMut {
            cells: &mut *self.cells,
            stride: self.stride,
            extent: self.extent,
        }
    }

    pub fn sub_view(
        &mut self,
        rows: Range<i32>,
        cols: Range<i32>,
    ) -> Result<GridViewMut<'_>, MapError> {
        self.reborrow().into_sub_view(rows, cols)
    }

    pub fn into_sub_view(
        self,
        rows: Range<i32>,
        cols: Range<i32>,
    ) -> Result<GridViewMut<'a>, MapError> {
        let extent = window(&self.extent, rows, cols)?;

        Ok(GridViewMut {
            cells: self.cells,
            stride: self.stride,
            extent,
        })
    }

    /// Carves a wall along row `index` (horizontal) or column `index` (vertical) of this view,
    /// leaving exactly one door. Returns the door's position along the wall. A door draw outside
    /// the wall is rejected before any cell is touched.
    pub fn build_wall(
        &mut self,
        orientation: Orientation,
        index: i32,
        sampler: &mut impl SplitSampler,
    ) -> Result<usize, MapError> {
        let (span, wall_at) = match orientation {
            Orientation::Horizontal => (self.extent.width, (0, index)),
            Orientation::Vertical => (self.extent.height, (index, 0)),
        };
        locate(&self.extent, self.stride, wall_at.0, wall_at.1)?;

        let draw = sampler.sample_door(span);
        if draw >= span {
            return Err(MapError::InvalidDoor { draw, span });
        }
        let door = door_position(draw, span);
        let side = orientation.wall_side();
        for along in (0..span).filter(|a| *a != door) {
            let (x, y) = match orientation {
                Orientation::Horizontal => (along, index as usize),
                Orientation::Vertical => (index as usize, along),
            };
            let i = self.extent.storage_index(x, y, self.stride);
            self.cells[i] = self.cells[i].with_wall(side);
        }
        log::trace!(
            "{:?} wall at {} of {:?}, door at {}",
            orientation,
            index,
            self.extent,
            door
        );

        Ok(door)
    }
}

impl CellGrid for GridViewMut<'_> {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn get(&self, x: i32, y: i32) -> Result<Cell, MapError> {
        Ok(self.cells[locate(&self.extent, self.stride, x, y)?])
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
