use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

pub const ALL_SIDES: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
        }
    }
}

/// Which sides of a cell are solid wall. The default cell is fully open.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Cell {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Cell {
    pub fn has_wall(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    pub fn with_wall(mut self, side: Side) -> Self {
        match side {
            Side::Left => self.left = true,
            Side::Top => self.top = true,
            Side::Right => self.right = true,
            Side::Bottom => self.bottom = true,
        }

        self
    }

    pub fn is_open(&self) -> bool {
        ALL_SIDES.iter().all(|s| !self.has_wall(*s))
    }
}
