use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A rectangle of cells addressed in the coordinates of the top-level grid that owns the
/// storage. Views carry one of these to translate their local coordinates.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Extent {
    /// Column of the left-most cell.
    pub col: usize,
    /// Row of the top-most cell.
    pub row: usize,
    pub width: usize,
    pub height: usize,
}

impl Extent {
    pub fn from_size(width: usize, height: usize) -> Self {
        Extent {
            col: 0,
            row: 0,
            width,
            height,
        }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// True iff local `(x, y)` lies inside this extent.
    pub fn contains_local(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Index of local `(x, y)` in a row-major buffer whose rows are `stride` cells long.
    /// Callers check `contains_local` first.
    pub fn storage_index(&self, x: usize, y: usize, stride: usize) -> usize {
        (self.row + y) * stride + self.col + x
    }

    /// The window of `rows` x `cols`, both half-open and local to this extent. Returns `None`
    /// when either range is empty or reaches past this extent.
    pub fn sub_extent(&self, rows: &Range<i32>, cols: &Range<i32>) -> Option<Extent> {
        let fits =
            |r: &Range<i32>, len: usize| r.start >= 0 && r.start < r.end && r.end as usize <= len;
        if !fits(rows, self.height) || !fits(cols, self.width) {
            return None;
        }

        Some(Extent {
            col: self.col + cols.start as usize,
            row: self.row + rows.start as usize,
            width: (cols.end - cols.start) as usize,
            height: (rows.end - rows.start) as usize,
        })
    }

    pub fn intersects(&self, other: &Extent) -> bool {
        self.col < other.col + other.width
            && other.col < self.col + self.width
            && self.row < other.row + other.height
            && other.row < self.row + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_extent_composes_offsets() {
        let outer = Extent::from_size(10, 8);
        let middle = outer.sub_extent(&(2..7), &(3..9)).unwrap();
        let inner = middle.sub_extent(&(1..3), &(2..4)).unwrap();

        assert_eq!(
            inner,
            Extent {
                col: 5,
                row: 3,
                width: 2,
                height: 2
            }
        );
        assert_eq!(inner.storage_index(1, 1, 10), 4 * 10 + 6);
    }

    #[test]
    fn test_sub_extent_rejects_empty_and_oversized_ranges() {
        let e = Extent::from_size(4, 4);

        assert_eq!(e.sub_extent(&(2..2), &(0..4)), None);
        assert_eq!(e.sub_extent(&(0..4), &(3..5)), None);
        assert_eq!(e.sub_extent(&(-1..2), &(0..4)), None);
        assert!(e.sub_extent(&(0..4), &(0..4)).is_some());
    }

    #[test]
    fn test_contains_and_intersects() {
        let a = Extent {
            col: 1,
            row: 1,
            width: 2,
            height: 2,
        };
        let b = Extent {
            col: 3,
            row: 1,
            width: 1,
            height: 1,
        };

        assert!(a.contains_local(1, 1));
        assert!(!a.contains_local(2, 0));
        assert!(!a.contains_local(-1, 0));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Extent::from_size(2, 2)));
    }
}
