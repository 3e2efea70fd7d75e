use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::units::{CellsCount, Height, Width};

/// Smallest usable side length: one wall, one cell, one wall, one cell, one wall.
pub const MIN_SIDE_LENGTH: usize = 5;

/// Largest side length; saved mazes store each side as a u32.
pub const MAX_SIDE_LENGTH: usize = ::std::u32::MAX as usize;

/// Validated maze dimensions: width and height are both odd, greater than 3 and fit in a u32.
/// The number of grid positions always fits in a usize.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MazeDimensions {
    width: Width,
    height: Height,
}

impl MazeDimensions {
    pub fn new(width: Width, height: Height) -> Result<MazeDimensions> {
        if is_valid_side_length(width.0) && is_valid_side_length(height.0) &&
           width.0.checked_mul(height.0).is_some() {
            Ok(MazeDimensions { width, height })
        } else {
            bail!(ErrorKind::InvalidDimensions(width.0, height.0))
        }
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    /// Number of grid positions, walls included.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.width.0 * self.height.0
    }

    /// Number of logical cells, the odd/odd positions.
    #[inline(always)]
    pub fn cells_count(&self) -> CellsCount {
        CellsCount((self.width.0 / 2) * (self.height.0 / 2))
    }

    /// Where carving and solving start.
    #[inline(always)]
    pub fn start_cell(&self) -> GridCoordinate {
        GridCoordinate::new(1, 1)
    }

    /// The cell the solver has to reach, next to the exit opening.
    #[inline(always)]
    pub fn goal_cell(&self) -> GridCoordinate {
        GridCoordinate::new(self.height.0 - 2, self.width.0 - 2)
    }

    /// The opening in the top border wall.
    #[inline(always)]
    pub fn entrance(&self) -> GridCoordinate {
        GridCoordinate::new(0, 1)
    }

    /// The opening in the bottom border wall.
    #[inline(always)]
    pub fn exit(&self) -> GridCoordinate {
        GridCoordinate::new(self.height.0 - 1, self.width.0 - 2)
    }

    /// Is the coordinate strictly inside the border walls?
    #[inline]
    pub fn is_interior(&self, coord: GridCoordinate) -> bool {
        coord.row > 0 && coord.row + 1 < self.height.0 &&
        coord.column > 0 && coord.column + 1 < self.width.0
    }
}

#[inline]
fn is_valid_side_length(length: usize) -> bool {
    length % 2 == 1 && length >= MIN_SIDE_LENGTH && length <= MAX_SIDE_LENGTH
}
