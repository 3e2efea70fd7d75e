use smallvec::SmallVec;
use std::fmt;

/// A position on the maze grid, walls and cells alike.
///
/// Logical maze cells live at odd rows and odd columns; the even rows and columns between them
/// hold the walls.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub column: usize,
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

impl GridCoordinate {
    pub fn new(row: usize, column: usize) -> GridCoordinate {
        GridCoordinate { row, column }
    }

    #[inline]
    pub fn is_logical_cell(&self) -> bool {
        self.row % 2 == 1 && self.column % 2 == 1
    }

    /// The coordinate `steps` positions away in the given direction.
    /// Returns None if that would step off the top or left edge of the grid.
    pub fn offset(&self, direction: CompassPrimary, steps: usize) -> Option<GridCoordinate> {
        let (row, column) = (self.row, self.column);
        match direction {
            CompassPrimary::North => row.checked_sub(steps).map(|r| GridCoordinate::new(r, column)),
            CompassPrimary::South => row.checked_add(steps).map(|r| GridCoordinate::new(r, column)),
            CompassPrimary::East => column.checked_add(steps).map(|c| GridCoordinate::new(row, c)),
            CompassPrimary::West => column.checked_sub(steps).map(|c| GridCoordinate::new(row, c)),
        }
    }

    /// The wall position between two logical cells that are exactly 2 apart along one axis.
    /// Returns None for any other pair.
    pub fn midpoint(&self, other: GridCoordinate) -> Option<GridCoordinate> {
        let row_delta = abs_difference(self.row, other.row);
        let col_delta = abs_difference(self.column, other.column);
        match (row_delta, col_delta) {
            (2, 0) | (0, 2) => Some(GridCoordinate::new((self.row + other.row) / 2,
                                                         (self.column + other.column) / 2)),
            _ => None,
        }
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_column_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[inline]
fn abs_difference(a: usize, b: usize) -> usize {
    if a > b { a - b } else { b - a }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    /// Every direction in the fixed order neighbour searches use: up, right, down, left.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];
}

/// What occupies a single grid position.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellMarker {
    Wall,
    Open,
    Path,
}

impl CellMarker {
    /// The byte written for this marker in a saved maze.
    pub fn as_byte(self) -> u8 {
        match self {
            CellMarker::Wall => b'#',
            CellMarker::Open => b' ',
            CellMarker::Path => b'.',
        }
    }

    pub fn from_byte(byte: u8) -> Option<CellMarker> {
        match byte {
            b'#' => Some(CellMarker::Wall),
            b' ' => Some(CellMarker::Open),
            b'.' => Some(CellMarker::Path),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellMarker::Wall
    }
}

impl Default for CellMarker {
    fn default() -> CellMarker {
        CellMarker::Wall
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn offsets_do_not_wrap_at_the_top_left_edges() {
        let origin = GridCoordinate::new(0, 1);
        assert_eq!(origin.offset(CompassPrimary::North, 2), None);
        assert_eq!(origin.offset(CompassPrimary::West, 2), None);
        assert_eq!(origin.offset(CompassPrimary::West, 1), Some(GridCoordinate::new(0, 0)));
        assert_eq!(origin.offset(CompassPrimary::South, 2), Some(GridCoordinate::new(2, 1)));
        assert_eq!(origin.offset(CompassPrimary::East, 2), Some(GridCoordinate::new(0, 3)));
    }

    #[test]
    fn midpoint_of_adjacent_cells() {
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_eq!(gc(1, 1).midpoint(gc(1, 3)), Some(gc(1, 2)));
        assert_eq!(gc(3, 1).midpoint(gc(1, 1)), Some(gc(2, 1)));
        assert_eq!(gc(1, 1).midpoint(gc(3, 3)), None);
        assert_eq!(gc(1, 1).midpoint(gc(1, 1)), None);
        assert_eq!(gc(1, 1).midpoint(gc(1, 5)), None);
    }

    #[test]
    fn logical_cells_are_odd_odd() {
        assert!(GridCoordinate::new(1, 3).is_logical_cell());
        assert!(!GridCoordinate::new(2, 3).is_logical_cell());
        assert!(!GridCoordinate::new(1, 0).is_logical_cell());
    }

    #[test]
    fn marker_bytes() {
        for marker in &[CellMarker::Wall, CellMarker::Open, CellMarker::Path] {
            assert_eq!(CellMarker::from_byte(marker.as_byte()), Some(*marker));
        }
        assert_eq!(CellMarker::from_byte(b'x'), None);
    }
}
