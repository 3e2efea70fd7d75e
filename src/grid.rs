use itertools::Itertools;
use std::fmt;

use crate::cells::GridCoordinate;
use crate::units::{Height, RowIndex, Width};

/// A height x width matrix stored as one row-major buffer.
///
/// Every access is bounds-checked: out of range coordinates read as None and writes to them
/// are ignored (reported through the returned bool).
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T: Copy> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Copy> Grid<T> {
    pub fn new(width: Width, height: Height, fill: T) -> Grid<T> {
        Grid {
            cells: vec![fill; width.0 * height.0],
            width: width.0,
            height: height.0,
        }
    }

    /// Build a grid from row-major data. Returns None if the data length does not match.
    pub fn from_row_major(width: Width, height: Height, cells: Vec<T>) -> Option<Grid<T>> {
        if width.0.checked_mul(height.0) == Some(cells.len()) {
            Some(Grid {
                cells,
                width: width.0,
                height: height.0,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn width(&self) -> Width {
        Width(self.width)
    }

    #[inline]
    pub fn height(&self) -> Height {
        Height(self.height)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.height && coord.column < self.width
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0..width*height.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.width + coord.column)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, coord: GridCoordinate) -> Option<T> {
        self.grid_coordinate_to_index(coord).map(|index| self.cells[index])
    }

    /// Returns false, leaving the grid unchanged, if the coordinate is invalid.
    #[inline]
    pub fn set(&mut self, coord: GridCoordinate, value: T) -> bool {
        if let Some(index) = self.grid_coordinate_to_index(coord) {
            self.cells[index] = value;
            true
        } else {
            false
        }
    }

    pub fn fill(&mut self, value: T) {
        for cell in self.cells.iter_mut() {
            *cell = value;
        }
    }

    pub fn row(&self, row_index: RowIndex) -> Option<&[T]> {
        let RowIndex(row_index) = row_index;
        if row_index < self.height {
            let start = row_index * self.width;
            Some(&self.cells[start..start + self.width])
        } else {
            None
        }
    }

    pub fn as_row_major(&self) -> &[T] {
        &self.cells
    }

    /// Every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = GridCoordinate> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(GridCoordinate::from)
    }
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Grid<T> {
        Grid::new(Width(0), Height(0), T::default())
    }
}

impl<T: Copy> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, height: {:?}", self.width, self.height)
    }
}
