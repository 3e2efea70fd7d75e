use std::fmt;

use crate::cells::CellMarker;
use crate::grid::Grid;
use crate::grid_traits::GridDisplay;
use crate::units::RowIndex;

/// Lazily renders a marker grid one text row at a time, top to bottom.
///
/// Cloning the iterator, or asking the maze to render again, restarts from the first row.
#[derive(Clone)]
pub struct RenderRows<'a, D: GridDisplay> {
    grid: &'a Grid<CellMarker>,
    display: D,
    next_row: usize,
}

impl<'a, D: GridDisplay> RenderRows<'a, D> {
    pub fn new(grid: &'a Grid<CellMarker>, display: D) -> RenderRows<'a, D> {
        RenderRows {
            grid,
            display,
            next_row: 0,
        }
    }
}

impl<'a, D: GridDisplay> Iterator for RenderRows<'a, D> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;
        let row = grid.row(RowIndex(self.next_row))?;
        self.next_row += 1;
        Some(row.iter().map(|&marker| self.display.render_marker(marker)).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.height().0.saturating_sub(self.next_row);
        (remaining, Some(remaining))
    }
}
// default impl using size_hint()
impl<'a, D: GridDisplay> ExactSizeIterator for RenderRows<'a, D> {}

impl<'a, D: GridDisplay> fmt::Debug for RenderRows<'a, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "RenderRows :: next_row: {:?}, rows: {:?}",
               self.next_row,
               self.grid.height().0)
    }
}
