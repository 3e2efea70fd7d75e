use itertools::Itertools;

use crate::cells::{CellMarker, CompassPrimary, CoordinateSmallVec, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_dimensions::MazeDimensions;
use crate::grid_displays::AsciiGlyphs;
use crate::grid_iterators::RenderRows;
use crate::grid_traits::GridDisplay;
use crate::units::{Height, PassagesCount, Width};

pub const UNNAMED: &str = "Unnamed";

/// A maze on a double resolution grid.
///
/// Logical cells sit at odd/odd positions, everything else starts out as wall. Carving a passage
/// clears the wall position between two logical cells. The `visited` matrix is scratch space
/// shared by generation and solving; it is reset by whichever of them runs next and is never
/// persisted.
#[derive(Debug, Clone)]
pub struct Maze {
    dimensions: Option<MazeDimensions>,
    grid: Grid<CellMarker>,
    visited: Grid<bool>,
    name: String,
}

impl Maze {
    /// A maze with zero dimensions, nothing generated or loaded yet.
    pub fn empty() -> Maze {
        Maze {
            dimensions: None,
            grid: Grid::default(),
            visited: Grid::default(),
            name: String::from(UNNAMED),
        }
    }

    /// The uncarved checkerboard: every logical cell open, every other position wall.
    pub fn new(dimensions: MazeDimensions) -> Maze {
        let mut grid = Grid::new(dimensions.width(), dimensions.height(), CellMarker::Wall);
        let cells = odd_coordinates(dimensions.width(), dimensions.height()).collect::<Vec<_>>();
        for cell in cells {
            grid.set(cell, CellMarker::Open);
        }

        Maze {
            dimensions: Some(dimensions),
            grid,
            visited: Grid::new(dimensions.width(), dimensions.height(), false),
            name: String::from(UNNAMED),
        }
    }

    /// Rebuild a maze from stored markers. The visited matrix starts cleared.
    pub fn from_grid(name: String, grid: Grid<CellMarker>) -> Result<Maze> {
        let dimensions = MazeDimensions::new(grid.width(), grid.height())?;
        Ok(Maze {
            dimensions: Some(dimensions),
            visited: Grid::new(dimensions.width(), dimensions.height(), false),
            grid,
            name,
        })
    }

    /// Has a maze been generated or loaded?
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.dimensions.is_some()
    }

    /// Fails with `MazeNotReady` for an empty maze.
    #[inline]
    pub fn dimensions(&self) -> Result<MazeDimensions> {
        self.dimensions.ok_or_else(|| ErrorKind::MazeNotReady.into())
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.grid.height()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    #[inline]
    pub fn grid(&self) -> &Grid<CellMarker> {
        &self.grid
    }

    #[inline]
    pub fn marker_at(&self, coord: GridCoordinate) -> Option<CellMarker> {
        self.grid.get(coord)
    }

    #[inline]
    pub fn is_wall(&self, coord: GridCoordinate) -> bool {
        self.grid.get(coord).map_or(true, CellMarker::is_wall)
    }

    #[inline]
    pub fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.visited.get(coord).unwrap_or(false)
    }

    #[inline]
    pub fn mark_visited(&mut self, coord: GridCoordinate) {
        self.visited.set(coord, true);
    }

    pub fn clear_visited(&mut self) {
        self.visited.fill(false);
    }

    /// Logical cell positions in row-major order, whatever they currently hold.
    pub fn logical_cells(&self) -> impl Iterator<Item = GridCoordinate> {
        odd_coordinates(self.width(), self.height())
    }

    /// Open logical cells not yet visited in the current pass.
    pub fn unvisited_cells(&self) -> Vec<GridCoordinate> {
        self.logical_cells()
            .filter(|&cell| !self.is_wall(cell) && !self.is_visited(cell))
            .collect()
    }

    /// Cells two steps away that carving could move into: inside the border, not wall and not
    /// yet visited. Checked in the fixed order north, east, south, west.
    pub fn neighbours_for_generation(&self, cell: GridCoordinate) -> CoordinateSmallVec {
        self.candidate_neighbours(cell)
            .filter(|&neighbour| !self.is_visited(neighbour))
            .collect()
    }

    /// Like `neighbours_for_generation`, but only through a carved passage: the position between
    /// the two cells must not be wall.
    pub fn neighbours_for_solving(&self, cell: GridCoordinate) -> CoordinateSmallVec {
        self.candidate_neighbours(cell)
            .filter(|&neighbour| !self.is_visited(neighbour))
            .filter(|&neighbour| {
                cell.midpoint(neighbour)
                    .map_or(false, |between| !self.is_wall(between))
            })
            .collect()
    }

    /// Carve a passage between two logical cells exactly 2 apart along one axis.
    ///
    /// The wall position between them is opened and marked visited.
    pub fn remove_wall(&mut self, a: GridCoordinate, b: GridCoordinate) -> Result<()> {
        let between = a.midpoint(b).ok_or_else(|| {
            ErrorKind::PreconditionViolation(format!("cells {} and {} are not adjacent", a, b))
        })?;
        if !self.grid.set(between, CellMarker::Open) {
            let reason = format!("wall {} is outside the maze", between);
            bail!(ErrorKind::PreconditionViolation(reason));
        }
        self.mark_visited(between);
        Ok(())
    }

    /// Open the entrance in the top border and the exit in the bottom border.
    pub fn open_entrance_and_exit(&mut self) -> Result<()> {
        let dimensions = self.dimensions()?;
        self.grid.set(dimensions.entrance(), CellMarker::Open);
        self.grid.set(dimensions.exit(), CellMarker::Open);
        Ok(())
    }

    /// Can a player step one position from `cell` in `direction` without walking into a wall
    /// or off the grid?
    pub fn is_walkable(&self, cell: GridCoordinate, direction: CompassPrimary) -> bool {
        if self.is_wall(cell) {
            return false;
        }
        cell.offset(direction, 1)
            .map_or(false, |next| !self.is_wall(next))
    }

    /// Number of carved passages between logical cells.
    ///
    /// A maze where every cell is connected by exactly one path has one passage fewer than
    /// it has cells.
    pub fn passages_count(&self) -> PassagesCount {
        let (width, height) = (self.width().0, self.height().0);
        let count = self.grid
            .coordinates()
            .filter(|c| (c.row % 2 == 1) != (c.column % 2 == 1))
            .filter(|c| c.row > 0 && c.column > 0 && c.row + 1 < height && c.column + 1 < width)
            .filter(|&c| !self.is_wall(c))
            .count();
        PassagesCount(count)
    }

    pub fn render(&self) -> RenderRows<AsciiGlyphs> {
        self.render_with(AsciiGlyphs)
    }

    pub fn render_with<D: GridDisplay>(&self, display: D) -> RenderRows<D> {
        RenderRows::new(&self.grid, display)
    }

    fn candidate_neighbours<'a>(&'a self,
                                cell: GridCoordinate)
                                -> impl Iterator<Item = GridCoordinate> + 'a {
        let directions: &'static [CompassPrimary; 4] = &CompassPrimary::ALL;
        directions
            .iter()
            .filter_map(move |&dir| cell.offset(dir, 2))
            .filter(move |&neighbour| {
                self.dimensions.map_or(false, |d| d.is_interior(neighbour)) &&
                !self.is_wall(neighbour)
            })
    }
}

impl Default for Maze {
    fn default() -> Maze {
        Maze::empty()
    }
}

/// Two mazes are equal when their names and markers match; visitation state is ignored.
impl PartialEq for Maze {
    fn eq(&self, other: &Maze) -> bool {
        self.name == other.name && self.dimensions == other.dimensions && self.grid == other.grid
    }
}
impl Eq for Maze {}

fn odd_coordinates(width: Width, height: Height) -> impl Iterator<Item = GridCoordinate> {
    (1..height.0)
        .step_by(2)
        .cartesian_product((1..width.0).step_by(2))
        .map(GridCoordinate::from)
}
