use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::cells::{CellMarker, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_displays::AsciiGlyphs;
use crate::grid_iterators::RenderRows;
use crate::grid_traits::GridDisplay;
use crate::maze::Maze;

/// A copy of a maze's markers with one route from the start cell to the goal cell drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedMaze {
    grid: Grid<CellMarker>,
    path: Vec<GridCoordinate>,
    backtracks: usize,
}

impl SolvedMaze {
    pub fn grid(&self) -> &Grid<CellMarker> {
        &self.grid
    }

    /// The logical cells of the route in walking order, start cell first, goal cell last.
    pub fn path(&self) -> &[GridCoordinate] {
        &self.path
    }

    /// How many dead ends the search walked back out of.
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    pub fn render(&self) -> RenderRows<AsciiGlyphs> {
        self.render_with(AsciiGlyphs)
    }

    pub fn render_with<D: GridDisplay>(&self, display: D) -> RenderRows<D> {
        RenderRows::new(&self.grid, display)
    }
}

/// Find a route from the start cell (1,1) to the goal cell beside the exit.
///
/// A depth first search through carved passages that picks among the open ways forward at
/// random, so the route is valid but rarely the shortest and repeated calls can differ. Cells
/// on the current route are marked `Path` on a working copy of the grid; walking back out of a
/// dead end clears those marks again. The maze's own markers are left untouched, only its
/// visited matrix is reset and reused.
pub fn depth_first_path<R>(maze: &mut Maze, rng: &mut R) -> Result<SolvedMaze>
    where R: Rng + ?Sized
{
    let dimensions = maze.dimensions()?;
    maze.clear_visited();

    let goal = dimensions.goal_cell();
    let start = dimensions.start_cell();
    if maze.is_wall(start) || maze.is_wall(goal) {
        debug!("Start {} or goal {} is walled in", start, goal);
        bail!(ErrorKind::NoPathFound);
    }

    let mut working = maze.grid().clone();
    let mut stack: Vec<GridCoordinate> = Vec::new();
    let mut current = start;
    let mut backtracks = 0;
    maze.mark_visited(current);

    while current != goal {
        let neighbours = maze.neighbours_for_solving(current);

        if let Some(&next) = neighbours.choose(rng) {
            let between = passage_between(current, next)?;
            working.set(current, CellMarker::Path);
            working.set(between, CellMarker::Path);
            working.set(next, CellMarker::Path);
            stack.push(current);
            current = next;
            maze.mark_visited(current);

        } else if let Some(previous) = stack.pop() {
            trace!("Dead end at {}, back to {}", current, previous);
            let between = passage_between(current, previous)?;
            working.set(current, CellMarker::Open);
            working.set(between, CellMarker::Open);
            current = previous;
            backtracks += 1;

        } else {
            bail!(ErrorKind::NoPathFound);
        }
    }

    stack.push(current);
    debug!("Found a route of {} cells after {} backtracks", stack.len(), backtracks);

    Ok(SolvedMaze {
        grid: working,
        path: stack,
        backtracks,
    })
}

fn passage_between(a: GridCoordinate, b: GridCoordinate) -> Result<GridCoordinate> {
    a.midpoint(b).ok_or_else(|| {
        ErrorKind::PreconditionViolation(format!("{} and {} are not adjacent", a, b)).into()
    })
}
