use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid_dimensions::MazeDimensions;
use crate::maze::Maze;
use crate::units::{Height, Width};

/// What the backtracker does when its stack runs dry while unvisited cells remain.
///
/// That only happens when open cells are cut off from the start cell before carving begins,
/// e.g. a loaded or hand edited maze with whole cells walled in. On a fresh checkerboard the
/// backtracker reaches every cell from (1,1) and both policies give the same spanning tree.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DisconnectedRegions {
    /// Jump to a random unvisited cell and carve on from there. The new region has no passage
    /// to what was carved before, so the maze may have regions unreachable from the entrance.
    Teleport,
    /// Finish carving. Everything carved is one tree rooted at the start cell; cut off cells
    /// are left as they were.
    Stop,
}

impl Default for DisconnectedRegions {
    fn default() -> DisconnectedRegions {
        DisconnectedRegions::Stop
    }
}

/// Generate a new maze of the given size with the randomized iterative backtracker.
pub fn generate<R>(width: Width,
                   height: Height,
                   rng: &mut R,
                   regions: DisconnectedRegions)
                   -> Result<Maze>
    where R: Rng + ?Sized
{
    let dimensions = MazeDimensions::new(width, height)?;
    let mut maze = Maze::new(dimensions);
    recursive_backtracker(&mut maze, rng, regions)?;
    maze.open_entrance_and_exit()?;
    Ok(maze)
}

/// Apply the recursive backtracker maze generation algorithm to a maze.
///
/// Starting in the top left cell it walks to a random unvisited neighbour, knocking down the wall
/// in between, and pushes where it came from onto a stack. At a dead end it pops the stack and
/// tries again from there. The stack is explicit, so large mazes cannot overflow the call stack.
/// Long winding passages with few dead ends are typical.
///
/// Only the open logical cells of the maze are carved; cells already walled off stay that way.
pub fn recursive_backtracker<R>(maze: &mut Maze,
                                rng: &mut R,
                                regions: DisconnectedRegions)
                                -> Result<()>
    where R: Rng + ?Sized
{
    let dimensions = maze.dimensions()?;
    maze.clear_visited();

    let mut stack: Vec<GridCoordinate> = Vec::with_capacity(dimensions.cells_count().0);
    let mut current = dimensions.start_cell();
    maze.mark_visited(current);
    let mut restarts = 0;

    loop {
        let mut neighbours = maze.neighbours_for_generation(current);

        if !neighbours.is_empty() {
            neighbours.shuffle(rng);
            let next = neighbours[0];
            stack.push(current);
            maze.remove_wall(current, next)?;
            current = next;
            maze.mark_visited(current);

        } else if let Some(previous) = stack.pop() {
            current = previous;

        } else if let Some(restart) = restart_cell(maze, rng, regions) {
            restarts += 1;
            current = restart;
            maze.mark_visited(current);

        } else {
            break;
        }
    }

    let stranded = maze.unvisited_cells().len();
    if stranded > 0 {
        warn!("{} cells are cut off from the start cell and were left uncarved", stranded);
    }
    debug!("Carved {}x{} maze with {} passages and {} restarts",
           dimensions.width().0,
           dimensions.height().0,
           maze.passages_count().0,
           restarts);
    Ok(())
}

/// Choose where carving continues once the backtracking stack is empty.
fn restart_cell<R>(maze: &Maze, rng: &mut R, regions: DisconnectedRegions) -> Option<GridCoordinate>
    where R: Rng + ?Sized
{
    match regions {
        DisconnectedRegions::Teleport => maze.unvisited_cells().choose(rng).cloned(),
        DisconnectedRegions::Stop => None,
    }
}
