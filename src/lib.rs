//! **carvemaze** generates perfect mazes with a randomized backtracker, finds a route through them
//! and saves them to a small binary format.
//!
//! Mazes live on a double resolution grid: logical cells sit at odd row and column indices and
//! every other position is a wall that can be knocked down.

#[macro_use]
extern crate error_chain;

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod grid_traits;
pub mod maze;
pub mod maze_generator;
pub mod pathing;
pub mod persistence;
pub mod units;
