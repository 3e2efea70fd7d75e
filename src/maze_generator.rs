use log::{info, warn};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::path::Path;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::generators::{self, DisconnectedRegions};
use crate::grid_dimensions::MazeDimensions;
use crate::grid_displays::AsciiGlyphs;
use crate::grid_iterators::RenderRows;
use crate::grid_traits::GridDisplay;
use crate::maze::Maze;
use crate::pathing::{self, SolvedMaze};
use crate::persistence;
use crate::units::{Height, Width};

/// Where a generator's random numbers come from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SeedSource {
    /// Fresh operating system entropy for every maze.
    Entropy,
    /// The same seed for every maze, so runs can be reproduced.
    Fixed(u64),
}

impl SeedSource {
    fn rng(self) -> XorShiftRng {
        match self {
            SeedSource::Entropy => XorShiftRng::from_entropy(),
            SeedSource::Fixed(seed) => XorShiftRng::seed_from_u64(seed),
        }
    }
}

/// Owns the current maze and the random source used to generate and solve it.
///
/// Each generator is independent; nothing is shared between instances.
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    rng: XorShiftRng,
    seed_source: SeedSource,
    dimensions: Option<MazeDimensions>,
    regions: DisconnectedRegions,
    maze: Maze,
}

impl MazeGenerator {
    pub fn new() -> MazeGenerator {
        MazeGenerator::with_seed_source(SeedSource::Entropy)
    }

    pub fn with_seed(seed: u64) -> MazeGenerator {
        MazeGenerator::with_seed_source(SeedSource::Fixed(seed))
    }

    pub fn with_seed_source(seed_source: SeedSource) -> MazeGenerator {
        MazeGenerator {
            rng: seed_source.rng(),
            seed_source,
            dimensions: None,
            regions: DisconnectedRegions::default(),
            maze: Maze::empty(),
        }
    }

    /// Set the size of the next maze to generate. Both sides must be odd and greater than 3.
    /// On failure the previous dimensions are kept.
    pub fn set_dimensions(&mut self, width: usize, height: usize) -> Result<()> {
        self.dimensions = Some(MazeDimensions::new(Width(width), Height(height))?);
        Ok(())
    }

    pub fn dimensions(&self) -> Option<MazeDimensions> {
        self.dimensions
    }

    pub fn set_disconnected_regions(&mut self, regions: DisconnectedRegions) {
        self.regions = regions;
    }

    pub fn disconnected_regions(&self) -> DisconnectedRegions {
        self.regions
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Replace the current maze with a newly carved one of the configured size.
    ///
    /// The random source is reseeded first, so with a fixed seed every call gives the same maze.
    pub fn generate(&mut self) -> Result<&Maze> {
        let dimensions = self.dimensions.ok_or_else(|| ErrorKind::InvalidDimensions(0, 0))?;
        self.rng = self.seed_source.rng();
        self.maze = generators::generate(dimensions.width(),
                                         dimensions.height(),
                                         &mut self.rng,
                                         self.regions)?;
        info!("Generated a {}x{} maze", dimensions.width().0, dimensions.height().0);
        Ok(&self.maze)
    }

    pub fn render(&self) -> Result<RenderRows<AsciiGlyphs>> {
        self.render_with(AsciiGlyphs)
    }

    pub fn render_with<D: GridDisplay>(&self, display: D) -> Result<RenderRows<D>> {
        self.maze.dimensions()?;
        Ok(self.maze.render_with(display))
    }

    /// Find a route from the entrance to the exit of the current maze.
    pub fn solve(&mut self) -> Result<SolvedMaze> {
        pathing::depth_first_path(&mut self.maze, &mut self.rng)
    }

    /// Save the current maze, naming it after the file.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.maze.dimensions()?;

        let file_name = path.file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
        let previous_name = self.maze.name().to_owned();
        self.maze.set_name(file_name);

        let saved = persistence::save(&self.maze, path);
        if let Err(ref e) = saved {
            warn!("Failed to save maze to {}: {}", path.display(), e);
            self.maze.set_name(previous_name);
        }
        saved
    }

    /// Replace the current maze with one loaded from a file.
    ///
    /// If loading fails the current maze and dimensions are left exactly as they were.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        match persistence::load(path) {
            Ok(maze) => {
                self.dimensions = maze.dimensions().ok();
                self.maze = maze;
                info!("Loaded maze '{}'", self.maze.name());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load maze from {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// Could a player standing on `cell` take one step in `direction`?
    pub fn is_walkable(&self, cell: GridCoordinate, direction: CompassPrimary) -> bool {
        self.maze.is_walkable(cell, direction)
    }
}

impl Default for MazeGenerator {
    fn default() -> MazeGenerator {
        MazeGenerator::new()
    }
}
