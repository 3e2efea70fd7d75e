use carvemaze::{
    generators::DisconnectedRegions,
    grid_displays::{AsciiGlyphs, BlockGlyphs},
    grid_traits::GridDisplay,
    maze_generator::{MazeGenerator, SeedSource},
};
use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;

const USAGE: &str = "Carve Maze

Usage:
    carvemaze -h | --help
    carvemaze [generate] [options]
    carvemaze show <file> [--blocks]
    carvemaze solve <file> [--seed=<n>] [--blocks]

Options:
    -h --help           Show this screen.
    --width=<w>         Maze width in grid positions, odd and at least 5 [default: 21].
    --height=<h>        Maze height in grid positions, odd and at least 5 [default: 11].
    --seed=<n>          Seed the random source so the same maze and route come out every run.
    --teleport          If some cells cannot be reached from the start, carve them as
                        separate regions.
    --solve             After generating, also show a route from the entrance to the exit.
    --save=<path>       Save the generated maze to a file. The maze takes the file name as its name.
    --blocks            Draw walls with block characters instead of '#'.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_generate: bool,
    cmd_show: bool,
    cmd_solve: bool,
    arg_file: String,
    flag_width: usize,
    flag_height: usize,
    flag_seed: Option<u64>,
    flag_teleport: bool,
    flag_solve: bool,
    flag_save: String,
    flag_blocks: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::carvemaze::errors::Error, ::carvemaze::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();
    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let seed_source = args.flag_seed.map_or(SeedSource::Entropy, SeedSource::Fixed);
    let mut generator = MazeGenerator::with_seed_source(seed_source);
    let glyphs: &dyn GridDisplay = if args.flag_blocks { &BlockGlyphs } else { &AsciiGlyphs };

    if args.cmd_show || args.cmd_solve {

        generator.load(&args.arg_file)
            .chain_err(|| format!("Failed to load maze from {}", args.arg_file))?;
        show_maze(&generator, glyphs)?;

        if args.cmd_solve {
            show_route(&mut generator, glyphs)?;
        }
    } else {

        if args.flag_teleport {
            generator.set_disconnected_regions(DisconnectedRegions::Teleport);
        }
        generator.set_dimensions(args.flag_width, args.flag_height)?;
        generator.generate()?;

        if !args.flag_save.is_empty() {
            generator.save(&args.flag_save)
                .chain_err(|| format!("Failed to save maze to {}", args.flag_save))?;
            info!("Saved maze to {}", args.flag_save);
        }
        show_maze(&generator, glyphs)?;

        if args.flag_solve {
            show_route(&mut generator, glyphs)?;
        }
    }

    Ok(())
}

fn show_maze(generator: &MazeGenerator, glyphs: &dyn GridDisplay) -> Result<()> {
    println!("Viewing {} maze", generator.maze().name());
    for row in generator.render_with(glyphs)? {
        println!("{}", row);
    }
    Ok(())
}

fn show_route(generator: &mut MazeGenerator, glyphs: &dyn GridDisplay) -> Result<()> {
    let solved = generator.solve()?;
    println!();
    println!("Route of {} cells ({} dead ends backed out of)",
             solved.path().len(),
             solved.backtracks());
    for row in solved.render_with(glyphs) {
        println!("{}", row);
    }
    Ok(())
}
