//! Binary maze files.
//!
//! Layout, all integers little endian:
//!
//! ```text
//! [name length: u64][name: UTF-8 bytes][height: u32][width: u32][height * width marker bytes]
//! ```
//!
//! Markers are stored row-major, one byte each (`#` wall, space open). Path markers belong to
//! solved copies only and are refused on both sides. The visited matrix used while generating
//! and solving is not stored.

use log::debug;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::cells::CellMarker;
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_dimensions::MazeDimensions;
use crate::maze::Maze;
use crate::units::{Height, Width};

/// Write a maze to a file, creating or truncating it.
pub fn save<P: AsRef<Path>>(maze: &Maze, path: P) -> Result<()> {
    let path = path.as_ref();
    check_saveable(maze)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_maze(maze, &mut writer)?;
    writer.flush()?;
    debug!("Saved maze '{}' to {}", maze.name(), path.display());
    Ok(())
}

/// Read a maze back from a file written by `save`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Maze> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let maze = read_maze(&mut reader)?;

    let mut trailing = [0u8; 1];
    if reader.read(&mut trailing)? != 0 {
        bail!(ErrorKind::CorruptMaze(String::from("unexpected data after the grid")));
    }
    debug!("Loaded maze '{}' from {}", maze.name(), path.display());
    Ok(maze)
}

pub fn write_maze<W: Write>(maze: &Maze, writer: &mut W) -> Result<()> {
    let dimensions = check_saveable(maze)?;
    let name = maze.name().as_bytes();

    write_u64(writer, name.len() as u64)?;
    writer.write_all(name)?;
    write_u32(writer, dimension_to_u32(dimensions.height().0)?)?;
    write_u32(writer, dimension_to_u32(dimensions.width().0)?)?;

    let cell_bytes = maze.grid()
                         .as_row_major()
                         .iter()
                         .map(|marker| marker.as_byte())
                         .collect::<Vec<u8>>();
    writer.write_all(&cell_bytes)?;
    Ok(())
}

pub fn read_maze<R: Read>(reader: &mut R) -> Result<Maze> {
    let name_length = read_u64(reader)?;
    let name_bytes = read_bytes(reader, name_length)?;
    let name = String::from_utf8(name_bytes)
        .map_err(|_| ErrorKind::CorruptMaze(String::from("maze name is not UTF-8")))?;

    let height = read_u32(reader)? as usize;
    let width = read_u32(reader)? as usize;
    let cells_count = width.checked_mul(height)
                           .ok_or_else(|| corrupt_dimensions(width, height))?;

    let cell_bytes = read_bytes(reader, cells_count as u64)?;
    let markers = cell_bytes.into_iter()
                            .map(|byte| match CellMarker::from_byte(byte) {
                                Some(marker) if marker != CellMarker::Path => Ok(marker),
                                _ => {
                                    let reason = format!("unknown cell byte {:#04x}", byte);
                                    Err(ErrorKind::CorruptMaze(reason))
                                }
                            })
                            .collect::<::std::result::Result<Vec<CellMarker>, ErrorKind>>()?;

    let grid = Grid::from_row_major(Width(width), Height(height), markers)
        .ok_or_else(|| corrupt_dimensions(width, height))?;
    Maze::from_grid(name, grid).map_err(|_| corrupt_dimensions(width, height).into())
}

/// Only mazes that `read_maze` would accept back can be written.
fn check_saveable(maze: &Maze) -> Result<MazeDimensions> {
    let dimensions = maze.dimensions()?;
    if let Some(index) = maze.grid().as_row_major().iter().position(|&m| m == CellMarker::Path) {
        let reason = format!("path marker at index {} cannot be saved", index);
        bail!(ErrorKind::PreconditionViolation(reason));
    }
    Ok(dimensions)
}

fn corrupt_dimensions(width: usize, height: usize) -> ErrorKind {
    ErrorKind::CorruptMaze(format!("invalid dimensions {}x{}", width, height))
}

fn dimension_to_u32(length: usize) -> Result<u32> {
    u32::try_from(length).map_err(|_| {
        let reason = format!("dimension {} does not fit the file format", length);
        ErrorKind::PreconditionViolation(reason).into()
    })
}

fn write_u32<W: Write>(w: &mut W, v: u32) -> io::Result<()> {
    w.write_all(&v.to_le_bytes())
}

fn write_u64<W: Write>(w: &mut W, v: u64) -> io::Result<()> {
    w.write_all(&v.to_le_bytes())
}

fn read_u32<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64<R: Read>(r: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read exactly `length` bytes without trusting `length` for the allocation up front.
fn read_bytes<R: Read>(r: &mut R, length: u64) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    r.by_ref().take(length).read_to_end(&mut buf)?;
    if buf.len() as u64 != length {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "maze data ends early"));
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {

    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::cells::GridCoordinate;
    use crate::generators::{self, DisconnectedRegions};

    fn seeded_maze(w: usize, h: usize, seed: u64) -> Maze {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        generators::generate(Width(w), Height(h), &mut rng, DisconnectedRegions::Stop)
            .expect("valid dimensions")
    }

    fn scratch_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("carvemaze-persistence-{}-{}", std::process::id(), name))
    }

    fn to_bytes(maze: &Maze) -> Vec<u8> {
        let mut bytes = Vec::new();
        write_maze(maze, &mut bytes).expect("in memory write");
        bytes
    }

    #[test]
    fn layout_is_fixed_width_little_endian() {
        let mut maze = seeded_maze(5, 7, 1);
        maze.set_name("ab");
        let bytes = to_bytes(&maze);

        assert_eq!(bytes.len(), 8 + 2 + 4 + 4 + 35);
        assert_eq!(&bytes[0..8], &[2, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[8..10], b"ab");
        assert_eq!(&bytes[10..14], &[7, 0, 0, 0]);
        assert_eq!(&bytes[14..18], &[5, 0, 0, 0]);
        // entrance at (0,1)
        assert_eq!(&bytes[18..23], b"# ###");
    }

    #[test]
    fn stream_round_trip() {
        let mut maze = seeded_maze(13, 9, 5);
        maze.set_name("stream");
        let loaded = read_maze(&mut &to_bytes(&maze)[..]).unwrap();

        assert_eq!(loaded, maze);
        assert_eq!(loaded.name(), "stream");
        assert_eq!(loaded.width(), Width(13));
        assert_eq!(loaded.height(), Height(9));
        assert!(loaded.grid().coordinates().all(|c| !loaded.is_visited(c)));
    }

    #[test]
    fn file_round_trip() {
        let path = scratch_file("round-trip");
        let maze = seeded_maze(9, 11, 6);
        save(&maze, &path).unwrap();
        let loaded = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, maze);
        assert_eq!(loaded.name(), maze.name());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        match load(scratch_file("does-not-exist")) {
            Err(Error(ErrorKind::Io(_), _)) => (),
            other => panic!("expected an io error, got {:?}", other),
        }
    }

    #[test]
    fn saving_an_empty_maze_fails() {
        let mut bytes = Vec::new();
        match write_maze(&Maze::empty(), &mut bytes) {
            Err(Error(ErrorKind::MazeNotReady, _)) => assert!(bytes.is_empty()),
            other => panic!("expected MazeNotReady, got {:?}", other),
        }
    }

    #[test]
    fn truncated_data_is_an_io_error() {
        let bytes = to_bytes(&seeded_maze(5, 5, 2));
        for &cut in &[0, 5, 12, 20, bytes.len() - 1] {
            match read_maze(&mut &bytes[..cut]) {
                Err(Error(ErrorKind::Io(ref e), _)) => {
                    assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof)
                }
                other => panic!("expected unexpected eof at {}, got {:?}", cut, other),
            }
        }
    }

    #[test]
    fn corrupt_contents_are_rejected() {
        let good = to_bytes(&seeded_maze(5, 5, 3));
        let name_length = Maze::empty().name().len();
        let dims_at = 8 + name_length;
        let grid_at = dims_at + 8;

        let mut narrow = good.clone();
        narrow[dims_at + 4] = 3;
        let mut bad_marker = good.clone();
        bad_marker[grid_at + 6] = b'x';
        let mut path_marker = good.clone();
        path_marker[grid_at + 6] = b'.';
        let mut bad_name = good.clone();
        bad_name[8] = 0xff;

        for bytes in &[narrow, bad_marker, path_marker, bad_name] {
            match read_maze(&mut &bytes[..]) {
                Err(Error(ErrorKind::CorruptMaze(_), _)) => (),
                other => panic!("expected corrupt maze, got {:?}", other),
            }
        }
    }

    #[test]
    fn path_markers_are_never_written() {
        let mut grid = seeded_maze(5, 5, 3).grid().clone();
        grid.set(GridCoordinate::new(1, 1), CellMarker::Path);
        let marked = Maze::from_grid(String::from("marked"), grid).unwrap();

        let mut bytes = Vec::new();
        match write_maze(&marked, &mut bytes) {
            Err(Error(ErrorKind::PreconditionViolation(_), _)) => assert!(bytes.is_empty()),
            other => panic!("expected a precondition violation, got {:?}", other),
        }

        let path = scratch_file("marked");
        fs::write(&path, b"keep").unwrap();
        assert!(save(&marked, &path).is_err());
        let kept = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(kept, b"keep");
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let path = scratch_file("trailing");
        let mut bytes = to_bytes(&seeded_maze(5, 5, 4));
        bytes.push(b'#');
        fs::write(&path, &bytes).unwrap();
        let result = load(&path);
        fs::remove_file(&path).unwrap();

        match result {
            Err(Error(ErrorKind::CorruptMaze(_), _)) => (),
            other => panic!("expected corrupt maze, got {:?}", other),
        }
    }
}
