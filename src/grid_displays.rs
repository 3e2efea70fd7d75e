use std::fmt;

use crate::cells::CellMarker;
use crate::grid_traits::GridDisplay;
use crate::maze::Maze;
use crate::pathing::SolvedMaze;

/// The same glyphs the maze file format stores: `#` walls, blank passages, `.` path.
#[derive(Debug, Copy, Clone, Default)]
pub struct AsciiGlyphs;

impl GridDisplay for AsciiGlyphs {
    fn render_marker(&self, marker: CellMarker) -> char {
        marker.as_byte() as char
    }
}

/// Solid block walls, easier on the eye in a terminal.
#[derive(Debug, Copy, Clone, Default)]
pub struct BlockGlyphs;

impl GridDisplay for BlockGlyphs {
    fn render_marker(&self, marker: CellMarker) -> char {
        match marker {
            CellMarker::Wall => '█',
            CellMarker::Open => ' ',
            CellMarker::Path => '·',
        }
    }
}

impl<'a, D: GridDisplay + ?Sized> GridDisplay for &'a D {
    fn render_marker(&self, marker: CellMarker) -> char {
        (**self).render_marker(marker)
    }
}

fn write_rows<I: Iterator<Item = String>>(f: &mut fmt::Formatter, rows: I) -> fmt::Result {
    for row in rows {
        writeln!(f, "{}", row)?;
    }
    Ok(())
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_rows(f, self.render_with(AsciiGlyphs))
    }
}

impl fmt::Display for SolvedMaze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_rows(f, self.render_with(AsciiGlyphs))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn ascii_matches_file_bytes() {
        assert_eq!(AsciiGlyphs.render_marker(CellMarker::Wall), '#');
        assert_eq!(AsciiGlyphs.render_marker(CellMarker::Open), ' ');
        assert_eq!(AsciiGlyphs.render_marker(CellMarker::Path), '.');
    }

    #[test]
    fn block_glyphs_are_distinct() {
        let glyphs = [BlockGlyphs.render_marker(CellMarker::Wall),
                      BlockGlyphs.render_marker(CellMarker::Open),
                      BlockGlyphs.render_marker(CellMarker::Path)];
        assert_ne!(glyphs[0], glyphs[1]);
        assert_ne!(glyphs[1], glyphs[2]);
        assert_ne!(glyphs[0], glyphs[2]);
    }

    #[test]
    fn display_is_one_line_per_row() {
        let maze = Maze::default();
        assert_eq!(format!("{}", maze), "");
    }
}
