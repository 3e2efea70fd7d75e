use crate::cells::CellMarker;

pub trait GridDisplay {
    /// Render one grid position as a single printable glyph.
    fn render_marker(&self, marker: CellMarker) -> char;
}
