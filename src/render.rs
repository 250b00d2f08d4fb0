//! Plain-text rendering of grids for terminal output.

use crate::grid::{Cell, Grid};

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Blank => ' ',
        Cell::Start => 'A',
        Cell::End => 'B',
        Cell::Path => 'x',
    }
}

fn horizontal_border(width: usize) -> String {
    let mut line = String::with_capacity(2 * width + 1);
    for _ in 0..width {
        line.push_str("+-");
    }
    line.push('+');
    line
}

/// Render a grid as a bordered table, one character per cell, row 0 at the
/// top. The result ends with a newline.
pub fn to_text(grid: &Grid) -> String {
    let border = horizontal_border(grid.width());
    let mut out = String::new();
    for y in 0..grid.height() {
        out.push_str(&border);
        out.push('\n');
        for x in 0..grid.width() {
            out.push('|');
            out.push(glyph(grid.get(x, y)));
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out.push('\n');
    out
}
