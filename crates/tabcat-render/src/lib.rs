//! Aligned text-table rendering for [`Grid`]s.
//!
//! Walks the grid in row-major order, right-padding every cell to its
//! column's widest cell, joining columns with the fixed
//! [`SEPARATOR`](tabcat_grid::SEPARATOR), and following each row with a
//! dash rule spanning the printable row width. Output is plain bytes: no
//! styling, no truncation, no wrapping.
//!
//! ```rust
//! let grid = tabcat_grid::parse("a,bb\nccc,d\n").unwrap();
//! let table = tabcat_render::render_to_string(&grid);
//! assert_eq!(table, "a   | bb\n--------\nccc | d \n--------\n");
//! ```

use std::io::{self, Write};

use tabcat_grid::{Grid, SEPARATOR};

/// Renders the aligned table for `grid` into a `String`.
///
/// Every cell, including the last of each row, is padded to its column's
/// maximum width, so each text line is exactly `grid.max_row_len()` bytes
/// and every dash rule lines up with the text above it. An empty grid
/// renders as the empty string.
pub fn render_to_string(grid: &Grid) -> String {
    let widths: Vec<usize> = (0..grid.width())
        .map(|x| grid.max_column_width(x))
        .collect();
    let rule = "-".repeat(grid.max_row_len());

    // Two lines per row, each max_row_len bytes plus its newline.
    let mut out = String::with_capacity(grid.height() * (grid.max_row_len() + 1) * 2);
    for row in grid.rows() {
        for (x, cell) in row.iter().enumerate() {
            if x > 0 {
                out.push_str(SEPARATOR);
            }
            push_padded(&mut out, cell, widths[x]);
        }
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
    }
    out
}

/// Writes the aligned table for `grid` to `out`.
///
/// IO failures propagate unchanged; nothing is retried.
pub fn write_grid<W: Write>(grid: &Grid, out: &mut W) -> io::Result<()> {
    out.write_all(render_to_string(grid).as_bytes())
}

/// Appends `cell` right-padded with spaces to `width` bytes.
///
/// Padding is byte-based to match the byte-based column widths; a cell is
/// never truncated, only extended.
fn push_padded(out: &mut String, cell: &str, width: usize) {
    out.push_str(cell);
    for _ in cell.len()..width {
        out.push(' ');
    }
}
