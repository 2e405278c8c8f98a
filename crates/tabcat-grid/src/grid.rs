//! The immutable cell grid produced by the parser.

/// Fixed three-character separator printed between adjacent columns.
pub const SEPARATOR: &str = " | ";

/// A parsed CSV file as a flat, row-major grid of text cells.
///
/// Cells are stored in one `Vec`, indexed as `x + width * y`. The invariant
/// `cells.len() == width * height` always holds: rows shorter than the
/// widest row were padded with empty cells at construction time. A `Grid`
/// is immutable after construction.
///
/// Column widths are byte lengths, not display widths. The input is CLI
/// data; multi-column Unicode alignment is out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<String>,
    width: usize,
    height: usize,
    max_row_len: usize,
}

impl Grid {
    /// Builds a grid from an already-padded flat cell list.
    pub(crate) fn new(cells: Vec<String>, width: usize, height: usize) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        let mut grid = Self {
            cells,
            width,
            height,
            max_row_len: 0,
        };
        grid.max_row_len = grid.printable_row_len();
        grid
    }

    /// Number of columns: the value count of the widest input row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total byte length of one rendered row: the sum of every column's
    /// widest cell, plus separator overhead between adjacent columns.
    pub fn max_row_len(&self) -> usize {
        self.max_row_len
    }

    /// The cell at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width()` or `y >= height()`.
    pub fn cell(&self, x: usize, y: usize) -> &str {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of range for {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[x + self.width * y]
    }

    /// The byte length of the longest cell in column `x`.
    ///
    /// Scans all rows on every call: O(height). Grids are small CLI inputs,
    /// not a hot path worth caching.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width()`.
    pub fn max_column_width(&self, x: usize) -> usize {
        assert!(x < self.width, "column {x} out of range for width {}", self.width);
        (0..self.height)
            .map(|y| self.cells[x + self.width * y].len())
            .max()
            .unwrap_or(0)
    }

    /// Iterates rows as cell slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        // chunks() panics on zero, and an empty grid has width zero.
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Total number of stored cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a grid with no cells (e.g. input that was all blank lines).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn printable_row_len(&self) -> usize {
        if self.width == 0 {
            return 0;
        }
        let cell_total: usize = (0..self.width).map(|x| self.max_column_width(x)).sum();
        cell_total + SEPARATOR.len() * (self.width - 1)
    }
}
