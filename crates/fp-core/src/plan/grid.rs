//! Rectangular character grid

use super::Cell;

/// An immutable floor plan: rows of characters, all of the same width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl Grid {
    /// Build a grid from raw rows, padding short rows with blanks.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let cells = rows
            .into_iter()
            .map(|mut row| {
                row.resize(cols, ' ');
                row
            })
            .collect();
        Self { cells, cols }
    }

    /// Parse plan text.
    ///
    /// Strips a leading byte order mark and trailing whitespace on every
    /// line, then pads rows to the longest line. Width is counted in chars.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self::from_rows(text.lines().map(|line| line.trim_end().chars().collect()).collect())
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True for a grid with no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols == 0
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols
    }

    pub fn get(&self, cell: Cell) -> Option<char> {
        self.cells.get(cell.row)?.get(cell.col).copied()
    }

    /// Characters of one row, or an empty slice past the last row
    pub fn row(&self, row: usize) -> &[char] {
        self.cells.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    /// Number of cells holding `symbol`
    pub fn count(&self, symbol: char) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == symbol).count()
    }
}
