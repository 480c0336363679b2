//! Field module - one player's well as reported by the server
//!
//! The server resends the whole grid on every update, so rows are replaced
//! wholesale and never merged. Dimensions come from the data itself; the
//! configured field size is not enforced here.

/// Row-major cell grid; 0 is empty, 1 is occupied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    rows: Vec<Vec<i32>>,
}

impl Field {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Replace the whole grid
    pub fn replace_rows(&mut self, rows: Vec<Vec<i32>>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    /// Number of rows received so far
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cells in the first row, zero before any update
    pub fn width(&self) -> usize {
        self.rows.first().map(|row| row.len()).unwrap_or(0)
    }

    /// Cell value, if in bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<i32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}
