//! Fixed-width plain text tables.
//!
//! ```text
//! ====================
//!       intr  1s  2s
//! --------------------
//!   1s  a         b
//!   2s        c
//! ====================
//! ```
//!
//! Every row is indented and terminated by two spaces, cells are left-aligned
//! and separated by two spaces, and each column is as wide as its widest
//! cell, header included.

use std::fmt;

/// A header row followed by data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Append a data row. Short rows are padded with empty cells when
    /// rendered.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Column widths in characters.
    fn widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.header.len()];
        for row in std::iter::once(&self.header).chain(&self.rows) {
            if widths.len() < row.len() {
                widths.resize(row.len(), 0);
            }
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn render_row(row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map(String::as_str).unwrap_or("");
                format!("{cell:<width$}")
            })
            .collect();
        format!("  {}  ", cells.join("  "))
    }

    /// Render the table, one line per entry, without a trailing newline.
    ///
    /// The `-` separator only appears with two or more data rows; a single
    /// data row follows the header directly.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let head = Self::render_row(&self.header, &widths);
        let width = head.chars().count();
        let border = "=".repeat(width);

        let mut lines = vec![border.clone(), head];
        if self.rows.len() > 1 {
            lines.push("-".repeat(width));
        }
        lines.extend(self.rows.iter().map(|row| Self::render_row(row, &widths)));
        lines.push(border);
        lines.join("\n")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
