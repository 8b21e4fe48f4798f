//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Left-align `s` on `width` terminal cells.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = headers
            .into_iter()
            .map(|h| {
                let header = h.into();
                let width = UnicodeWidthStr::width(header.as_str());
                Column { header, width }
            })
            .collect();

        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Rows shorter than the header are padded with empty cells, extra
    /// cells are dropped.
    pub fn add_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_right(&c.header, c.width))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(row)
                .map(|(col, cell)| pad_right(cell, col.width))
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_grow_to_the_widest_cell() {
        let mut t = Table::new(["#", "Station"]);
        t.add_row(vec!["0".into(), "Clark St".into()]);
        t.add_row(vec!["10".into(), "A".into()]);

        assert_eq!(t.render(), "#   Station\n0   Clark St\n10  A\n");
    }

    #[test]
    fn short_rows_are_padded() {
        let mut t = Table::new(["a", "b", "c"]);
        t.add_row(vec!["1".into()]);
        assert_eq!(t.rows[0], vec!["1", "", ""]);
        assert_eq!(t.render(), "a  b  c\n1\n");
    }

    #[test]
    fn width_counts_terminal_cells() {
        let mut t = Table::new(["name", "x"]);
        t.add_row(vec!["Café".into(), "1".into()]);
        assert_eq!(t.render(), "name  x\nCafé  1\n");
    }
}
