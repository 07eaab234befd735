use std::io::{self, Write};

use crate::model::ReportLine;

/// Spaces added after the widest cell of each column.
pub const COLUMN_PADDING: usize = 10;

/// Sorted report lines for a single scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    /// Build a report from lines collected in any order.
    pub fn new(mut lines: Vec<ReportLine>) -> Self {
        lines.sort();
        Report { lines }
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write the report as a table, padding every cell but the last of each
    /// row to its column's widest cell plus [`COLUMN_PADDING`].
    pub fn render<W: Write>(&self, mut out: W) -> io::Result<()> {
        let widths = self.column_widths();
        for line in &self.lines {
            let cells: Vec<&str> = line.cells().collect();
            let (last, leading) = match cells.split_last() {
                Some(split) => split,
                None => continue,
            };
            for (column, cell) in leading.iter().enumerate() {
                write!(out, "{}", cell)?;
                let pad = widths[column] - cell_width(cell);
                write!(out, "{:pad$}", "")?;
            }
            writeln!(out, "{}", last)?;
        }
        out.flush()
    }

    /// Render into a string; mainly useful for tests and logging.
    pub fn to_table(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for line in &self.lines {
            let cells: Vec<&str> = line.cells().collect();
            let leading = cells.len().saturating_sub(1);
            for (column, cell) in cells.iter().take(leading).enumerate() {
                let width = cell_width(cell) + COLUMN_PADDING;
                match widths.get_mut(column) {
                    Some(existing) => *existing = (*existing).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}
