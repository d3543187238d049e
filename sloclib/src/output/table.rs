//! Table-ready data structures for line-count output.
//!
//! This module provides `LocTable`, a presentation-ready data structure
//! that can be rendered as aligned text or serialized to JSON.
//!
//! The data flow is:
//! 1. Raw data (`Tally`)
//! 2. Report (filtered, totalled, sorted)
//! 3. LocTable (formatted strings and column widths)
//!
//! LocTable is a pure presentation layer - it only formats data, no filtering
//! or sorting logic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::report::{Report, ReportRow};

/// Column headers, in display order.
pub const HEADERS: [&str; 6] = ["Language", "Files", "Code", "Comment", "Blank", "Total"];

/// Gap between columns.
const SEPARATOR: &str = "  ";

/// A single row in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// One string per column, in `HEADERS` order
    pub cells: Vec<String>,
    /// Whether this is the totals row
    pub is_total: bool,
}

impl TableRow {
    fn from_report_row(row: &ReportRow) -> Self {
        let t = &row.totals;
        TableRow {
            cells: vec![
                row.name.clone(),
                t.files.to_string(),
                t.code.to_string(),
                t.comments.to_string(),
                t.blanks.to_string(),
                t.total.to_string(),
            ],
            is_total: row.is_total,
        }
    }
}

/// Table-ready line-count data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocTable {
    /// Column headers
    pub headers: Vec<String>,
    /// Data rows, already sorted
    pub rows: Vec<TableRow>,
    /// Width of each column: the widest of its header and values
    pub widths: Vec<usize>,
}

impl LocTable {
    /// Create a LocTable from a Report.
    pub fn from_report(report: &Report) -> Self {
        let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        let rows: Vec<TableRow> = report.rows.iter().map(TableRow::from_report_row).collect();
        let widths = column_widths(&headers, &rows);

        LocTable {
            headers,
            rows,
            widths,
        }
    }

    /// Right-align `cells` to the column widths.
    pub fn format_line(&self, cells: &[String]) -> String {
        let line = cells
            .iter()
            .zip(&self.widths)
            .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        line.trim_end().to_string()
    }

    /// Formatted header line.
    pub fn header_line(&self) -> String {
        self.format_line(&self.headers)
    }
}

impl fmt::Display for LocTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header_line())?;
        for row in &self.rows {
            writeln!(f, "{}", self.format_line(&row.cells))?;
        }
        Ok(())
    }
}

/// Per column, the widest of the header and every row's value.
fn column_widths(headers: &[String], rows: &[TableRow]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.len());
        }
    }
    widths
}
