//! Options controlling how a report is built.

use serde::{Deserialize, Serialize};

/// Report configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Append a synthetic `Total` row
    pub include_totals: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_totals: true,
        }
    }
}

impl ReportOptions {
    /// Default options: totals row included.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: include or suppress the totals row
    pub fn totals(mut self, include: bool) -> Self {
        self.include_totals = include;
        self
    }
}
