//! Report: per-language rows ready for rendering.
//!
//! A report sits between the raw [`Tally`] and the final table output. It
//! represents data that has been:
//! - Filtered to languages that saw at least one file
//! - Summed into a grand total (optionally shown as its own row)
//! - Sorted by code lines, highest first
//!
//! The data pipeline is:
//! 1. Raw data (`Tally`)
//! 2. Report (filtered, totalled, sorted)
//! 3. `LocTable` (formatted strings for display)

use serde::{Deserialize, Serialize};

use crate::data::stats::{LanguageTotals, Tally};
use crate::source::registry::LanguageRegistry;

use super::options::ReportOptions;

/// Label of the synthetic totals row.
pub const TOTAL_LABEL: &str = "Total";

/// One row of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Language name, `unknown`, or `Total`
    pub name: String,
    /// Whether this is the synthetic totals row
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_total: bool,
    #[serde(flatten)]
    pub totals: LanguageTotals,
}

/// Sorted rows plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Rows sorted by code lines, descending
    pub rows: Vec<ReportRow>,
    /// Sum over every language with files, whether or not a row shows it
    pub total: LanguageTotals,
}

impl Report {
    /// Build a report from a tally.
    ///
    /// Languages with no files are left out. Rows (the totals row included,
    /// when enabled) are sorted once by code lines, descending. The sort is
    /// stable, so ties keep table order and the totals row sorts after any
    /// language it ties with.
    pub fn from_tally(registry: &LanguageRegistry, tally: &Tally, options: ReportOptions) -> Self {
        let mut total = LanguageTotals::new();
        let mut rows: Vec<ReportRow> = tally
            .iter()
            .filter(|(_, totals)| totals.files != 0)
            .map(|(id, totals)| {
                total += *totals;
                ReportRow {
                    name: registry.name(id).to_string(),
                    is_total: false,
                    totals: *totals,
                }
            })
            .collect();

        if options.include_totals {
            rows.push(ReportRow {
                name: TOTAL_LABEL.to_string(),
                is_total: true,
                totals: total,
            });
        }

        rows.sort_by(|a, b| b.totals.code.cmp(&a.totals.code));

        Report { rows, total }
    }

    /// Rows for languages only, without the totals row.
    pub fn languages(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|row| !row.is_total)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::registry::LanguageId;

    fn totals(code: u64, files: u64) -> LanguageTotals {
        LanguageTotals {
            total: code + 1,
            code,
            comments: 1,
            blanks: 0,
            files,
        }
    }

    fn sample_tally(registry: &LanguageRegistry) -> Tally {
        let mut tally = Tally::new(registry.len());
        *tally.slot_mut(registry.lookup("C").unwrap()) = totals(40, 2);
        *tally.slot_mut(registry.lookup("Rust").unwrap()) = totals(90, 3);
        *tally.slot_mut(registry.lookup("Python").unwrap()) = totals(40, 1);
        *tally.slot_mut(LanguageId::Unknown) = LanguageTotals {
            total: 12,
            files: 4,
            ..Default::default()
        };
        tally
    }

    fn names(report: &Report) -> Vec<&str> {
        report.rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_rows_sorted_by_code_descending() {
        let registry = LanguageRegistry::builtin();
        let tally = sample_tally(&registry);

        let report = Report::from_tally(&registry, &tally, ReportOptions::new().totals(false));

        // C and Python tie on code; C comes first in the table
        assert_eq!(names(&report), vec!["Rust", "C", "Python", "unknown"]);
    }

    #[test]
    fn test_totals_row_participates_in_sort() {
        let registry = LanguageRegistry::builtin();
        let tally = sample_tally(&registry);

        let report = Report::from_tally(&registry, &tally, ReportOptions::new());

        assert_eq!(names(&report), vec!["Total", "Rust", "C", "Python", "unknown"]);
        let total_row = &report.rows[0];
        assert!(total_row.is_total);
        assert_eq!(total_row.totals.code, 170);
        assert_eq!(total_row.totals.files, 10);
        assert_eq!(total_row.totals.total, 41 + 91 + 41 + 12);
        assert_eq!(report.total, total_row.totals);
    }

    #[test]
    fn test_totals_row_ties_sort_after_language() {
        let registry = LanguageRegistry::builtin();
        let mut tally = Tally::new(registry.len());
        *tally.slot_mut(registry.lookup("Go").unwrap()) = totals(7, 1);

        let report = Report::from_tally(&registry, &tally, ReportOptions::new());

        assert_eq!(names(&report), vec!["Go", "Total"]);
    }

    #[test]
    fn test_languages_without_files_are_omitted() {
        let registry = LanguageRegistry::builtin();
        let tally = Tally::new(registry.len());

        let report = Report::from_tally(&registry, &tally, ReportOptions::new().totals(false));
        assert!(report.is_empty());

        let report = Report::from_tally(&registry, &tally, ReportOptions::new());
        assert_eq!(names(&report), vec!["Total"]);
        assert_eq!(report.rows[0].totals, LanguageTotals::new());
    }

    #[test]
    fn test_languages_iterator_skips_total() {
        let registry = LanguageRegistry::builtin();
        let tally = sample_tally(&registry);
        let report = Report::from_tally(&registry, &tally, ReportOptions::new());

        assert_eq!(report.languages().count(), 4);
        assert!(report.languages().all(|r| !r.is_total));
    }
}
