//! # sloclib
//!
//! A lines of code counter library that separates code, comment and blank
//! lines per language.
//!
//! ## Overview
//!
//! Files are assigned a language by filename suffix. Each line of a file is
//! then classified by a small state machine that knows the language's line
//! comment token and block comment delimiters, and tracks whether a block
//! comment is open across lines. A line holding code in front of a comment
//! counts as both code and comment.
//!
//! Files no language claims are counted in an `unknown` bucket, by physical
//! lines only.
//!
//! ## Pipeline
//!
//! - **source**: language table, suffix resolution, file discovery
//! - **data**: line classification and per-language counters
//! - **query**: filtering, grand total and sorting into a `Report`
//! - **output**: aligned table rendering (`LocTable`)
//!
//! ## Example
//!
//! ```rust
//! use sloclib::{count_directory, LanguageRegistry, LocTable, Report, ReportOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.c"), "int main(void) {\n    return 0; /* ok */\n}\n").unwrap();
//!
//! let tally = count_directory(dir.path()).unwrap();
//! let report = Report::from_tally(&LanguageRegistry::builtin(), &tally, ReportOptions::new());
//! assert_eq!(report.total.code, 3);
//! assert_eq!(report.total.comments, 1);
//!
//! print!("{}", LocTable::from_report(&report));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{count_directory, count_file, Counter, LanguageTotals, LineClass, ScanState, Tally};
pub use error::SlocError;
pub use output::{LocTable, TableRow};
pub use query::{Report, ReportOptions, ReportRow};
pub use source::{LanguageId, LanguageRegistry, LanguageSpec, LANGUAGES};

/// Result type for sloclib operations
pub type Result<T> = std::result::Result<T, SlocError>;
