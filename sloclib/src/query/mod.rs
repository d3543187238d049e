//! Query processing: filter, total and sort counted data.
//!
//! This module handles the third stage of the pipeline - turning a raw
//! `Tally` into report rows. It provides:
//!
//! - **Options**: whether the totals row is shown (`ReportOptions`)
//! - **Report**: sorted rows ready for presentation
//!
//! ## Example
//!
//! ```rust,ignore
//! use sloclib::query::{Report, ReportOptions};
//!
//! let report = Report::from_tally(&registry, &tally, ReportOptions::new().totals(false));
//! ```

pub mod options;
pub mod report;

pub use options::ReportOptions;
pub use report::{Report, ReportRow, TOTAL_LABEL};
