//! Output formatting: present reports as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting a report for display. It provides:
//!
//! - **LocTable**: headers, pre-formatted rows and column widths
//! - **TableRow**: one row of cell strings
//!
//! ## Example
//!
//! ```rust,ignore
//! use sloclib::output::LocTable;
//!
//! let table = LocTable::from_report(&report);
//! print!("{table}");
//! ```

pub mod table;

pub use table::{LocTable, TableRow, HEADERS};
