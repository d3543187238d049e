//! Data collection: classify lines and accumulate statistics.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Classification**: the per-line state machine (`LineClassifier`)
//! - **Statistics**: per-language counters (`LanguageTotals`, `Tally`)
//! - **Counting**: stream, file and tree counting (`Counter`)
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use sloclib::data::Counter;
//!
//! let mut counter = Counter::default();
//! let id = counter.count_named(Cursor::new("int x = 1; // set x\n"), "C").unwrap();
//! let totals = counter.tally().get(id);
//! assert_eq!((totals.code, totals.comments), (1, 1));
//! ```

pub mod classifier;
pub mod counter;
pub mod stats;

pub use classifier::{LineClass, LineClassifier, Markers, Rule, ScanState, RULES};
pub use counter::{count_directory, count_file, count_stream, Counter};
pub use stats::{LanguageTotals, Tally};
