//! Line counting over streams, files and directory trees.
//!
//! [`count_stream`] is the inner loop: it reads one stream to the end,
//! classifying every line into a [`LanguageTotals`]. [`Counter`] drives it
//! for the different inputs the CLI accepts and owns the resulting
//! [`Tally`].
//!
//! Per-file failures never abort a scan. A file that cannot be opened
//! contributes nothing; a read error part-way through keeps the lines
//! counted so far. Both are reported at `debug` level only.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, enabled, trace, Level};

use crate::error::SlocError;
use crate::source::languages::CommentSyntax;
use crate::source::registry::{LanguageId, LanguageRegistry};
use crate::source::walker::walk_files;
use crate::Result;

use super::classifier::LineClassifier;
use super::stats::{LanguageTotals, Tally};

/// Count one stream into `totals`.
///
/// `files` goes up by one before anything is read, so an empty stream still
/// counts as a file. With `syntax` of `None` (the unknown bucket) lines are
/// only counted, never classified. Classifier state lives for this call
/// only.
pub fn count_stream<R: BufRead>(
    mut reader: R,
    syntax: Option<CommentSyntax>,
    totals: &mut LanguageTotals,
) -> io::Result<()> {
    totals.files += 1;

    let mut classifier = syntax.map(LineClassifier::new);
    let mut line = Vec::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }
        line_no += 1;

        let Some(classifier) = classifier.as_mut() else {
            totals.record_unclassified();
            continue;
        };

        let class = classifier.classify(&line);
        totals.record(class);

        if enabled!(Level::TRACE) {
            trace!(
                "{line_no}: {}: {}",
                class.label(),
                String::from_utf8_lossy(&line).trim_end()
            );
        }
    }
}

/// Accumulates line counts across any number of inputs.
#[derive(Debug, Clone)]
pub struct Counter {
    registry: LanguageRegistry,
    tally: Tally,
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(LanguageRegistry::builtin())
    }
}

impl Counter {
    /// Create a counter with a zeroed tally for `registry`.
    pub fn new(registry: LanguageRegistry) -> Self {
        Self {
            registry,
            tally: Tally::new(registry.len()),
        }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn into_tally(self) -> Tally {
        self.tally
    }

    /// Count a stream already known to be in language `id`.
    pub fn count_reader<R: BufRead>(&mut self, reader: R, id: LanguageId) -> Result<()> {
        let syntax = self.registry.comments(id);
        count_stream(reader, syntax, self.tally.slot_mut(id))?;
        Ok(())
    }

    /// Count a stream in the language called `name` (the `-t` case).
    ///
    /// An unknown name is an error and nothing is counted.
    pub fn count_named<R: BufRead>(&mut self, reader: R, name: &str) -> Result<LanguageId> {
        let id = self.registry.lookup(name)?;
        self.count_reader(reader, id)?;
        Ok(id)
    }

    /// Count one file, choosing the language by its name.
    pub fn count_file(&mut self, path: impl AsRef<Path>) -> Result<LanguageId> {
        let path = path.as_ref();
        let id = self.registry.resolve(&path.to_string_lossy());
        let file = File::open(path).map_err(|e| SlocError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let syntax = self.registry.comments(id);
        count_stream(BufReader::new(file), syntax, self.tally.slot_mut(id)).map_err(|e| {
            SlocError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
        Ok(id)
    }

    /// Count a file, or every regular file under a directory.
    ///
    /// Never fails: unreadable entries are logged and skipped. Returns how
    /// many files were counted.
    pub fn count_path(&mut self, path: impl AsRef<Path>) -> usize {
        let mut counted = 0;
        for file in walk_files(path) {
            match self.count_file(&file) {
                Ok(id) => {
                    debug!("{}: {}", file.display(), self.registry.name(id));
                    counted += 1;
                }
                Err(err) => debug!("skipping: {err}"),
            }
        }
        counted
    }

    /// Read newline-separated paths from `reader` and count each (the `-`
    /// case). Blank entries are ignored.
    pub fn count_path_list<R: BufRead>(&mut self, mut reader: R) -> Result<usize> {
        let mut counted = 0;
        let mut entry = Vec::new();
        loop {
            entry.clear();
            if reader.read_until(b'\n', &mut entry)? == 0 {
                return Ok(counted);
            }
            let name = String::from_utf8_lossy(&entry);
            let name = name.trim_end_matches('\n').trim_end_matches('\r');
            if !name.is_empty() {
                counted += self.count_path(name);
            }
        }
    }
}

/// Count every regular file under `path` with the built-in languages.
///
/// Unlike [`Counter::count_path`], a missing `path` is an error.
pub fn count_directory(path: impl AsRef<Path>) -> Result<Tally> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SlocError::PathNotFound(path.to_path_buf()));
    }

    let mut counter = Counter::default();
    counter.count_path(path);
    Ok(counter.into_tally())
}

/// Count a single file with the built-in languages.
pub fn count_file(path: impl AsRef<Path>) -> Result<(LanguageId, LanguageTotals)> {
    let mut counter = Counter::default();
    let id = counter.count_file(path)?;
    Ok((id, counter.tally().get(id)))
}
