//! Language resolution: filename suffix or display name to `LanguageId`.

use serde::Serialize;

use crate::error::SlocError;
use crate::Result;

use super::languages::{CommentSyntax, LanguageSpec, LANGUAGES};

/// Display name of the bucket for files no language claims.
pub const UNKNOWN_NAME: &str = "unknown";

/// Which totals slot a stream belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LanguageId {
    /// Index into the registry's language table
    Known(usize),
    /// No suffix matched; only physical lines are counted
    Unknown,
}

/// An ordered set of languages to resolve against.
#[derive(Debug, Clone, Copy)]
pub struct LanguageRegistry {
    languages: &'static [LanguageSpec],
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageRegistry {
    /// Registry over the built-in language table.
    pub fn builtin() -> Self {
        Self {
            languages: LANGUAGES,
        }
    }

    /// Registry over a caller-supplied table.
    pub fn with_languages(languages: &'static [LanguageSpec]) -> Self {
        Self { languages }
    }

    /// All languages, in resolution order.
    pub fn languages(&self) -> &'static [LanguageSpec] {
        self.languages
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Resolve a filename by suffix.
    ///
    /// Plain case-sensitive `ends_with` on the whole name; no path or
    /// extension parsing. The first language with a matching suffix wins.
    pub fn resolve(&self, filename: &str) -> LanguageId {
        self.languages
            .iter()
            .position(|lang| lang.extensions.iter().any(|ext| filename.ends_with(ext)))
            .map_or(LanguageId::Unknown, LanguageId::Known)
    }

    /// Find a language by display name, ignoring ASCII case.
    pub fn lookup(&self, name: &str) -> Result<LanguageId> {
        self.languages
            .iter()
            .position(|lang| lang.name.eq_ignore_ascii_case(name))
            .map(LanguageId::Known)
            .ok_or_else(|| SlocError::UnknownLanguage(name.to_string()))
    }

    /// Spec for a known language.
    pub fn get(&self, id: LanguageId) -> Option<&'static LanguageSpec> {
        match id {
            LanguageId::Known(idx) => self.languages.get(idx),
            LanguageId::Unknown => None,
        }
    }

    /// Display name for a slot.
    pub fn name(&self, id: LanguageId) -> &'static str {
        self.get(id).map_or(UNKNOWN_NAME, |lang| lang.name)
    }

    /// Comment syntax for a slot; `None` for the unknown bucket, which is
    /// never classified.
    pub fn comments(&self, id: LanguageId) -> Option<CommentSyntax> {
        self.get(id).map(|lang| lang.comments)
    }
}
