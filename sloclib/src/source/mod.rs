//! Source discovery: what to count and how to read it.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Language table**: known languages, their suffixes and comment syntax
//! - **Registry**: resolve a filename or a `-t` name to a `LanguageId`
//! - **Walker**: find the regular files under a path
//!
//! ## Example
//!
//! ```rust
//! use sloclib::source::{LanguageId, LanguageRegistry};
//!
//! let registry = LanguageRegistry::builtin();
//! let id = registry.resolve("src/main.c");
//! assert_eq!(registry.name(id), "C");
//! assert_eq!(registry.resolve("LICENSE"), LanguageId::Unknown);
//! ```

pub mod languages;
pub mod registry;
pub mod walker;

pub use languages::{BlockComment, CommentSyntax, LanguageSpec, LANGUAGES};
pub use registry::{LanguageId, LanguageRegistry, UNKNOWN_NAME};
pub use walker::walk_files;
