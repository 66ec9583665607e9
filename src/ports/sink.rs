// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document sink trait definition.
//!
//! This module defines the `DocumentSink` trait, the port through which
//! documents leave the system.

use crate::domain::{Document, Result};
use std::path::{Path, PathBuf};

/// What a sink did with a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The document was written to this path.
    Written(PathBuf),
    /// The path already existed and overwriting was not allowed.
    Skipped(PathBuf),
}

impl SaveOutcome {
    /// Returns the resolved target path.
    pub fn path(&self) -> &Path {
        match self {
            SaveOutcome::Written(path) | SaveOutcome::Skipped(path) => path,
        }
    }

    /// Returns `true` if the document was written.
    pub fn is_written(&self) -> bool {
        matches!(self, SaveOutcome::Written(_))
    }
}

/// A trait for document sinks.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::domain::{Document, Result};
/// use tomlcfg::ports::{DocumentSink, SaveOutcome};
/// use std::path::{Path, PathBuf};
///
/// struct DiscardSink;
///
/// impl DocumentSink for DiscardSink {
///     fn name(&self) -> &str {
///         "discard"
///     }
///
///     fn resolve(&self, filename: &Path) -> PathBuf {
///         filename.to_path_buf()
///     }
///
///     fn save(&self, _document: &Document, filename: &Path, _overwrite: bool) -> Result<SaveOutcome> {
///         Ok(SaveOutcome::Written(self.resolve(filename)))
///     }
/// }
///
/// let outcome = DiscardSink.save(&Document::new(), Path::new("out.toml"), true).unwrap();
/// assert!(outcome.is_written());
/// ```
pub trait DocumentSink: Send + Sync {
    /// Returns the name of this sink, used in logs and errors.
    fn name(&self) -> &str;

    /// Resolves a caller-supplied file name to the path the sink writes to.
    fn resolve(&self, filename: &Path) -> PathBuf;

    /// Persists `document` under `filename`.
    ///
    /// When the target exists and `overwrite` is `false`, nothing is written and
    /// [`SaveOutcome::Skipped`] is returned.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be rendered or written.
    fn save(&self, document: &Document, filename: &Path, overwrite: bool) -> Result<SaveOutcome>;
}
