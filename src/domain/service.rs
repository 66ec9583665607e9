// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document service trait definition.
//!
//! This module defines the `DocumentService` trait, the main interface for
//! working with configuration documents: load, look up, build, merge and save.
//! Service operations degrade gracefully; a missing file or a failed write is
//! logged rather than aborting the caller's pipeline.

use crate::domain::{Document, Result, Value, ValueView};
use crate::ports::DocumentSource;
use std::path::{Path, PathBuf};

/// The main document service trait.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::domain::{Document, DocumentService, Result, Value, ValueView};
/// use tomlcfg::ports::DocumentSource;
/// use std::path::{Path, PathBuf};
///
/// struct InMemoryService;
///
/// impl DocumentService for InMemoryService {
///     fn load(&self, _path: &Path) -> Document {
///         Document::new()
///     }
///
///     fn load_from(&self, source: &dyn DocumentSource) -> Document {
///         source.load().unwrap_or_default()
///     }
///
///     fn get_value(&self, document: &Document, key: &str, default: Option<&str>) -> ValueView {
///         ValueView::lookup_or_default(document, key, default.unwrap_or("0"))
///     }
///
///     fn create(&self, pairs: Vec<(String, Value)>) -> Result<Document> {
///         tomlcfg::domain::DocumentBuilder::new().pairs(pairs).build()
///     }
///
///     fn merge(&self, base: Option<&Document>, overlay: Option<&Document>) -> Document {
///         base.cloned().unwrap_or_default().merge(&overlay.cloned().unwrap_or_default())
///     }
///
///     fn save(&self, _document: &Document, filename: &Path, _overwrite: bool) -> PathBuf {
///         filename.to_path_buf()
///     }
/// }
/// ```
pub trait DocumentService {
    /// Loads a document from a file.
    ///
    /// A missing file or a parse failure is logged and yields an empty
    /// document.
    fn load(&self, path: &Path) -> Document;

    /// Loads a document from any source, with the same fallback as [`load`](Self::load).
    fn load_from(&self, source: &dyn DocumentSource) -> Document;

    /// Looks up `key` and returns its string, integer, float and raw views.
    ///
    /// When the key is not found the `default` string (or `"0"` when none is
    /// given) stands in for the value.
    fn get_value(&self, document: &Document, key: &str, default: Option<&str>) -> ValueView;

    /// Builds a document from ordered `(key path, value)` pairs.
    ///
    /// Pairs with a blank key are skipped.
    ///
    /// # Errors
    ///
    /// Fails when a key path is invalid or conflicts with an earlier pair.
    fn create(&self, pairs: Vec<(String, Value)>) -> Result<Document>;

    /// Deep-merges `overlay` on top of `base`; a missing input counts as empty.
    fn merge(&self, base: Option<&Document>, overlay: Option<&Document>) -> Document;

    /// Saves a document and returns the path it was meant to be written to.
    ///
    /// An existing file is only replaced when `overwrite` is `true`. Write
    /// failures are logged; the intended path is returned either way.
    fn save(&self, document: &Document, filename: &Path, overwrite: bool) -> PathBuf;
}
