// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document source trait definition.
//!
//! This module defines the `DocumentSource` trait, the port through which
//! documents enter the system: files, command-line arguments, or anything else
//! that can produce a nested table.

use crate::domain::{Document, Result};

/// A trait for document sources.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a host can share them across
/// threads.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::domain::{Document, Result};
/// use tomlcfg::ports::DocumentSource;
///
/// struct FixedSource;
///
/// impl DocumentSource for FixedSource {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn load(&self) -> Result<Document> {
///         Document::new().with("name", "alice")
///     }
/// }
///
/// let document = FixedSource.load().unwrap();
/// assert!(document.get_str("name").is_some());
/// ```
pub trait DocumentSource: Send + Sync {
    /// Returns the name of this source.
    ///
    /// This name is used for logging, error messages, and debugging. It should be
    /// a short, descriptive identifier like "file" or "cli".
    fn name(&self) -> &str;

    /// Produces a document.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying data cannot be read or parsed.
    /// Callers that must not fail substitute an empty document.
    fn load(&self) -> Result<Document>;
}
