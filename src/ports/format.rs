// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document format trait definition.
//!
//! This module defines the `DocumentFormat` trait, which provides an interface
//! for reading and writing documents as text in a particular serialization
//! format (TOML, YAML, etc.).

use crate::domain::{Document, Result};
use std::fmt::Debug;

/// A trait for text serialization formats.
///
/// Implementations turn text into a nested [`Document`] and back. Comments and
/// formatting are not preserved across a round trip.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::domain::{Document, Result};
/// use tomlcfg::ports::DocumentFormat;
///
/// #[derive(Debug)]
/// struct KeyEqualsValue;
///
/// impl DocumentFormat for KeyEqualsValue {
///     fn name(&self) -> &str {
///         "kv"
///     }
///
///     fn parse(&self, content: &str) -> Result<Document> {
///         let mut document = Document::new();
///         for (key, value) in content.lines().filter_map(|line| line.split_once('=')) {
///             document.set_str(key.trim(), value.trim())?;
///         }
///         Ok(document)
///     }
///
///     fn render(&self, document: &Document) -> Result<String> {
///         Ok(document
///             .iter()
///             .map(|(key, value)| format!("{}={}\n", key, value))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let format = KeyEqualsValue;
/// let document = format.parse("a.b = 1").unwrap();
/// assert!(document.get_str("a.b").is_some());
/// ```
pub trait DocumentFormat: Debug + Send + Sync {
    /// Returns a short name for the format, used in logs and errors.
    fn name(&self) -> &str;

    /// Parses text into a document.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`](crate::domain::DocumentError::ParseError) when the
    /// text is malformed or its root is not a table.
    fn parse(&self, content: &str) -> Result<Document>;

    /// Renders a document as text.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`](crate::domain::DocumentError::RenderError) when the
    /// document cannot be expressed in this format.
    fn render(&self, document: &Document) -> Result<String>;

    /// Returns the file extensions handled by this format, without the leading dot.
    ///
    /// This allows file adapters to pick a format from a path.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if `extension` (without the dot) belongs to this format.
    fn handles_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(extension))
    }
}
