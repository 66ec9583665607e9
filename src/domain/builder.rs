// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document builder.
//!
//! Builds a document from an ordered list of `(key path, value)` pairs.

use crate::domain::document::Document;
use crate::domain::errors::Result;
use crate::domain::key_path::KeyPath;
use crate::domain::value::Value;

/// Builds a [`Document`] from ordered `(key path, value)` pairs.
///
/// Pairs are applied in order, so a later pair overwrites an earlier leaf.
/// Pairs with an empty or whitespace-only key are skipped.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::{DocumentBuilder, Value};
///
/// let doc = DocumentBuilder::new()
///     .pair("name", "alice")
///     .pair("meta.created", true)
///     .pair("", "ignored")
///     .build()?;
///
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.get_str("meta.created"), Some(&Value::Boolean(true)));
/// # Ok::<(), tomlcfg::domain::DocumentError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DocumentBuilder {
    base: Document,
    pairs: Vec<(String, Value)>,
}

impl DocumentBuilder {
    /// Creates a builder starting from an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder that extends an existing document.
    pub fn from_document(base: Document) -> Self {
        Self {
            base,
            pairs: Vec::new(),
        }
    }

    /// Appends a pair.
    pub fn pair(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Appends every pair from an iterator, in order.
    pub fn pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.pairs
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Returns the number of pairs added so far.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pairs have been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Applies every pair and returns the document.
    ///
    /// # Errors
    ///
    /// Fails on the first pair whose key path is invalid (other than blank) or
    /// runs through an existing non-table value.
    pub fn build(self) -> Result<Document> {
        let mut document = self.base;
        for (key, value) in self.pairs {
            if key.trim().is_empty() {
                tracing::debug!("Skipping pair with an empty key");
                continue;
            }
            let path = KeyPath::parse(key)?;
            document.set(&path, value)?;
        }
        Ok(document)
    }
}
