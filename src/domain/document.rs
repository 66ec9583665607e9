// SPDX-License-Identifier: MIT OR Apache-2.0

//! The document type.
//!
//! A `Document` is a nested, string-keyed table: one whole configuration tree.
//! Values inside it are addressed with dotted [`KeyPath`]s and two documents
//! combine with a deep merge.

use crate::domain::errors::Result;
use crate::domain::key_path::KeyPath;
use crate::domain::value::Value;
use crate::domain::{merge, path};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// A nested configuration table.
///
/// Keys are kept in sorted order so rendering is deterministic. Documents are
/// plain owned trees: cloning one never shares nested tables with the original.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::{Document, Value};
///
/// let doc = Document::new()
///     .with("server.host", "localhost")?
///     .with("server.port", 8080)?;
///
/// assert_eq!(doc.get_str("server.port"), Some(&Value::Integer(8080)));
/// assert_eq!(doc.get_str("server.missing"), None);
/// # Ok::<(), tomlcfg::domain::DocumentError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "toml::Table", into = "toml::Table")]
pub struct Document(pub(crate) BTreeMap<String, Value>);

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Document(BTreeMap::new())
    }

    /// Returns `true` if the document has no top-level keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if a top-level key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the top-level value stored under `key`, without path splitting.
    pub fn entry(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Inserts a top-level value under `key`, without path splitting.
    ///
    /// Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a top-level key.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Iterates over the top-level keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over the top-level entries in sorted key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Looks up the value at `path`.
    ///
    /// Returns `None` when a segment is missing or when an intermediate segment
    /// holds something other than a table. Never mutates the document.
    pub fn get(&self, path: &KeyPath) -> Option<&Value> {
        path::lookup(self, path)
    }

    /// Looks up the value at a dotted key given as a string.
    ///
    /// An invalid key path is reported the same way as a missing key.
    ///
    /// # Examples
    ///
    /// ```
    /// use tomlcfg::domain::{Document, Value};
    ///
    /// let doc = Document::new().with("a.b", 1)?;
    /// assert_eq!(doc.get_str("a.b"), Some(&Value::Integer(1)));
    /// assert_eq!(doc.get_str("a.b.c"), None);
    /// assert_eq!(doc.get_str("a..b"), None);
    /// # Ok::<(), tomlcfg::domain::DocumentError>(())
    /// ```
    pub fn get_str(&self, path: &str) -> Option<&Value> {
        KeyPath::parse(path)
            .ok()
            .and_then(|path| path::lookup(self, &path))
    }

    /// Returns `true` if a value exists at `path`.
    pub fn has(&self, path: &KeyPath) -> bool {
        self.get(path).is_some()
    }

    /// Assigns `value` at `path`, creating intermediate tables as needed.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::PathConflict`](crate::domain::DocumentError::PathConflict)
    /// when an intermediate segment already holds a non-table value. The
    /// document is left unchanged in that case.
    pub fn set(&mut self, path: &KeyPath, value: impl Into<Value>) -> Result<()> {
        path::insert(self, path, value.into())
    }

    /// Assigns `value` at a dotted key given as a string.
    ///
    /// # Errors
    ///
    /// Fails when the key path is invalid or conflicts with an existing value.
    pub fn set_str(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let path = KeyPath::parse(path)?;
        self.set(&path, value)
    }

    /// Consumes the document and returns it extended with `value` at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the key path is invalid or conflicts with an existing value.
    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Result<Self> {
        self.set_str(path, value)?;
        Ok(self)
    }

    /// Deep-merges `overlay` on top of this document, returning a new document.
    ///
    /// Nested tables present in both are merged key by key; every other
    /// conflict is won by `overlay`. Neither input is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use tomlcfg::domain::{Document, Value};
    ///
    /// let base = Document::new().with("x.p", 1)?.with("x.q", 2)?;
    /// let overlay = Document::new().with("x.q", 3)?.with("x.r", 4)?;
    ///
    /// let merged = base.merge(&overlay);
    /// assert_eq!(merged.get_str("x.p"), Some(&Value::Integer(1)));
    /// assert_eq!(merged.get_str("x.q"), Some(&Value::Integer(3)));
    /// assert_eq!(merged.get_str("x.r"), Some(&Value::Integer(4)));
    /// # Ok::<(), tomlcfg::domain::DocumentError>(())
    /// ```
    pub fn merge(&self, overlay: &Document) -> Document {
        merge::deep_merge(self, overlay)
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.0
    }

    /// Consumes the document and returns the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl From<BTreeMap<String, Value>> for Document {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Document(map)
    }
}

impl From<toml::Table> for Document {
    fn from(table: toml::Table) -> Self {
        table
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect()
    }
}

impl From<Document> for toml::Table {
    fn from(document: Document) -> Self {
        document
            .0
            .into_iter()
            .map(|(key, value)| (key, toml::Value::from(value)))
            .collect()
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Document(iter.into_iter().collect())
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
