// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted key path newtype.
//!
//! This module provides the `KeyPath` type, a validated wrapper around `String`
//! that addresses a single value inside a nested document, e.g.
//! `section.subsection.name`.

use crate::domain::errors::{DocumentError, Result};
use std::fmt;
use std::str::FromStr;

/// The separator between key path segments.
pub const SEPARATOR: char = '.';

/// A validated, dot-delimited path to a value inside a document.
///
/// A dot is always a separator; there is no escaping for literal dots in
/// segment names. A key path is valid when it is non-empty and none of its
/// segments are empty or whitespace-only.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::key_path::KeyPath;
///
/// let path = KeyPath::parse("database.connection.host").unwrap();
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["database", "connection", "host"]);
/// assert_eq!(path.leaf(), "host");
///
/// assert!(KeyPath::parse("database..host").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath(String);

impl KeyPath {
    /// Parses and validates a key path.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidKeyPath`] when the path is empty or has an
    /// empty or whitespace-only segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use tomlcfg::domain::key_path::KeyPath;
    ///
    /// assert!(KeyPath::parse("app.name").is_ok());
    /// assert!(KeyPath::parse("").is_err());
    /// assert!(KeyPath::parse("app. .name").is_err());
    /// ```
    pub fn parse(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(DocumentError::invalid_key_path(path, "key path is empty"));
        }
        if path.split(SEPARATOR).any(|segment| segment.trim().is_empty()) {
            return Err(DocumentError::invalid_key_path(
                path,
                "key path contains an empty segment",
            ));
        }
        Ok(KeyPath(path))
    }

    /// Returns the key path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `KeyPath` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the segments of the path, from the root to the leaf.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// Returns the number of segments.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Returns the final segment, the key the value is stored under.
    ///
    /// # Examples
    ///
    /// ```
    /// use tomlcfg::domain::key_path::KeyPath;
    ///
    /// assert_eq!(KeyPath::parse("a.b.c").unwrap().leaf(), "c");
    /// assert_eq!(KeyPath::parse("top").unwrap().leaf(), "top");
    /// ```
    pub fn leaf(&self) -> &str {
        match self.0.rsplit_once(SEPARATOR) {
            Some((_, leaf)) => leaf,
            None => &self.0,
        }
    }

    /// Returns every segment except the leaf, from the root down.
    ///
    /// # Examples
    ///
    /// ```
    /// use tomlcfg::domain::key_path::KeyPath;
    ///
    /// let path = KeyPath::parse("a.b.c").unwrap();
    /// assert_eq!(path.parents().collect::<Vec<_>>(), ["a", "b"]);
    /// assert_eq!(KeyPath::parse("top").unwrap().parents().count(), 0);
    /// ```
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(parents, _)| parents)
            .into_iter()
            .flat_map(|parents| parents.split(SEPARATOR))
    }
}

impl FromStr for KeyPath {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        KeyPath::parse(s)
    }
}

impl TryFrom<&str> for KeyPath {
    type Error = DocumentError;

    fn try_from(s: &str) -> Result<Self> {
        KeyPath::parse(s)
    }
}

impl TryFrom<String> for KeyPath {
    type Error = DocumentError;

    fn try_from(s: String) -> Result<Self> {
        KeyPath::parse(s)
    }
}

impl From<KeyPath> for String {
    fn from(path: KeyPath) -> Self {
        path.0
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
