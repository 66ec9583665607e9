// SPDX-License-Identifier: MIT OR Apache-2.0

//! TOML document format.

use crate::domain::{Document, DocumentError, Result};
use crate::ports::DocumentFormat;

/// TOML format implementation.
///
/// Datetimes are read as their RFC 3339 strings and written back as strings.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::adapters::TomlFormat;
/// use tomlcfg::domain::Value;
/// use tomlcfg::ports::DocumentFormat;
///
/// let format = TomlFormat::new();
/// let document = format.parse("[database]\nhost = \"localhost\"\nport = 5432").unwrap();
/// assert_eq!(document.get_str("database.port"), Some(&Value::Integer(5432)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlFormat;

impl TomlFormat {
    /// Creates a new TOML format.
    pub fn new() -> Self {
        TomlFormat
    }
}

impl DocumentFormat for TomlFormat {
    fn name(&self) -> &str {
        "toml"
    }

    fn parse(&self, content: &str) -> Result<Document> {
        toml::from_str(content).map_err(|e| DocumentError::parse("TOML", e))
    }

    fn render(&self, document: &Document) -> Result<String> {
        toml::to_string(document).map_err(|e| DocumentError::render("TOML", e))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["toml"]
    }
}
