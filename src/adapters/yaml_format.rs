// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document format.

use crate::domain::{Document, DocumentError, Result, Value};
use crate::ports::DocumentFormat;

/// YAML format implementation.
///
/// YAML is richer than the document model, so a few things are dropped on
/// parse: `null` entries, mapping entries whose key is not a string, and YAML
/// tags (the tagged value itself is kept).
///
/// # Examples
///
/// ```rust
/// use tomlcfg::adapters::YamlFormat;
/// use tomlcfg::domain::Value;
/// use tomlcfg::ports::DocumentFormat;
///
/// let format = YamlFormat::new();
/// let document = format.parse("database:\n  host: localhost\n  port: 5432").unwrap();
/// assert_eq!(document.get_str("database.host"), Some(&Value::from("localhost")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl YamlFormat {
    /// Creates a new YAML format.
    pub fn new() -> Self {
        YamlFormat
    }

    fn convert_mapping(mapping: serde_yaml::Mapping) -> Document {
        let mut document = Document::new();
        for (key, value) in mapping {
            match key {
                serde_yaml::Value::String(key) => {
                    if let Some(value) = Self::convert_value(value) {
                        document.insert(key, value);
                    }
                }
                other => {
                    tracing::debug!("Skipping YAML entry with non-string key: {:?}", other);
                }
            }
        }
        document
    }

    fn convert_value(value: serde_yaml::Value) -> Option<Value> {
        match value {
            serde_yaml::Value::Null => None,
            serde_yaml::Value::Bool(b) => Some(Value::Boolean(b)),
            serde_yaml::Value::Number(n) => n
                .as_i64()
                .map(Value::Integer)
                .or_else(|| n.as_f64().map(Value::Float)),
            serde_yaml::Value::String(s) => Some(Value::String(s)),
            serde_yaml::Value::Sequence(seq) => Some(Value::Array(
                seq.into_iter().filter_map(Self::convert_value).collect(),
            )),
            serde_yaml::Value::Mapping(map) => Some(Value::Table(Self::convert_mapping(map))),
            serde_yaml::Value::Tagged(tagged) => Self::convert_value(tagged.value),
        }
    }
}

impl DocumentFormat for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn parse(&self, content: &str) -> Result<Document> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| DocumentError::parse("YAML", e))?;

        match value {
            serde_yaml::Value::Mapping(map) => Ok(Self::convert_mapping(map)),
            serde_yaml::Value::Null => Ok(Document::new()),
            other => Err(DocumentError::ParseError {
                message: format!("YAML root must be a mapping, found {:?}", other),
                source: None,
            }),
        }
    }

    fn render(&self, document: &Document) -> Result<String> {
        serde_yaml::to_string(document).map_err(|e| DocumentError::render("YAML", e))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
