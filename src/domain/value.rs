// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document value type.
//!
//! This module provides the `Value` enum, the tagged union of everything a
//! document can hold: strings, integers, floats, booleans, arrays and nested
//! tables.

use crate::domain::document::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value stored in a [`Document`].
///
/// Values convert to and from [`toml::Value`]; serde support goes through that
/// conversion, so a `Value` can be read from or written to any self-describing
/// format. TOML datetimes have no variant of their own and are kept as their
/// RFC 3339 string form.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::Value;
///
/// let value = Value::from(42);
/// assert_eq!(value.as_integer(), Some(42));
/// assert_eq!(value.type_name(), "integer");
/// assert_eq!(value.to_string(), "42");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "toml::Value", into = "toml::Value")]
pub enum Value {
    /// A UTF-8 string.
    String(String),
    /// A signed 64-bit integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A nested table.
    Table(Document),
}

impl Value {
    /// Reads a raw textual value as a TOML value literal.
    ///
    /// `30` becomes an integer, `true` a boolean, `[1, 2]` an array and `"x"`
    /// the string `x`. Anything that is not a valid literal is kept verbatim as
    /// a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tomlcfg::domain::Value;
    ///
    /// assert_eq!(Value::infer("30"), Value::Integer(30));
    /// assert_eq!(Value::infer("2.5"), Value::Float(2.5));
    /// assert_eq!(Value::infer("true"), Value::Boolean(true));
    /// assert_eq!(Value::infer("\"quoted\""), Value::from("quoted"));
    /// assert_eq!(Value::infer("alice"), Value::from("alice"));
    /// ```
    pub fn infer(raw: &str) -> Value {
        let literal = raw.trim();
        if literal.is_empty() || literal.contains('\n') {
            return Value::String(raw.to_string());
        }
        toml::from_str::<toml::Table>(&format!("value = {}", literal))
            .ok()
            .and_then(|mut table| table.remove("value"))
            .map(Value::from)
            .unwrap_or_else(|| Value::String(raw.to_string()))
    }

    /// Returns a short name for the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Array(_) => "array",
            Value::Table(_) => "table",
        }
    }

    /// Returns the string slice if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if this is a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested document if this is a table.
    pub fn as_table(&self) -> Option<&Document> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Returns the nested document mutably if this is a table.
    pub fn as_table_mut(&mut self) -> Option<&mut Document> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Returns `true` if this is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Integer(i),
            toml::Value::Float(f) => Value::Float(f),
            toml::Value::Boolean(b) => Value::Boolean(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
            toml::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            toml::Value::Table(table) => Value::Table(Document::from(table)),
        }
    }
}

impl From<Value> for toml::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => toml::Value::String(s),
            Value::Integer(i) => toml::Value::Integer(i),
            Value::Float(f) => toml::Value::Float(f),
            Value::Boolean(b) => toml::Value::Boolean(b),
            Value::Array(items) => {
                toml::Value::Array(items.into_iter().map(toml::Value::from).collect())
            }
            Value::Table(table) => toml::Value::Table(toml::Table::from(table)),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Document> for Value {
    fn from(table: Document) -> Self {
        Value::Table(table)
    }
}

/// Strings are written verbatim; everything else uses TOML inline syntax.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", toml::Value::from(other.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from("a").type_name(), "string");
        assert_eq!(Value::from(1).type_name(), "integer");
        assert_eq!(Value::from(1.5).type_name(), "float");
        assert_eq!(Value::from(true).type_name(), "boolean");
        assert_eq!(Value::from(vec![Value::from(1)]).type_name(), "array");
        assert_eq!(Value::from(Document::new()).type_name(), "table");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from("a").as_str(), Some("a"));
        assert_eq!(Value::from("a").as_integer(), None);
        assert_eq!(Value::from(7).as_integer(), Some(7));
        assert_eq!(Value::from(0.5).as_float(), Some(0.5));
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert_eq!(
            Value::from(vec![Value::from(1), Value::from(2)]).as_array().map(|a| a.len()),
            Some(2)
        );
        assert!(Value::from(Document::new()).is_table());
        assert!(Value::from(3).as_table().is_none());
    }

    #[test]
    fn test_infer_literals() {
        assert_eq!(Value::infer("42"), Value::Integer(42));
        assert_eq!(Value::infer("-7"), Value::Integer(-7));
        assert_eq!(Value::infer("3.5"), Value::Float(3.5));
        assert_eq!(Value::infer("false"), Value::Boolean(false));
        assert_eq!(
            Value::infer("[1, 2]"),
            Value::Array(vec![Value::Integer(1), Value::Integer(2)])
        );
    }

    #[test]
    fn test_infer_inline_table() {
        let value = Value::infer("{ a = 1 }");
        let table = value.as_table().unwrap();
        assert_eq!(table.get_str("a"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_infer_falls_back_to_string() {
        assert_eq!(Value::infer("hello world"), Value::from("hello world"));
        assert_eq!(Value::infer(""), Value::from(""));
        assert_eq!(Value::infer("1\nother = 2"), Value::from("1\nother = 2"));
    }

    #[test]
    fn test_infer_datetime_becomes_string() {
        assert_eq!(Value::infer("1979-05-27"), Value::from("1979-05-27"));
    }

    #[test]
    fn test_from_toml_datetime() {
        let table: toml::Table = toml::from_str("when = 1979-05-27T07:32:00Z").unwrap();
        let value = Value::from(table.get("when").cloned().unwrap());
        assert_eq!(value, Value::from("1979-05-27T07:32:00Z"));
    }

    #[test]
    fn test_toml_round_trip_conversion() {
        let original = toml::Value::Array(vec![
            toml::Value::Integer(1),
            toml::Value::String("two".to_string()),
        ]);
        let converted = toml::Value::from(Value::from(original.clone()));
        assert_eq!(converted, original);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("hello").to_string(), "hello");
        assert_eq!(Value::from(30).to_string(), "30");
        assert_eq!(Value::from(3.0).to_string(), "3.0");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(
            Value::from(vec![Value::from(1), Value::from(2)]).to_string(),
            "[1, 2]"
        );
    }
}
