// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort typed views of a looked-up value.
//!
//! A `ValueView` exposes one value at once as a string, an integer and a float,
//! alongside the raw value. Coercions never fail: anything that cannot be read
//! as a number becomes zero.

use crate::domain::document::Document;
use crate::domain::value::Value;

/// The default used by [`ValueView::lookup_or_default`] callers that have none.
pub const DEFAULT_FALLBACK: &str = "0";

/// A value seen as a string, an integer and a float at the same time.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::{Document, ValueView};
///
/// let doc = Document::new().with("threshold", "0.75")?;
///
/// let view = ValueView::lookup_or_default(&doc, "threshold", "0");
/// assert!(view.found);
/// assert_eq!(view.string, "0.75");
/// assert_eq!(view.integer, 0);
/// assert_eq!(view.float, 0.75);
///
/// let view = ValueView::lookup_or_default(&doc, "missing", "12");
/// assert!(!view.found);
/// assert_eq!(view.integer, 12);
/// # Ok::<(), tomlcfg::domain::DocumentError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ValueView {
    /// Strings verbatim, anything else in TOML inline syntax.
    pub string: String,
    /// Integer reading of the value, or 0.
    pub integer: i64,
    /// Float reading of the value, or 0.0.
    pub float: f64,
    /// The untouched value.
    pub raw: Value,
    /// Whether the value came from the document rather than the default.
    pub found: bool,
}

impl ValueView {
    /// Builds the views of a value that was found.
    pub fn new(raw: Value) -> Self {
        Self {
            string: raw.to_string(),
            integer: coerce_integer(&raw),
            float: coerce_float(&raw),
            raw,
            found: true,
        }
    }

    /// Looks up `key` in `document`, falling back to `default` as a string value.
    pub fn lookup_or_default(document: &Document, key: &str, default: &str) -> Self {
        match document.get_str(key) {
            Some(value) => Self::new(value.clone()),
            None => Self {
                found: false,
                ..Self::new(Value::String(default.to_string()))
            },
        }
    }
}

fn coerce_integer(value: &Value) -> i64 {
    match value {
        Value::Integer(i) => *i,
        Value::Float(f) => truncate(*f),
        Value::Boolean(b) => i64::from(*b),
        Value::String(s) => parse_integer(s),
        Value::Array(_) | Value::Table(_) => 0,
    }
}

fn coerce_float(value: &Value) -> f64 {
    match value {
        Value::Integer(i) => *i as f64,
        Value::Float(f) => *f,
        Value::Boolean(b) => f64::from(u8::from(*b)),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Array(_) | Value::Table(_) => 0.0,
    }
}

// "3.7" reads as 3; exact integers skip the float round trip
fn parse_integer(s: &str) -> i64 {
    let trimmed = s.trim();
    trimmed
        .parse::<i64>()
        .unwrap_or_else(|_| trimmed.parse::<f64>().map(truncate).unwrap_or(0))
}

fn truncate(f: f64) -> i64 {
    if f.is_finite() {
        f.trunc() as i64
    } else {
        0
    }
}
