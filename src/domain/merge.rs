// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recursive deep merge of documents.
//!
//! Behaviour:
//! - Tables present on both sides are merged key by key, recursively.
//! - Every other conflict, including a table meeting a non-table, is won by
//!   the overlay.
//! - Arrays are replaced wholesale, never merged element-wise.

use crate::domain::document::Document;
use crate::domain::value::Value;

/// Merges `overlay` on top of `base`, returning a new document.
///
/// Neither input is modified and the result owns all of its nested tables.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::merge::deep_merge;
/// use tomlcfg::domain::{Document, Value};
///
/// let base = Document::new().with("name", "alice")?.with("tags", vec![Value::from("a")])?;
/// let overlay = Document::new().with("age", 30)?.with("tags", vec![Value::from("b")])?;
///
/// let merged = deep_merge(&base, &overlay);
/// assert_eq!(merged.get_str("name"), Some(&Value::from("alice")));
/// assert_eq!(merged.get_str("age"), Some(&Value::Integer(30)));
/// assert_eq!(merged.get_str("tags"), Some(&Value::Array(vec![Value::from("b")])));
/// # Ok::<(), tomlcfg::domain::DocumentError>(())
/// ```
pub fn deep_merge(base: &Document, overlay: &Document) -> Document {
    let mut result = base.clone();
    merge_into(&mut result, overlay.clone());
    result
}

/// Merges `overlay` into `target` in place, consuming the overlay.
pub fn merge_into(target: &mut Document, overlay: Document) {
    for (key, value) in overlay {
        match target.0.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.0.insert(key, value);
            }
        }
    }
}

fn merge_value(existing: &mut Value, incoming: Value) {
    match (existing, incoming) {
        (Value::Table(existing), Value::Table(incoming)) => merge_into(existing, incoming),
        (existing, incoming) => *existing = incoming,
    }
}

/// Folds any number of documents left to right; later documents win.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::merge::merge_all;
/// use tomlcfg::domain::{Document, Value};
///
/// let layers = vec![
///     Document::new().with("level", 1)?,
///     Document::new().with("level", 2)?,
///     Document::new().with("extra", true)?,
/// ];
/// let merged = merge_all(layers);
/// assert_eq!(merged.get_str("level"), Some(&Value::Integer(2)));
/// assert_eq!(merged.get_str("extra"), Some(&Value::Boolean(true)));
/// # Ok::<(), tomlcfg::domain::DocumentError>(())
/// ```
pub fn merge_all<I>(documents: I) -> Document
where
    I: IntoIterator<Item = Document>,
{
    documents
        .into_iter()
        .fold(Document::new(), |mut acc, layer| {
            merge_into(&mut acc, layer);
            acc
        })
}
