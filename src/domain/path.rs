// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted key path access over nested documents.
//!
//! [`lookup`] walks a [`KeyPath`] down through nested tables; [`insert`] does
//! the same while creating missing tables along the way. Both are reachable
//! through [`Document::get`] and [`Document::set`].

use crate::domain::document::Document;
use crate::domain::errors::{DocumentError, Result};
use crate::domain::key_path::KeyPath;
use crate::domain::value::Value;

/// Resolves `path` inside `document`.
///
/// A missing segment and an intermediate segment that is not a table are both
/// reported as `None`.
pub fn lookup<'a>(document: &'a Document, path: &KeyPath) -> Option<&'a Value> {
    let mut segments = path.segments();
    let mut current = document.entry(segments.next()?)?;
    for segment in segments {
        current = current.as_table()?.entry(segment)?;
    }
    Some(current)
}

/// Stores `value` at `path` inside `document`.
///
/// Missing intermediate segments become empty tables. An intermediate segment
/// that already holds a scalar or an array is a [`DocumentError::PathConflict`];
/// it is never overwritten. A conflict can only occur on a segment that already
/// existed, so nothing has been created by the time it is detected.
pub fn insert(document: &mut Document, path: &KeyPath, value: Value) -> Result<()> {
    let mut current = document;
    for segment in path.parents() {
        let slot = current
            .0
            .entry(segment.to_string())
            .or_insert_with(|| Value::Table(Document::new()));
        current = match slot {
            Value::Table(table) => table,
            other => {
                return Err(DocumentError::PathConflict {
                    path: path.to_string(),
                    segment: segment.to_string(),
                    found: other.type_name(),
                })
            }
        };
    }
    current.0.insert(path.leaf().to_string(), value);
    Ok(())
}
