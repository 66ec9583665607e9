// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the document model, dotted key path access, the deep
//! merge and the typed value views. It performs no I/O and is independent of
//! any particular file format.

pub mod builder;
pub mod document;
pub mod errors;
pub mod key_path;
pub mod merge;
pub mod path;
pub mod service;
pub mod value;
pub mod value_view;

// Re-export commonly used types
pub use builder::DocumentBuilder;
pub use document::Document;
pub use errors::{DocumentError, Result};
pub use key_path::KeyPath;
pub use service::DocumentService;
pub use value::Value;
pub use value_view::{ValueView, DEFAULT_FALLBACK};
