// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) through which documents
//! are parsed, loaded and saved. These traits are implemented by adapters in
//! the adapters layer.

pub mod format;
pub mod sink;
pub mod source;

// Re-export commonly used types
pub use format::DocumentFormat;
pub use sink::{DocumentSink, SaveOutcome};
pub use source::DocumentSource;
