// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture crate for structured configuration documents.
//!
//! This crate loads, inspects, constructs, merges and saves nested key/value
//! documents, TOML by default. Values are addressed with dotted key paths such
//! as `database.connection.port`, and documents are combined with a recursive
//! deep merge in which the overlay wins every conflict between non-tables.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`Document`, `Value`, `KeyPath`,
//!   path access, deep merge, `ValueView`, `DocumentBuilder`, errors)
//! - **Ports**: Trait definitions that define interfaces (`DocumentFormat`,
//!   `DocumentSource`, `DocumentSink`)
//! - **Adapters**: TOML and YAML formats, file source and sink, command-line
//!   arguments
//! - **Service**: The document service that ties everything together and
//!   turns I/O failures into logged fallbacks
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML document support (default)
//! - `cli`: Enable command-line argument support (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use tomlcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let service = DefaultDocumentService::new();
//!
//! let base = Document::new().with("name", "alice")?;
//! let overlay = service.create(vec![
//!     ("age".to_string(), Value::from(30)),
//!     ("meta.created".to_string(), Value::from(true)),
//! ])?;
//!
//! let merged = service.merge(Some(&base), Some(&overlay));
//! let age = service.get_value(&merged, "age", None);
//! assert_eq!(age.integer, 30);
//! assert_eq!(age.string, "30");
//!
//! let missing = service.get_value(&merged, "meta.updated", Some("never"));
//! assert!(!missing.found);
//! assert_eq!(missing.string, "never");
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The crate logs through `tracing` and never installs a subscriber itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{FileSink, FileSource, TomlFormat};
    pub use crate::domain::{
        Document, DocumentBuilder, DocumentError, DocumentService, KeyPath, Result, Value,
        ValueView,
    };
    pub use crate::ports::{DocumentFormat, DocumentSink, DocumentSource, SaveOutcome};
    pub use crate::service::{DefaultDocumentService, DocumentServiceBuilder};

    // Re-export adapters based on feature flags
    #[cfg(feature = "cli")]
    pub use crate::adapters::CommandLineAdapter;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlFormat;
}
