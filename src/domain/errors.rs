// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the document crate.
//!
//! This module defines the error types that can occur when addressing, parsing,
//! rendering, loading or saving configuration documents.
//! All errors use `thiserror` for proper error handling and conversion.

use thiserror::Error;

/// The main error type for document operations.
///
/// Missing keys are not errors: lookups return `Option` and callers supply a
/// default. This enum covers malformed key paths, conflicting writes and the
/// failures of the format, source and sink adapters. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::errors::DocumentError;
///
/// fn parse_key() -> Result<(), DocumentError> {
///     Err(DocumentError::InvalidKeyPath {
///         path: "a..b".to_string(),
///         reason: "empty segment".to_string(),
///     })
/// }
///
/// assert!(parse_key().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// The key path is empty or contains an empty segment.
    #[error("Invalid key path '{path}': {reason}")]
    InvalidKeyPath {
        /// The rejected key path
        path: String,
        /// Why it was rejected
        reason: String,
    },

    /// An intermediate segment of a key path holds a non-table value.
    #[error("Cannot set '{path}': segment '{segment}' holds a {found}, not a table")]
    PathConflict {
        /// The key path being assigned
        path: String,
        /// The segment that could not be descended into
        segment: String,
        /// The type name of the value found at that segment
        found: &'static str,
    },

    /// Failed to parse document text.
    #[error("Failed to parse document: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to render a document to text.
    #[error("Failed to render document: {message}")]
    RenderError {
        /// The error message
        message: String,
        /// The underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred in a document source.
    #[error("Document source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred in a document sink.
    #[error("Document sink '{sink_name}' error: {message}")]
    SinkError {
        /// The name of the sink that encountered the error
        sink_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading or writing a document.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DocumentError {
    /// Creates an `InvalidKeyPath` error.
    pub fn invalid_key_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        DocumentError::InvalidKeyPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `ParseError` wrapping the underlying parser error.
    pub fn parse<E>(format: &str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DocumentError::ParseError {
            message: format!("invalid {}: {}", format, err),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `RenderError` wrapping the underlying serializer error.
    pub fn render<E>(format: &str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DocumentError::RenderError {
            message: format!("{} serializer: {}", format, err),
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
