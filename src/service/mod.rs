// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the document service implementation.
//!
//! This module contains the concrete implementation of the `DocumentService`
//! trait, which ties formats, sources and sinks together behind the five
//! document operations.

pub mod default_service;

// Re-export commonly used types
pub use default_service::{DefaultDocumentService, DocumentServiceBuilder};
