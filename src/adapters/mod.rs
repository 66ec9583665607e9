// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing format, source and sink implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: the TOML and YAML formats, file-backed sources and sinks, and
//! a command-line argument source.

#[cfg(feature = "cli")]
pub mod cli;
pub mod file;
pub mod toml_format;
#[cfg(feature = "yaml")]
pub mod yaml_format;

use crate::ports::DocumentFormat;
use std::path::Path;
use std::sync::Arc;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::CommandLineAdapter;
pub use file::{FileSink, FileSource};
pub use toml_format::TomlFormat;
#[cfg(feature = "yaml")]
pub use yaml_format::YamlFormat;

/// Picks a format from the extension of `path`.
///
/// `.yaml` and `.yml` files use YAML when the `yaml` feature is enabled;
/// everything else is TOML.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::adapters::format_for_path;
/// use std::path::Path;
///
/// assert_eq!(format_for_path(Path::new("config.toml")).name(), "toml");
/// assert_eq!(format_for_path(Path::new("no_extension")).name(), "toml");
/// ```
pub fn format_for_path(path: &Path) -> Arc<dyn DocumentFormat> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    #[cfg(feature = "yaml")]
    {
        let yaml = YamlFormat::new();
        if yaml.handles_extension(extension) {
            return Arc::new(yaml);
        }
    }

    tracing::trace!("Using TOML for extension '{}'", extension);
    Arc::new(TomlFormat::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_toml_path() {
        assert_eq!(format_for_path(Path::new("a/b/config.toml")).name(), "toml");
    }

    #[test]
    fn test_format_for_unknown_extension() {
        assert_eq!(format_for_path(Path::new("config.json")).name(), "toml");
        assert_eq!(format_for_path(Path::new("config")).name(), "toml");
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_format_for_yaml_path() {
        assert_eq!(format_for_path(Path::new("config.yaml")).name(), "yaml");
        assert_eq!(format_for_path(Path::new("CONFIG.YML")).name(), "yaml");
    }
}
