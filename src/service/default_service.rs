// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default document service implementation.
//!
//! This module provides the default implementation of the `DocumentService`
//! trait. It reads files through [`FileSource`], writes them through a
//! [`DocumentSink`] and turns every I/O failure into a logged degradation, so a
//! pipeline built on it keeps running when a file is missing or unwritable.

use crate::adapters::{format_for_path, FileSink, FileSource};
use crate::domain::merge::deep_merge;
use crate::domain::{
    Document, DocumentBuilder, DocumentService, Result, Value, ValueView, DEFAULT_FALLBACK,
};
use crate::ports::{DocumentFormat, DocumentSink, DocumentSource, SaveOutcome};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default implementation of the document service.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::prelude::*;
/// use tomlcfg::service::DefaultDocumentService;
/// use std::path::Path;
///
/// # fn main() -> Result<()> {
/// let dir = tempfile::tempdir().unwrap();
/// let service = DefaultDocumentService::builder()
///     .with_output_dir(dir.path())
///     .build()?;
///
/// let base = service.create(vec![("name".to_string(), Value::from("alice"))])?;
/// let overlay = service.create(vec![("age".to_string(), Value::from(30))])?;
/// let merged = service.merge(Some(&base), Some(&overlay));
///
/// let path = service.save(&merged, Path::new("people.toml"), false);
/// let loaded = service.load(&path);
/// assert_eq!(service.get_value(&loaded, "age", None).integer, 30);
/// # Ok(())
/// # }
/// ```
pub struct DefaultDocumentService {
    /// Fixed format for loading, or `None` to pick one per file extension
    format: Option<Arc<dyn DocumentFormat>>,
    /// Where saved documents go
    sink: Box<dyn DocumentSink>,
}

impl DefaultDocumentService {
    /// Creates a service that reads and writes relative to the working
    /// directory, picking formats from file extensions.
    pub fn new() -> Self {
        Self {
            format: None,
            sink: Box::new(FileSink::new()),
        }
    }

    /// Creates a new document service builder.
    pub fn builder() -> DocumentServiceBuilder {
        DocumentServiceBuilder::new()
    }

    /// Creates a service that saves into the OS-appropriate data directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use tomlcfg::service::DefaultDocumentService;
    ///
    /// # fn main() -> tomlcfg::domain::Result<()> {
    /// let service = DefaultDocumentService::with_defaults("myapp", "com.example")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_defaults(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::builder()
            .with_default_location(app_name, qualifier)?
            .build()
    }

    /// Returns the sink documents are saved through.
    pub fn sink(&self) -> &dyn DocumentSink {
        self.sink.as_ref()
    }

    fn source_for(&self, path: &Path) -> FileSource {
        let format = self
            .format
            .clone()
            .unwrap_or_else(|| format_for_path(path));
        FileSource::new(path, format)
    }
}

impl Default for DefaultDocumentService {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentService for DefaultDocumentService {
    fn load(&self, path: &Path) -> Document {
        if !path.exists() {
            tracing::warn!("File not found: {}", path.display());
            return Document::new();
        }

        self.load_from(&self.source_for(path))
    }

    fn load_from(&self, source: &dyn DocumentSource) -> Document {
        match source.load() {
            Ok(document) => {
                tracing::debug!(
                    "Loaded {} top-level keys from source '{}'",
                    document.len(),
                    source.name()
                );
                document
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load document from source '{}': {}",
                    source.name(),
                    e
                );
                Document::new()
            }
        }
    }

    fn get_value(&self, document: &Document, key: &str, default: Option<&str>) -> ValueView {
        let default = default.unwrap_or(DEFAULT_FALLBACK);
        let view = ValueView::lookup_or_default(document, key, default);
        if !view.found {
            tracing::info!("Key '{}' not found, using default '{}'", key, default);
        }
        view
    }

    fn create(&self, pairs: Vec<(String, Value)>) -> Result<Document> {
        DocumentBuilder::new().pairs(pairs).build()
    }

    fn merge(&self, base: Option<&Document>, overlay: Option<&Document>) -> Document {
        let empty = Document::new();
        deep_merge(base.unwrap_or(&empty), overlay.unwrap_or(&empty))
    }

    fn save(&self, document: &Document, filename: &Path, overwrite: bool) -> PathBuf {
        match self.sink.save(document, filename, overwrite) {
            Ok(SaveOutcome::Written(path)) => {
                tracing::info!("Saved document to {}", path.display());
                path
            }
            Ok(SaveOutcome::Skipped(path)) => {
                tracing::info!(
                    "File {} already exists and overwrite is disabled, skipping",
                    path.display()
                );
                path
            }
            Err(e) => {
                let path = self.sink.resolve(filename);
                tracing::warn!(
                    "Failed to save document through sink '{}' to {}: {}",
                    self.sink.name(),
                    path.display(),
                    e
                );
                path
            }
        }
    }
}

/// Builder for constructing a `DefaultDocumentService`.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::adapters::YamlFormat;
/// use tomlcfg::service::DocumentServiceBuilder;
/// use std::sync::Arc;
///
/// # fn main() -> tomlcfg::domain::Result<()> {
/// let service = DocumentServiceBuilder::new()
///     .with_format(Arc::new(YamlFormat::new()))
///     .with_output_dir("/tmp/output")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct DocumentServiceBuilder {
    format: Option<Arc<dyn DocumentFormat>>,
    output_dir: Option<PathBuf>,
    sink: Option<Box<dyn DocumentSink>>,
}

impl DocumentServiceBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `format` for every load and save, whatever the file extension.
    pub fn with_format(mut self, format: Arc<dyn DocumentFormat>) -> Self {
        self.format = Some(format);
        self
    }

    /// Resolves saved file names against `dir`.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Saves into the OS-appropriate data directory.
    ///
    /// # Errors
    ///
    /// Fails when no home directory can be determined.
    pub fn with_default_location(mut self, app_name: &str, qualifier: &str) -> Result<Self> {
        let sink = FileSink::from_default_location(app_name, qualifier)?;
        self.output_dir = sink.output_dir().map(Path::to_path_buf);
        Ok(self)
    }

    /// Saves through a custom sink.
    ///
    /// A custom sink takes precedence over [`with_output_dir`](Self::with_output_dir)
    /// and the save side of [`with_format`](Self::with_format).
    pub fn with_sink(mut self, sink: Box<dyn DocumentSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Builds the document service.
    pub fn build(self) -> Result<DefaultDocumentService> {
        let format = self.format;
        let output_dir = self.output_dir;
        let sink = self.sink.unwrap_or_else(|| {
            let mut sink = FileSink::new();
            if let Some(dir) = output_dir {
                sink = sink.with_output_dir(dir);
            }
            if let Some(format) = &format {
                sink = sink.with_format(Arc::clone(format));
            }
            Box::new(sink)
        });

        Ok(DefaultDocumentService { format, sink })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::TomlFormat;
    use crate::domain::DocumentError;
    use std::fs;
    use tempfile::TempDir;

    // Sink that always fails, for the degraded save path
    struct FailingSink;

    impl DocumentSink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        fn resolve(&self, filename: &Path) -> PathBuf {
            Path::new("/nowhere").join(filename)
        }

        fn save(&self, _document: &Document, _filename: &Path, _overwrite: bool) -> Result<SaveOutcome> {
            Err(DocumentError::SinkError {
                sink_name: "failing".to_string(),
                message: "disk full".to_string(),
                source: None,
            })
        }
    }

    // Source that always fails, for the degraded load path
    struct FailingSource;

    impl DocumentSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn load(&self) -> Result<Document> {
            Err(DocumentError::SourceError {
                source_name: "failing".to_string(),
                message: "unreachable".to_string(),
                source: None,
            })
        }
    }

    fn service_in(dir: &TempDir) -> DefaultDocumentService {
        DefaultDocumentService::builder()
            .with_output_dir(dir.path())
            .build()
            .unwrap()
    }

    #[test]
    fn test_service_load_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.toml");
        fs::write(&path, "name = \"alice\"\n[meta]\ncreated = true\n").unwrap();

        let service = DefaultDocumentService::new();
        let document = service.load(&path);
        assert_eq!(document.get_str("name"), Some(&Value::from("alice")));
        assert_eq!(document.get_str("meta.created"), Some(&Value::Boolean(true)));
    }

    #[test]
    fn test_service_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let service = DefaultDocumentService::new();
        assert!(service.load(&dir.path().join("absent.toml")).is_empty());
    }

    #[test]
    fn test_service_load_malformed_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let service = DefaultDocumentService::new();
        assert!(service.load(&path).is_empty());
    }

    #[test]
    fn test_service_load_with_fixed_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.conf");
        fs::write(&path, "port = 8080").unwrap();

        let service = DefaultDocumentService::builder()
            .with_format(Arc::new(TomlFormat::new()))
            .build()
            .unwrap();
        assert_eq!(
            service.load(&path).get_str("port"),
            Some(&Value::Integer(8080))
        );
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_service_load_yaml_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.yaml");
        fs::write(&path, "server:\n  port: 8080\n").unwrap();

        let service = DefaultDocumentService::new();
        assert_eq!(
            service.load(&path).get_str("server.port"),
            Some(&Value::Integer(8080))
        );
    }

    #[test]
    fn test_service_load_from_failing_source() {
        let service = DefaultDocumentService::new();
        assert!(service.load_from(&FailingSource).is_empty());
    }

    #[test]
    fn test_service_get_value_found() {
        let service = DefaultDocumentService::new();
        let document = Document::new().with("server.port", 8080).unwrap();

        let view = service.get_value(&document, "server.port", Some("1"));
        assert!(view.found);
        assert_eq!(view.string, "8080");
        assert_eq!(view.integer, 8080);
        assert_eq!(view.float, 8080.0);
    }

    #[test]
    fn test_service_get_value_default() {
        let service = DefaultDocumentService::new();
        let document = Document::new();

        let view = service.get_value(&document, "missing", None);
        assert!(!view.found);
        assert_eq!(view.string, DEFAULT_FALLBACK);
        assert_eq!(view.integer, 0);

        let view = service.get_value(&document, "missing", Some("2.5"));
        assert_eq!(view.integer, 2);
        assert_eq!(view.float, 2.5);
    }

    #[test]
    fn test_service_create() {
        let service = DefaultDocumentService::new();
        let document = service
            .create(vec![
                ("a.b.c".to_string(), Value::from(5)),
                (" ".to_string(), Value::from("ignored")),
                ("name".to_string(), Value::from("x")),
            ])
            .unwrap();
        assert_eq!(document.len(), 2);
        assert_eq!(document.get_str("a.b.c"), Some(&Value::Integer(5)));
    }

    #[test]
    fn test_service_create_conflict() {
        let service = DefaultDocumentService::new();
        let result = service.create(vec![
            ("a".to_string(), Value::from(1)),
            ("a.b".to_string(), Value::from(2)),
        ]);
        assert!(matches!(result, Err(DocumentError::PathConflict { .. })));
    }

    #[test]
    fn test_service_merge_missing_inputs() {
        let service = DefaultDocumentService::new();
        let document = Document::new().with("x", 1).unwrap();

        assert!(service.merge(None, None).is_empty());
        assert_eq!(service.merge(Some(&document), None), document);
        assert_eq!(service.merge(None, Some(&document)), document);
    }

    #[test]
    fn test_service_save_writes_file() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        let document = Document::new().with("name", "alice").unwrap();

        let path = service.save(&document, Path::new("out.toml"), false);
        assert_eq!(path, dir.path().join("out.toml"));
        assert_eq!(service.load(&path), document);
    }

    #[test]
    fn test_service_save_without_overwrite_keeps_file() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        let path = dir.path().join("out.toml");
        fs::write(&path, "original = true\n").unwrap();

        let document = Document::new().with("name", "alice").unwrap();
        let returned = service.save(&document, Path::new("out.toml"), false);

        assert_eq!(returned, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original = true\n");
    }

    #[test]
    fn test_service_save_with_overwrite_replaces_file() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        let path = dir.path().join("out.toml");
        fs::write(&path, "original = true\n").unwrap();

        let document = Document::new().with("name", "alice").unwrap();
        service.save(&document, Path::new("out.toml"), true);

        assert_eq!(service.load(&path), document);
    }

    #[test]
    fn test_service_save_failure_returns_intended_path() {
        let service = DefaultDocumentService::builder()
            .with_sink(Box::new(FailingSink))
            .build()
            .unwrap();

        let path = service.save(&Document::new(), Path::new("out.toml"), true);
        assert_eq!(path, PathBuf::from("/nowhere/out.toml"));
        assert_eq!(service.sink().name(), "failing");
    }

    #[test]
    fn test_builder_custom_sink_wins_over_output_dir() {
        let service = DocumentServiceBuilder::new()
            .with_output_dir("/tmp/ignored")
            .with_sink(Box::new(FailingSink))
            .build()
            .unwrap();
        assert_eq!(service.sink().name(), "failing");
    }

    #[test]
    fn test_service_default() {
        let service = DefaultDocumentService::default();
        assert_eq!(service.sink().name(), "file");
        assert_eq!(
            service.sink().resolve(Path::new("out.toml")),
            PathBuf::from("out.toml")
        );
    }
}
