// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed document source and sink.
//!
//! This module provides adapters that read documents from and write documents
//! to files, in any [`DocumentFormat`].

use crate::adapters::format_for_path;
use crate::domain::{Document, DocumentError, Result};
use crate::ports::{DocumentFormat, DocumentSink, DocumentSource, SaveOutcome};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Maximum allowed size for document files (10MB)
const MAX_DOCUMENT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default file name used with OS-appropriate locations.
const DEFAULT_FILE_NAME: &str = "config.toml";

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn project_dirs(app_name: &str, qualifier: &str, adapter: &str) -> Result<ProjectDirs> {
    ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| DocumentError::SourceError {
        source_name: adapter.to_string(),
        message: "Failed to determine project directories".to_string(),
        source: None,
    })
}

/// Document source adapter for files.
///
/// The file is read each time [`load`](DocumentSource::load) is called, so the
/// same source can be loaded again after the file changes.
///
/// # Examples
///
/// ```rust,no_run
/// use tomlcfg::adapters::FileSource;
/// use tomlcfg::ports::DocumentSource;
///
/// // The format is picked from the extension, TOML when unknown
/// let source = FileSource::from_file("/etc/myapp/config.toml");
/// let document = source.load().unwrap();
///
/// // Load from the default OS location
/// let source = FileSource::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    /// Path to the document file
    file_path: PathBuf,
    /// Format used to parse the file
    format: Arc<dyn DocumentFormat>,
}

impl FileSource {
    /// Creates a file source with an explicit format.
    pub fn new<P: AsRef<Path>>(path: P, format: Arc<dyn DocumentFormat>) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            format,
        }
    }

    /// Creates a file source, picking the format from the file extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let format = format_for_path(path.as_ref());
        Self::new(path, format)
    }

    /// Creates a file source for `config.toml` in the OS-appropriate
    /// configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Creates a file source for a custom file name in the OS-appropriate
    /// configuration directory.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs = project_dirs(app_name, qualifier, "file")?;
        Ok(Self::from_file(proj_dirs.config_dir().join(filename)))
    }

    /// Returns the path to the document file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the format used to parse the file.
    pub fn format(&self) -> &dyn DocumentFormat {
        self.format.as_ref()
    }

    fn read(&self) -> Result<String> {
        let canonical_path = self
            .file_path
            .canonicalize()
            .map_err(|e| DocumentError::SourceError {
                source_name: "file".to_string(),
                message: format!(
                    "Invalid or inaccessible path: {}",
                    display_name(&self.file_path)
                ),
                source: Some(Box::new(e)),
            })?;

        // Size is checked before reading
        let metadata = fs::metadata(&canonical_path).map_err(|e| DocumentError::SourceError {
            source_name: "file".to_string(),
            message: format!(
                "Failed to read file metadata: {}",
                display_name(&canonical_path)
            ),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_DOCUMENT_FILE_SIZE {
            return Err(DocumentError::SourceError {
                source_name: "file".to_string(),
                message: format!(
                    "Document file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_DOCUMENT_FILE_SIZE
                ),
                source: None,
            });
        }

        fs::read_to_string(&canonical_path).map_err(|e| DocumentError::SourceError {
            source_name: "file".to_string(),
            message: format!(
                "Failed to read document file: {}",
                display_name(&canonical_path)
            ),
            source: Some(Box::new(e)),
        })
    }
}

impl DocumentSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self) -> Result<Document> {
        let content = self.read()?;
        self.format.parse(&content)
    }
}

/// Document sink adapter for files.
///
/// File names are resolved against an optional output directory; an absolute
/// file name is used as-is. Without an explicit format the format is picked
/// from the extension of each target file. Missing parent directories are
/// created.
///
/// # Examples
///
/// ```rust,no_run
/// use tomlcfg::adapters::FileSink;
/// use tomlcfg::domain::Document;
/// use tomlcfg::ports::DocumentSink;
/// use std::path::Path;
///
/// let sink = FileSink::new().with_output_dir("/var/lib/myapp/output");
/// let document = Document::new().with("name", "alice").unwrap();
/// let outcome = sink.save(&document, Path::new("result.toml"), false).unwrap();
/// println!("saved to {}", outcome.path().display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileSink {
    /// Directory relative file names are resolved against
    output_dir: Option<PathBuf>,
    /// Fixed format, or `None` to pick one per file extension
    format: Option<Arc<dyn DocumentFormat>>,
}

impl FileSink {
    /// Creates a sink that writes relative to the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that writes into the OS-appropriate data directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs = project_dirs(app_name, qualifier, "file")?;
        Ok(Self::new().with_output_dir(proj_dirs.data_dir()))
    }

    /// Sets the directory relative file names are resolved against.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Always renders with `format`, whatever the file extension.
    pub fn with_format(mut self, format: Arc<dyn DocumentFormat>) -> Self {
        self.format = Some(format);
        self
    }

    /// Returns the output directory, if any.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    fn sink_error(message: String, source: std::io::Error) -> DocumentError {
        DocumentError::SinkError {
            sink_name: "file".to_string(),
            message,
            source: Some(Box::new(source)),
        }
    }
}

impl DocumentSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn resolve(&self, filename: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(filename),
            None => filename.to_path_buf(),
        }
    }

    fn save(&self, document: &Document, filename: &Path, overwrite: bool) -> Result<SaveOutcome> {
        let path = self.resolve(filename);

        if path.exists() && !overwrite {
            return Ok(SaveOutcome::Skipped(path));
        }

        let format = self
            .format
            .clone()
            .unwrap_or_else(|| format_for_path(&path));
        let content = format.render(document)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Self::sink_error(
                    format!("Failed to create directory for: {}", display_name(&path)),
                    e,
                )
            })?;
        }

        fs::write(&path, content).map_err(|e| {
            Self::sink_error(
                format!("Failed to write document file: {}", display_name(&path)),
                e,
            )
        })?;

        Ok(SaveOutcome::Written(path))
    }
}
