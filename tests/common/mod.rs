// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations shared by the integration tests.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tomlcfg::adapters::TomlFormat;
use tomlcfg::domain::{Document, DocumentError, Result};
use tomlcfg::ports::{DocumentFormat, DocumentSink, DocumentSource, SaveOutcome};

/// A mock document source that hands out a fixed document, or fails.
#[derive(Debug, Clone)]
pub struct MockSource {
    name: String,
    document: Document,
    should_fail: bool,
}

#[allow(dead_code)]
impl MockSource {
    /// Creates a new mock source with an empty document.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: Document::new(),
            should_fail: false,
        }
    }

    /// Sets a value at a dotted key path.
    pub fn with_value(mut self, path: &str, value: impl Into<tomlcfg::domain::Value>) -> Self {
        self.document
            .set_str(path, value)
            .expect("mock source paths must not conflict");
        self
    }

    /// Makes every load fail.
    pub fn failing(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl DocumentSource for MockSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Document> {
        if self.should_fail {
            Err(DocumentError::SourceError {
                source_name: self.name.clone(),
                message: "Mock load failure".to_string(),
                source: None,
            })
        } else {
            Ok(self.document.clone())
        }
    }
}

/// An in-memory sink that keeps rendered TOML per path.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

#[allow(dead_code)]
impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, as if written earlier.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files
            .lock()
            .expect("sink lock poisoned")
            .insert(path.into(), content.into());
        self
    }

    /// Returns the stored text for `path`.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().expect("sink lock poisoned").get(path).cloned()
    }
}

impl DocumentSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn resolve(&self, filename: &Path) -> PathBuf {
        Path::new("memory").join(filename)
    }

    fn save(&self, document: &Document, filename: &Path, overwrite: bool) -> Result<SaveOutcome> {
        let path = self.resolve(filename);
        let mut files = self.files.lock().expect("sink lock poisoned");
        if files.contains_key(&path) && !overwrite {
            return Ok(SaveOutcome::Skipped(path));
        }
        files.insert(path.clone(), TomlFormat::new().render(document)?);
        Ok(SaveOutcome::Written(path))
    }
}

/// Creates a temporary file with the given content and extension.
///
/// Returns a NamedTempFile that will be automatically deleted when dropped.
#[allow(dead_code)]
pub fn create_temp_file(content: &str, extension: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
