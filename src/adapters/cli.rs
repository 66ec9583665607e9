// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line argument document source adapter.
//!
//! This module provides an adapter that builds a document from command-line
//! arguments.

use crate::domain::{Document, DocumentBuilder, Result, Value};
use crate::ports::DocumentSource;

/// Document source adapter for command-line arguments.
///
/// Every argument pair becomes one `(key path, value)` builder pair, in the
/// order given. Supported argument formats:
/// - `--key=value`: Long form with equals sign
/// - `--key value`: Long form with space-separated value
/// - `-k value`: Short form with space-separated value
///
/// A space-separated value that starts with `-` is taken to be the next flag,
/// so negative numbers need the `--key=-5` form. Values are read as TOML
/// literals (see [`Value::infer`]), so `--port=8080` stores an integer and
/// `--name=alice` a string.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::adapters::CommandLineAdapter;
/// use tomlcfg::domain::Value;
/// use tomlcfg::ports::DocumentSource;
///
/// let args = vec!["--database.host=localhost", "--database.port", "5432"];
/// let adapter = CommandLineAdapter::from_args(args);
/// let document = adapter.load().unwrap();
/// assert_eq!(document.get_str("database.port"), Some(&Value::Integer(5432)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLineAdapter {
    /// Parsed key/value pairs, in argument order
    pairs: Vec<(String, String)>,
}

impl CommandLineAdapter {
    /// Creates a new command-line adapter with no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new command-line adapter from a vector of arguments.
    pub fn from_args<S: AsRef<str>>(args: Vec<S>) -> Self {
        let mut adapter = Self::new();
        adapter.parse_args(&args);
        adapter
    }

    /// Creates a new command-line adapter from the process's command-line arguments.
    ///
    /// This skips the first argument (the program name) and parses the rest.
    pub fn from_env_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(args)
    }

    /// Returns the raw key/value pairs in argument order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Parses command-line arguments and appends the pairs they define.
    fn parse_args<S: AsRef<str>>(&mut self, args: &[S]) {
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_ref();

            let key = if let Some(long) = arg.strip_prefix("--") {
                // Handle --key=value format
                if let Some((key, value)) = long.split_once('=') {
                    self.pairs.push((key.to_string(), value.to_string()));
                    i += 1;
                    continue;
                }
                long
            } else if let Some(short) = arg.strip_prefix('-').filter(|s| s.chars().count() == 1) {
                short
            } else {
                i += 1;
                continue;
            };

            // Handle --key value and -k value formats
            match args.get(i + 1).map(AsRef::as_ref) {
                Some(next_arg) if !next_arg.starts_with('-') => {
                    self.pairs.push((key.to_string(), next_arg.to_string()));
                    i += 2;
                }
                _ => i += 1,
            }
        }
    }
}

impl DocumentSource for CommandLineAdapter {
    fn name(&self) -> &str {
        "cli"
    }

    fn load(&self) -> Result<Document> {
        DocumentBuilder::new()
            .pairs(
                self.pairs
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::infer(value))),
            )
            .build()
    }
}
