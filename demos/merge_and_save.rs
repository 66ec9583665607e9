// SPDX-License-Identifier: MIT OR Apache-2.0

//! Load, merge and save example for the tomlcfg crate.
//!
//! This example demonstrates:
//! - Loading a TOML document from disk
//! - Layering command-line arguments over it with a deep merge
//! - Reading values through their string, integer and float views
//! - Saving the result without clobbering an existing file
//!
//! To run this example:
//! ```bash
//! cargo run --example merge_and_save -- --server.port=9090 --meta.created=true
//! ```

use std::fs;
use std::path::Path;
use tomlcfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== tomlcfg: Merge and Save ===\n");

    let workdir = tempfile::tempdir()?;
    let input = workdir.path().join("base.toml");
    fs::write(
        &input,
        "name = \"alice\"\n\n[server]\nhost = \"localhost\"\nport = 8080\n",
    )?;

    let service = DefaultDocumentService::builder()
        .with_output_dir(workdir.path().join("out"))
        .build()?;

    // Example 1: Load a document
    println!("--- Example 1: Load ---");
    let base = service.load(&input);
    println!("Loaded {} top-level keys from {}\n", base.len(), input.display());

    // Example 2: Build an overlay from pairs and from the command line
    println!("--- Example 2: Overlay ---");
    let built = service.create(vec![
        ("age".to_string(), Value::from(30)),
        ("server.timeout".to_string(), Value::from(2.5)),
    ])?;
    let from_cli = service.load_from(&CommandLineAdapter::from_env_args());
    let overlay = service.merge(Some(&built), Some(&from_cli));
    println!("Overlay has {} top-level keys\n", overlay.len());

    // Example 3: Deep merge
    println!("--- Example 3: Merge ---");
    let merged = service.merge(Some(&base), Some(&overlay));
    for key in ["name", "age", "server.host", "server.port", "server.timeout"] {
        let view = service.get_value(&merged, key, None);
        println!(
            "{:<15} string={:<10} integer={:<6} float={}",
            key, view.string, view.integer, view.float
        );
    }
    let missing = service.get_value(&merged, "server.tls", Some("off"));
    println!("server.tls      found={} string={}\n", missing.found, missing.string);

    // Example 4: Save twice; the second save leaves the file alone
    println!("--- Example 4: Save ---");
    let saved = service.save(&merged, Path::new("merged.toml"), false);
    println!("Saved to {}", saved.display());
    println!("{}", fs::read_to_string(&saved)?);

    let again = service.save(&Document::new(), Path::new("merged.toml"), false);
    println!("Second save kept {} unchanged", again.display());

    Ok(())
}
