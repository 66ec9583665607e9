// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for layering documents with deep merge.
//!
//! Later layers win every conflict between non-tables; tables present in
//! several layers are merged key by key.

mod common;

use common::{create_temp_file, MockSource};
use tomlcfg::domain::merge::merge_all;
use tomlcfg::prelude::*;

#[test]
fn test_precedence_overlay_over_base_file() {
    let file = create_temp_file(
        "[database]\nhost = \"db.internal\"\nport = 5432\n[log]\nlevel = \"info\"\n",
        "toml",
    );

    let service = DefaultDocumentService::new();
    let base = service.load(file.path());
    let overlay = service
        .create(vec![
            ("database.port".to_string(), Value::from(6432)),
            ("log.format".to_string(), Value::from("json")),
        ])
        .unwrap();

    let merged = service.merge(Some(&base), Some(&overlay));
    assert_eq!(
        merged.get_str("database.host"),
        Some(&Value::from("db.internal"))
    );
    assert_eq!(merged.get_str("database.port"), Some(&Value::Integer(6432)));
    assert_eq!(merged.get_str("log.level"), Some(&Value::from("info")));
    assert_eq!(merged.get_str("log.format"), Some(&Value::from("json")));
}

#[test]
#[cfg(all(feature = "cli", feature = "yaml"))]
fn test_precedence_cli_over_yaml() {
    let yaml_file = create_temp_file("test:\n  key: yaml_value\n  other: kept\n", "yaml");

    let service = DefaultDocumentService::new();
    let from_file = service.load(yaml_file.path());
    let from_cli = service.load_from(&CommandLineAdapter::from_args(vec![
        "--test.key",
        "cli_value",
    ]));

    let merged = service.merge(Some(&from_file), Some(&from_cli));
    assert_eq!(merged.get_str("test.key"), Some(&Value::from("cli_value")));
    assert_eq!(merged.get_str("test.other"), Some(&Value::from("kept")));
}

#[test]
fn test_precedence_all_layers() {
    let defaults = MockSource::new("defaults")
        .with_value("a.key", "default")
        .with_value("b.key", "default")
        .with_value("c.key", "default");
    let system = MockSource::new("system")
        .with_value("b.key", "system")
        .with_value("c.key", "system");
    let user = MockSource::new("user").with_value("c.key", "user");

    let layers = [&defaults, &system, &user]
        .into_iter()
        .map(|source| source.load().unwrap());
    let merged = merge_all(layers);

    assert_eq!(merged.get_str("a.key"), Some(&Value::from("default")));
    assert_eq!(merged.get_str("b.key"), Some(&Value::from("system")));
    assert_eq!(merged.get_str("c.key"), Some(&Value::from("user")));
}

#[test]
fn test_precedence_scalar_replaces_table() {
    let base = Document::new().with("server.port", 80).unwrap();
    let overlay = Document::new().with("server", "disabled").unwrap();

    let merged = base.merge(&overlay);
    assert_eq!(merged.get_str("server"), Some(&Value::from("disabled")));
    assert_eq!(merged.get_str("server.port"), None);
}

#[test]
fn test_precedence_table_replaces_scalar() {
    let base = Document::new().with("server", "disabled").unwrap();
    let overlay = Document::new().with("server.port", 80).unwrap();

    let merged = base.merge(&overlay);
    assert_eq!(merged.get_str("server.port"), Some(&Value::Integer(80)));
}

#[test]
fn test_precedence_arrays_are_replaced() {
    let base = Document::new()
        .with("hosts", vec![Value::from("a"), Value::from("b")])
        .unwrap();
    let overlay = Document::new()
        .with("hosts", vec![Value::from("c")])
        .unwrap();

    let merged = base.merge(&overlay);
    assert_eq!(
        merged.get_str("hosts"),
        Some(&Value::Array(vec![Value::from("c")]))
    );
}

#[test]
fn test_precedence_missing_layer_is_identity() {
    let service = DefaultDocumentService::new();
    let base = Document::new().with("x.y", 1).unwrap();

    assert_eq!(service.merge(Some(&base), None), base);
    assert_eq!(service.merge(None, Some(&base)), base);
}
