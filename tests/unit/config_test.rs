//! Tests for configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use fixlet::config::{Config, DEFAULT_FIXLET_FILE};
use fixlet::storage::WriteMode;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.store.path, PathBuf::from(DEFAULT_FIXLET_FILE));
    assert_eq!(config.store.write_mode, WriteMode::Atomic);
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(&temp.path().join("fixlet.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_reads_store_table() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fixlet.toml");
    fs::write(&path, "[store]\npath = \"data/fixlets.csv\"\nwrite_mode = \"in_place\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.store.path, PathBuf::from("data/fixlets.csv"));
    assert_eq!(config.store.write_mode, WriteMode::InPlace);

    let store = config.store();
    assert_eq!(store.path(), Path::new("data/fixlets.csv"));
    assert_eq!(store.write_mode(), WriteMode::InPlace);
}

#[test]
fn test_config_partial_table_falls_back_per_key() {
    let config = Config::parse("[store]\nwrite_mode = \"in_place\"\n").unwrap();
    assert_eq!(config.store.path, PathBuf::from(DEFAULT_FIXLET_FILE));
    assert_eq!(config.store.write_mode, WriteMode::InPlace);

    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn test_config_rejects_unknown_write_mode() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fixlet.toml");
    fs::write(&path, "[store]\nwrite_mode = \"sideways\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("parse config"));
}
