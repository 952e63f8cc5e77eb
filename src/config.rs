//! Configuration for the fixlet CLI
//!
//! Read from `fixlet.toml` in the working directory (or an explicit path).
//! A missing file means defaults; missing keys fall back individually.
//!
//! ```toml
//! [store]
//! path = "fixlet.csv"
//! write_mode = "atomic"   # or "in_place"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::storage::{CsvFileStore, WriteMode};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "fixlet.toml";

/// Backing file used when neither config nor CLI names one
pub const DEFAULT_FIXLET_FILE: &str = "fixlet.csv";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backing store settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// Backing store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the fixlet CSV file
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// How saves replace the file
    #[serde(default)]
    pub write_mode: WriteMode,
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_FIXLET_FILE)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            write_mode: WriteMode::default(),
        }
    }
}

impl Config {
    /// Load config from `path`, or defaults if the file does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the file store this config describes
    #[must_use]
    pub fn store(&self) -> CsvFileStore {
        CsvFileStore::new(&self.store.path).with_write_mode(self.store.write_mode)
    }
}
