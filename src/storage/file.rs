//! CSV file storage
//!
//! The backing file is read in full and rewritten in full on every operation.
//! There is no locking: concurrent writers race and the last save wins.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{FixletStore, WriteMode};
use crate::codec;
use crate::error::{Error, Result};
use crate::models::Fixlet;

/// Fixlet store backed by a CSV file
#[derive(Debug, Clone)]
pub struct CsvFileStore {
    path: PathBuf,
    write_mode: WriteMode,
}

impl CsvFileStore {
    /// Create a store for the file at `path` using atomic saves
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_mode: WriteMode::default(),
        }
    }

    /// Use the given write mode for saves
    #[must_use]
    pub const fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write mode used for saves
    #[must_use]
    pub const fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Write a header-only file if none exists yet
    ///
    /// Creates missing parent directories. Returns `true` if the file was
    /// created; an existing file is left untouched.
    pub fn init(&self) -> Result<bool> {
        if self.path.exists() {
            log::debug!("fixlet file already exists: {}", self.path.display());
            return Ok(false);
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        self.save(&[])?;

        log::info!("initialized fixlet file {}", self.path.display());
        Ok(true)
    }
}

impl FixletStore for CsvFileStore {
    fn load(&self) -> Result<Vec<Fixlet>> {
        let file = File::open(&self.path).map_err(|err| Error::from_open(err, &self.path))?;
        let fixlets = codec::decode(BufReader::new(file))?;
        log::debug!("loaded {} fixlet(s) from {}", fixlets.len(), self.path.display());
        Ok(fixlets)
    }

    fn save(&self, fixlets: &[Fixlet]) -> Result<()> {
        match self.write_mode {
            WriteMode::InPlace => write_file(&self.path, fixlets)?,
            WriteMode::Atomic => write_atomic(&self.path, fixlets)?,
        }
        log::debug!(
            "saved {} fixlet(s) to {} ({})",
            fixlets.len(),
            self.path.display(),
            self.write_mode
        );
        Ok(())
    }
}

/// Truncate `path` and write the encoded collection to it
fn write_file(path: &Path, fixlets: &[Fixlet]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(&file);
    codec::encode(&mut writer, fixlets)?;
    writer.flush()?;
    drop(writer);
    file.sync_all()?;
    Ok(())
}

/// Write to a sibling temp file, then rename it over `path`
fn write_atomic(path: &Path, fixlets: &[Fixlet]) -> Result<()> {
    let tmp_path = temp_path(path);
    let result = write_file(&tmp_path, fixlets)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(Error::from));
    if result.is_err() {
        // Drop the leftover temp file; report the original error
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

/// `fixlet.csv` -> `fixlet.csv.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Load every fixlet stored at `path`
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Fixlet>> {
    CsvFileStore::new(path.as_ref()).load()
}

/// Overwrite the file at `path` with `fixlets`, creating it if absent
pub fn save(path: impl AsRef<Path>, fixlets: &[Fixlet]) -> Result<()> {
    CsvFileStore::new(path.as_ref()).save(fixlets)
}

/// Append `fixlet` to the file at `path`
pub fn create(path: impl AsRef<Path>, fixlet: Fixlet) -> Result<()> {
    CsvFileStore::new(path.as_ref()).create(fixlet)
}

/// Replace the first fixlet with the same ID in the file at `path`
pub fn update(path: impl AsRef<Path>, fixlet: Fixlet) -> Result<bool> {
    CsvFileStore::new(path.as_ref()).update(fixlet)
}

/// Remove the first fixlet with `fixlet_id` from the file at `path`
pub fn delete(path: impl AsRef<Path>, fixlet_id: &str) -> Result<bool> {
    CsvFileStore::new(path.as_ref()).delete(fixlet_id)
}

/// Find the first fixlet with `fixlet_id` in the file at `path`
pub fn get(path: impl AsRef<Path>, fixlet_id: &str) -> Result<Option<Fixlet>> {
    CsvFileStore::new(path.as_ref()).get(fixlet_id)
}

/// Write a header-only file at `path` unless it already exists
pub fn init(path: impl AsRef<Path>) -> Result<bool> {
    CsvFileStore::new(path.as_ref()).init()
}
