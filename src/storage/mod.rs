//! Storage for fixlet collections
//!
//! Every operation is a whole-collection cycle: load everything, change it in
//! memory, save everything. Nothing is cached between calls.
//!
//! - `file`: CSV file on disk (the only production backend)

/// CSV file storage
pub mod file;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Fixlet;

pub use file::{CsvFileStore, create, delete, get, init, load, save, update};

/// How a save replaces the backing file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Write a sibling temp file, then rename it over the target (default)
    #[default]
    Atomic,
    /// Truncate the target and write it directly
    InPlace,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atomic => write!(f, "atomic"),
            Self::InPlace => write!(f, "in_place"),
        }
    }
}

/// Storage backend for a fixlet collection
///
/// Implementors only provide whole-collection `load` and `save`; the
/// mutations are built on top of them and save regardless of whether a
/// matching record was found.
pub trait FixletStore {
    /// Load the full collection in stored order
    fn load(&self) -> Result<Vec<Fixlet>>;

    /// Replace the full collection
    fn save(&self, fixlets: &[Fixlet]) -> Result<()>;

    /// Append a fixlet (duplicate IDs are permitted)
    fn create(&self, fixlet: Fixlet) -> Result<()> {
        let mut fixlets = self.load()?;
        log::debug!("creating fixlet {} (collection has {})", fixlet.fixlet_id, fixlets.len());
        fixlets.push(fixlet);
        self.save(&fixlets)
    }

    /// Replace the first fixlet with the same ID, keeping its position
    ///
    /// Returns whether a fixlet matched.
    fn update(&self, fixlet: Fixlet) -> Result<bool> {
        let mut fixlets = self.load()?;
        let id = fixlet.fixlet_id.clone();
        let found = replace_first(&mut fixlets, fixlet);
        if found {
            log::debug!("updated fixlet {id}");
        } else {
            log::warn!("no fixlet with id {id} to update");
        }
        self.save(&fixlets)?;
        Ok(found)
    }

    /// Remove the first fixlet with the given ID, keeping the order of the rest
    ///
    /// Returns whether a fixlet was removed.
    fn delete(&self, fixlet_id: &str) -> Result<bool> {
        let mut fixlets = self.load()?;
        let removed = remove_first(&mut fixlets, fixlet_id);
        if removed {
            log::debug!("deleted fixlet {fixlet_id}");
        } else {
            log::warn!("no fixlet with id {fixlet_id} to delete");
        }
        self.save(&fixlets)?;
        Ok(removed)
    }

    /// Get the first fixlet with the given ID
    fn get(&self, fixlet_id: &str) -> Result<Option<Fixlet>> {
        Ok(self.load()?.into_iter().find(|f| f.fixlet_id == fixlet_id))
    }
}

/// Replace the first fixlet whose ID matches `fixlet`'s, in place
pub fn replace_first(fixlets: &mut [Fixlet], fixlet: Fixlet) -> bool {
    match fixlets.iter_mut().find(|f| f.fixlet_id == fixlet.fixlet_id) {
        Some(slot) => {
            *slot = fixlet;
            true
        }
        None => false,
    }
}

/// Remove the first fixlet with the given ID
pub fn remove_first(fixlets: &mut Vec<Fixlet>, fixlet_id: &str) -> bool {
    let Some(index) = fixlets.iter().position(|f| f.fixlet_id == fixlet_id) else {
        return false;
    };
    fixlets.remove(index);
    true
}
