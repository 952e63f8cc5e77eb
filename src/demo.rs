//! The fixed demonstration sequence
//!
//! create → read → update → delete → read, each step a full load/mutate/save
//! cycle against the store. The first error aborts.

use anyhow::Context;

use crate::models::Fixlet;
use crate::output::Listing;
use crate::storage::FixletStore;

/// ID shared by every fixlet the demonstration touches
pub const DEMO_FIXLET_ID: &str = "fixlet001";

/// The fixlet created by the demonstration
#[must_use]
pub fn created_fixlet() -> Fixlet {
    Fixlet::new("site123", DEMO_FIXLET_ID, "Fixlet 1", "High", "100")
}

/// The replacement written by the update step
#[must_use]
pub fn updated_fixlet() -> Fixlet {
    Fixlet::new("site123", DEMO_FIXLET_ID, "Updated Fixlet 1", "Medium", "120")
}

/// Run the demonstration, handing each listing to `emit` as soon as it is read
///
/// Returns both listings in order: after creation and after deletion.
pub fn run<S, F>(store: &S, mut emit: F) -> anyhow::Result<Vec<Listing>>
where
    S: FixletStore + ?Sized,
    F: FnMut(&Listing),
{
    let mut listings = Vec::with_capacity(2);
    let mut read_back = |stage: &str| -> anyhow::Result<()> {
        let fixlets = store.load().with_context(|| format!("read fixlets after {stage}"))?;
        let listing = Listing::new(stage, fixlets);
        emit(&listing);
        listings.push(listing);
        Ok(())
    };

    store.create(created_fixlet()).context("create fixlet")?;
    log::info!("created fixlet {DEMO_FIXLET_ID}");
    read_back("creation")?;

    let found = store.update(updated_fixlet()).context("update fixlet")?;
    log::info!("updated fixlet {DEMO_FIXLET_ID} (matched: {found})");

    let removed = store.delete(DEMO_FIXLET_ID).context("delete fixlet")?;
    log::info!("deleted fixlet {DEMO_FIXLET_ID} (matched: {removed})");
    read_back("deletion")?;

    Ok(listings)
}
