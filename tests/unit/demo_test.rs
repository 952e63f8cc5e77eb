//! Tests for the demonstration sequence

use fixlet::demo::{self, DEMO_FIXLET_ID};
use fixlet::storage::{self, CsvFileStore};

use crate::common::{MemoryStore, TestFile, sample};

#[test]
fn test_demo_listings_follow_each_step() {
    let store = MemoryStore::new();
    let mut emitted = Vec::new();

    let listings = demo::run(&store, |listing| emitted.push(listing.stage.clone())).unwrap();

    assert_eq!(emitted, ["creation", "deletion"]);
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].fixlets, vec![demo::created_fixlet()]);
    assert!(listings[1].fixlets.is_empty());
}

#[test]
fn test_demo_saves_update_between_listings() {
    let store = MemoryStore::new();

    demo::run(&store, |_| {}).unwrap();

    assert_eq!(
        store.saved(),
        vec![vec![demo::created_fixlet()], vec![demo::updated_fixlet()], Vec::new()]
    );
}

#[test]
fn test_demo_keeps_existing_fixlets() {
    let store = MemoryStore::with_fixlets(vec![sample("other", "keep me")]);

    let listings = demo::run(&store, |_| {}).unwrap();

    assert_eq!(listings[0].fixlets, vec![sample("other", "keep me"), demo::created_fixlet()]);
    assert_eq!(store.snapshot(), vec![sample("other", "keep me")]);
}

#[test]
fn test_demo_against_header_only_file() {
    let file = TestFile::empty();
    let store = CsvFileStore::new(file.path());

    let listings = demo::run(&store, |_| {}).unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].fixlets[0].fixlet_id, DEMO_FIXLET_ID);
    assert!(storage::load(file.path()).unwrap().is_empty());
}

#[test]
fn test_demo_fails_on_missing_file() {
    let file = TestFile::missing();
    let store = CsvFileStore::new(file.path());
    let mut emitted = 0;

    let err = demo::run(&store, |_| emitted += 1).unwrap_err();

    assert_eq!(emitted, 0);
    assert!(format!("{err:#}").contains("fixlet file not found"));
}
