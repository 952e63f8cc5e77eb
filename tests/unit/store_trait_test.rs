//! Tests for the operations `FixletStore` provides on top of load and save
//!
//! Uses the in-memory store so the semantics are checked without file I/O.

use fixlet::storage::FixletStore;

use crate::common::{MemoryStore, sample};

#[test]
fn test_create_appends_and_saves_once() {
    let store = MemoryStore::with_fixlets(vec![sample("1", "a")]);
    store.create(sample("2", "b")).unwrap();

    assert_eq!(store.snapshot(), vec![sample("1", "a"), sample("2", "b")]);
    assert_eq!(store.saves(), 1);
}

#[test]
fn test_update_saves_even_without_match() {
    let store = MemoryStore::with_fixlets(vec![sample("1", "a")]);

    assert!(!store.update(sample("9", "z")).unwrap());

    assert_eq!(store.snapshot(), vec![sample("1", "a")]);
    assert_eq!(store.saves(), 1);
}

#[test]
fn test_delete_saves_even_without_match() {
    let store = MemoryStore::with_fixlets(vec![sample("1", "a")]);

    assert!(!store.delete("9").unwrap());

    assert_eq!(store.snapshot(), vec![sample("1", "a")]);
    assert_eq!(store.saves(), 1);
}

#[test]
fn test_update_then_delete_by_key() {
    let store = MemoryStore::with_fixlets(vec![sample("1", "a"), sample("2", "b"), sample("3", "c")]);

    assert!(store.update(sample("2", "B")).unwrap());
    assert_eq!(store.snapshot(), vec![sample("1", "a"), sample("2", "B"), sample("3", "c")]);

    assert!(store.delete("1").unwrap());
    assert_eq!(store.snapshot(), vec![sample("2", "B"), sample("3", "c")]);
}

#[test]
fn test_get_does_not_save() {
    let store = MemoryStore::with_fixlets(vec![sample("1", "a")]);

    assert_eq!(store.get("1").unwrap(), Some(sample("1", "a")));
    assert_eq!(store.get("2").unwrap(), None);
    assert_eq!(store.saves(), 0);
}
