//! Integration tests for the JSON file store.
//!
//! Each test works in its own temporary directory.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use rust_decimal::Decimal;
use system64_db::{JsonFileStore, KeyValueStore, StoreKey, TypedStore};
use system64_types::{Character, Skill};

fn character() -> Character {
    Character::new(
        String::from("Disk"),
        33,
        String::from("Archivist"),
        Decimal::new(725, 1),
        Decimal::from(181),
    )
}

#[test]
fn missing_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("state.json")).unwrap();
    assert_eq!(store.load(StoreKey::Character).unwrap(), None);
    assert_eq!(store.load_scalar::<u64>(StoreKey::Sequence).unwrap(), None);
}

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut c = character();
    c.skills.insert(Skill::Investing, 6);
    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store.save_json(StoreKey::Character, &c).unwrap();
        store.save_scalar(StoreKey::Sequence, 12_u64).unwrap();
        store.save_scalar(StoreKey::SkipPenaltyActive, true).unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    let loaded: Character = store.load_json(StoreKey::Character).unwrap().expect("character");
    assert_eq!(loaded, c);
    assert_eq!(store.load_scalar::<u64>(StoreKey::Sequence).unwrap(), Some(12));
    assert_eq!(store.load_scalar::<bool>(StoreKey::SkipPenaltyActive).unwrap(), Some(true));
}

#[test]
fn remove_and_clear_persist() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");
    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store.save_scalar(StoreKey::CheatAttempts, 2_u32).unwrap();
        store.save_scalar(StoreKey::Sequence, 3_u64).unwrap();
        store.remove(StoreKey::CheatAttempts).unwrap();
    }
    {
        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.load(StoreKey::CheatAttempts).unwrap(), None);
        assert_eq!(store.load_scalar::<u64>(StoreKey::Sequence).unwrap(), Some(3));
        store.clear().unwrap();
    }
    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.load(StoreKey::Sequence).unwrap(), None);
}

#[test]
fn corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(JsonFileStore::open(&path).is_err());
}
