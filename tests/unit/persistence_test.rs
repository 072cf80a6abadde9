//! Tests for the file-backed snapshot store

use std::fs;

use chitty::Store;
use chitty::adapters::FileSnapshotStore;
use chitty::core::ports::{DATA_KEY, SnapshotStore};
use tempfile::TempDir;

use crate::common::diwali_fund;

fn file_store(temp: &TempDir) -> FileSnapshotStore {
    FileSnapshotStore::new(temp.path().join("data"))
}

#[test]
fn test_first_run_starts_empty() {
    let temp = TempDir::new().unwrap();
    let store = Store::open(Box::new(file_store(&temp)));
    assert!(store.snapshot().chitties.is_empty());
    assert!(!temp.path().join("data").exists());
}

#[test]
fn test_store_survives_reopen() {
    let temp = TempDir::new().unwrap();

    let mut store = Store::open(Box::new(file_store(&temp)));
    let pool_id = store.create_pool(diwali_fund());
    let expected = store.snapshot().clone();
    drop(store);

    let record = file_store(&temp).record_path(DATA_KEY);
    assert!(record.ends_with("app-data.json"));
    assert!(record.exists());

    let reopened = Store::open(Box::new(file_store(&temp)));
    assert_eq!(reopened.snapshot(), &expected);
    assert_eq!(reopened.pool(&pool_id).unwrap().name, "Diwali Fund");
}

#[test]
fn test_corrupt_record_starts_empty() {
    let temp = TempDir::new().unwrap();
    let files = file_store(&temp);
    fs::create_dir_all(files.dir()).unwrap();
    fs::write(files.record_path(DATA_KEY), "{ not json").unwrap();

    let mut store = Store::open(Box::new(files.clone()));
    assert!(store.snapshot().chitties.is_empty());

    // Working on the empty store must not destroy the unreadable record
    store.create_pool(diwali_fund());

    let set_aside: Vec<_> = fs::read_dir(files.dir())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.file_name().unwrap().to_string_lossy().starts_with("app-data.json.corrupt-"))
        .collect();
    assert_eq!(set_aside.len(), 1);
    assert_eq!(fs::read_to_string(&set_aside[0]).unwrap(), "{ not json");
    assert_eq!(files.load().unwrap().unwrap().chitties.len(), 1);
}

#[test]
fn test_save_replaces_record_without_leftovers() {
    let temp = TempDir::new().unwrap();
    let files = file_store(&temp);

    let mut store = Store::open(Box::new(files.clone()));
    store.create_pool(diwali_fund());
    store.create_pool(diwali_fund());

    let entries: Vec<_> = fs::read_dir(files.dir()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(entries, vec!["app-data.json"]);
    assert_eq!(files.load().unwrap().unwrap().chitties.len(), 2);
}
