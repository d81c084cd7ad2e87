//! File-backed cache behaviour across reopen.

use flame_cache::{Cache, CacheError, FileBackend, KvBackend, Slot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Snapshot {
    items: Vec<u32>,
}

#[test]
fn slot_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let cache = Cache::open(dir.path()).unwrap();
        let slot: Slot<Snapshot> = Slot::new(cache, "flame-cart-storage");
        slot.store(&Snapshot { items: vec![1, 2, 3] }).unwrap();
    }

    let slot: Slot<Snapshot> = Slot::new(Cache::open(dir.path()).unwrap(), "flame-cart-storage");
    assert_eq!(slot.load().unwrap(), Some(Snapshot { items: vec![1, 2, 3] }));
    assert!(dir.path().join("flame-cart-storage.json").is_file());
}

#[test]
fn open_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");

    let backend = FileBackend::open(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(backend.dir(), nested.as_path());
}

#[test]
fn overwrite_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();

    backend.set("cart", b"{\"v\":1}").unwrap();
    backend.set("cart", b"{\"v\":2}").unwrap();

    assert_eq!(backend.keys().unwrap(), vec!["cart"]);
    assert_eq!(backend.get("cart").unwrap(), Some(b"{\"v\":2}".to_vec()));
    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn corrupt_file_reports_serialize_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("flame-cart-storage.json"), "][").unwrap();

    let slot: Slot<Snapshot> = Slot::new(Cache::open(dir.path()).unwrap(), "flame-cart-storage");
    assert!(matches!(slot.load(), Err(CacheError::SerializeError(_))));
}

#[test]
fn delete_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let cache = Cache::open(dir.path()).unwrap();

    cache.set("cart", &Snapshot { items: vec![] }).unwrap();
    assert!(cache.exists("cart").unwrap());

    cache.delete("cart").unwrap();
    assert!(!cache.exists("cart").unwrap());
    assert!(cache.keys().unwrap().is_empty());
}
