//! Persistence tests against real files in the system temp directory.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use larder_engine::GroceryCatalog;
use larder_foundation::{Grocery, LocationRegistry};
use larder_storage::{FileStore, Snapshot, from_bytes, to_bytes};

/// A temp file path that cleans itself up.
struct TempPath(PathBuf);

impl TempPath {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("larder_{}_{name}", std::process::id()));
        let _ = fs::remove_file(&path);
        Self(path)
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

// =============================================================================
// Snapshot Encoding
// =============================================================================

#[test]
fn encoding_preserves_record_order() {
    let mut groceries = Vec::new();
    for name in ["Zucchini", "Apple", "Milk"] {
        groceries.push(Grocery::new(name));
    }
    let snapshot = Snapshot {
        groceries,
        locations: LocationRegistry::new(),
    };

    let restored = from_bytes(&to_bytes(&snapshot).unwrap()).unwrap();
    let names: Vec<_> = restored.groceries.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Zucchini", "Apple", "Milk"]);
}

#[test]
fn encoding_preserves_decimal_cost_exactly() {
    let mut milk = Grocery::new("Milk");
    milk.cost = "4.50".parse().unwrap();
    let snapshot = Snapshot {
        groceries: vec![milk],
        locations: LocationRegistry::new(),
    };

    let restored = from_bytes(&to_bytes(&snapshot).unwrap()).unwrap();
    // Exact, including scale. "4.50" must not come back as "4.5".
    assert_eq!(restored.groceries[0].cost.to_string(), "4.50");
}

// =============================================================================
// File Store
// =============================================================================

#[test]
fn first_run_loads_an_empty_snapshot() {
    let temp = TempPath::new("first_run.msgpack");
    let store = FileStore::new(&temp.0);

    let snapshot = store.load_or_default().unwrap();
    assert_eq!(snapshot, Snapshot::default());
}

#[test]
fn save_creates_missing_parent_directories() {
    let temp = TempPath::new("nested");
    let path = temp.0.join("deeper/catalog.msgpack");
    let store = FileStore::new(&path);

    store.save(&Snapshot::default()).unwrap();
    assert!(path.exists());

    let _ = fs::remove_dir_all(&temp.0);
}

#[test]
fn corrupted_file_is_an_error_not_an_empty_catalog() {
    let temp = TempPath::new("corrupt.msgpack");
    fs::write(&temp.0, b"this is not messagepack").unwrap();

    let store = FileStore::new(&temp.0);
    assert!(store.load_or_default().is_err());
}

// =============================================================================
// Catalog Writing Through the Sink
// =============================================================================

#[test]
fn every_mutation_lands_on_disk() {
    let temp = TempPath::new("sink.msgpack");
    let store = FileStore::new(&temp.0);
    let mut catalog = GroceryCatalog::new(store.clone());

    catalog.add("Milk").unwrap();
    catalog.set_expiration("Milk d/2999-01-01").unwrap();
    catalog.assign_location("Milk l/Fridge").unwrap();

    // Read back with an independent store handle.
    let snapshot = store.load_or_default().unwrap();
    assert_eq!(snapshot.groceries.len(), 1);
    assert_eq!(
        snapshot.groceries[0].expiration,
        NaiveDate::from_ymd_opt(2999, 1, 1)
    );
    assert!(snapshot.locations.get("fridge").unwrap().members.contains("milk"));
}

#[test]
fn reload_reconstructs_the_catalog() {
    let temp = TempPath::new("reload.msgpack");

    {
        let mut catalog = GroceryCatalog::new(FileStore::new(&temp.0));
        catalog.add("Milk").unwrap();
        catalog.add("Rice").unwrap();
        catalog.set_amount("Rice a/10", false).unwrap();
    }

    let store = FileStore::new(&temp.0);
    let snapshot = store.load_or_default().unwrap();
    let catalog = GroceryCatalog::from_parts(snapshot.groceries, snapshot.locations, store);

    assert!(catalog.exists("milk"));
    assert_eq!(catalog.get("Rice").unwrap().amount, 10);
}
