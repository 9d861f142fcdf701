//! Integration tests for the persistence cycle.
//!
//! Each test works against a temp data directory: mutate a store, save the
//! snapshot, then reload into a fresh store the way a new launch would.

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

use todopad::io::config_io::read_config;
use todopad::io::storage::Storage;
use todopad::model::{Filter, Sort, Task, ThemeMode};
use todopad::store::{StoreOptions, TaskStore};

fn save(storage: &Storage, store: &TaskStore) {
    storage.save_tasks(&store.snapshot()).unwrap();
}

fn reload(storage: &Storage) -> TaskStore {
    TaskStore::new(storage.load_tasks(), StoreOptions::default())
}

fn texts(store: &TaskStore) -> Vec<String> {
    store
        .view(Filter::All)
        .iter()
        .map(|t| t.text.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Task lifecycle across launches
// ---------------------------------------------------------------------------

#[test]
fn mutations_survive_a_relaunch() {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::new(tmp.path());

    let mut store = reload(&storage);
    store.add("buy milk").unwrap();
    store.add("water plants").unwrap();
    store.toggle("t-1");
    save(&storage, &store);

    let store = reload(&storage);
    assert_eq!(store.len(), 2);
    assert!(store.get("t-1").unwrap().completed);
    assert_eq!(store.get("t-2").unwrap().text, "water plants");
}

#[test]
fn display_order_is_stable_across_launches() {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::new(tmp.path());

    let mut store = reload(&storage);
    for text in ["zebra", "apple", "mango"] {
        store.add(text).unwrap();
    }
    store.toggle("t-2");
    save(&storage, &store);

    let store = reload(&storage);
    assert_eq!(texts(&store), ["zebra", "apple", "mango"]);
}

#[test]
fn id_counter_resumes_past_persisted_tasks() {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::new(tmp.path());

    let mut store = reload(&storage);
    for text in ["one", "two", "three"] {
        store.add(text).unwrap();
    }
    save(&storage, &store);

    let mut store = reload(&storage);
    assert_eq!(store.add("four").unwrap(), "t-4");
}

#[test]
fn clear_completed_persists() {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::new(tmp.path());

    let mut store = reload(&storage);
    for text in ["keep", "drop", "also drop"] {
        store.add(text).unwrap();
    }
    store.toggle("t-2");
    store.toggle("t-3");
    assert_eq!(store.clear_completed(), 2);
    save(&storage, &store);

    let store = reload(&storage);
    assert_eq!(texts(&store), ["keep"]);
    assert_eq!(store.counts().completed, 0);
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[test]
fn reads_files_written_by_hand() {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::new(tmp.path());
    fs::write(
        tmp.path().join("todos.json"),
        r#"[
  {"id": "t-1", "text": "from another tool", "createdAt": "2026-01-05T08:00:00Z"},
  {"id": "t-2", "text": "done thing", "completed": true}
]"#,
    )
    .unwrap();

    let store = reload(&storage);
    assert_eq!(store.len(), 2);
    let first = store.get("t-1").unwrap();
    assert!(!first.completed, "missing completed defaults to false");
    assert!(first.created_at.is_some());
    assert!(store.get("t-2").unwrap().completed);
    assert!(store.get("t-2").unwrap().created_at.is_none());
}

#[test]
fn timestamps_off_leaves_no_trace_in_the_file() {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::new(tmp.path());

    let mut store = TaskStore::new(
        Vec::new(),
        StoreOptions {
            stamp_created: false,
            sort: Sort::Insertion,
        },
    );
    store.add("bare").unwrap();
    save(&storage, &store);

    let raw = fs::read_to_string(tmp.path().join("todos.json")).unwrap();
    assert!(!raw.contains("createdAt"));
    assert!(raw.contains("\"bare\""));
}

#[test]
fn corrupt_file_starts_empty_and_keeps_the_original_aside() {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::new(tmp.path());
    fs::write(tmp.path().join("todos.json"), "][ nope").unwrap();

    let mut store = reload(&storage);
    assert!(store.is_empty());

    // The next save starts a clean history without clobbering the evidence
    store.add("fresh start").unwrap();
    save(&storage, &store);
    assert_eq!(texts(&reload(&storage)), ["fresh start"]);
    let aside = fs::read_to_string(tmp.path().join("todos.json.corrupt")).unwrap();
    assert_eq!(aside, "][ nope");
}

#[test]
fn snapshot_round_trips_unicode_text() {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::new(tmp.path());

    let mut store = reload(&storage);
    store.add("caf\u{e9} run \u{2615} with \"quotes\"").unwrap();
    save(&storage, &store);

    let store = reload(&storage);
    assert_eq!(
        store.get("t-1").unwrap().text,
        "caf\u{e9} run \u{2615} with \"quotes\""
    );
}

// ---------------------------------------------------------------------------
// Launch sequence: config + theme + tasks from one directory
// ---------------------------------------------------------------------------

#[test]
fn launch_reads_config_theme_and_tasks_together() {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::new(tmp.path());
    fs::write(
        tmp.path().join("config.toml"),
        "sort = \"newest-first\"\ntimestamps = false\n",
    )
    .unwrap();
    storage.save_theme(ThemeMode::Light).unwrap();
    storage
        .save_tasks(&[Task::new("t-1", "carried over")])
        .unwrap();

    let config = read_config(storage.dir());
    assert_eq!(config.sort, Sort::NewestFirst);
    assert!(!config.timestamps);
    assert_eq!(storage.load_theme(), Some(ThemeMode::Light));

    let store = TaskStore::new(
        storage.load_tasks(),
        StoreOptions {
            stamp_created: config.timestamps,
            sort: config.sort,
        },
    );
    assert_eq!(texts(&store), ["carried over"]);
}
