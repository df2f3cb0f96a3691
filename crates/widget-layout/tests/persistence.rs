//! Persistence tests
//!
//! Tests restart round-trips, verbatim loading and corrupt records
//! Uses real files in temp directories

use std::fs;
use tempfile::tempdir;
use widget_layout::{
    default_widgets, edit, FileBackend, LayoutBackend, LayoutStore, LoadSource, MemoryBackend,
    SCHEMA_VERSION,
};

#[test]
fn test_file_restart_returns_updated_layout() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("layout.json");

    let mut store = LayoutStore::open(FileBackend::new(&path));
    let hidden = edit::set_visible(store.widgets(), "missed-calls", false).expect("edit");
    let moved = edit::move_to(&hidden, "campaign-performance", 1).expect("edit");
    store.update_widgets(moved.clone()).expect("update");
    drop(store);

    let restarted = LayoutStore::open(FileBackend::new(&path));
    assert_eq!(restarted.widgets(), moved.as_slice());
    assert_eq!(
        restarted.load_source(),
        LoadSource::Persisted {
            version: SCHEMA_VERSION
        }
    );
}

#[test]
fn test_memory_restart_returns_updated_layout() {
    let mut store = LayoutStore::open(MemoryBackend::new());
    let mut widgets = default_widgets();
    widgets.truncate(3);
    store.update_widgets(widgets.clone()).expect("update");

    let document = store
        .backend()
        .document()
        .expect("document should be stored")
        .to_string();
    let restarted = LayoutStore::open(MemoryBackend::with_document(document));
    assert_eq!(restarted.widgets(), widgets.as_slice());
}

#[test]
fn test_old_record_is_not_merged_with_new_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("layout.json");

    // Record written before campaign-performance existed
    let mut old_widgets = default_widgets();
    old_widgets.retain(|w| w.id != "campaign-performance");
    let legacy = serde_json::json!({ "widgets": old_widgets });
    fs::write(&path, legacy.to_string()).expect("Write failed");

    let store = LayoutStore::open(FileBackend::new(&path));
    assert_eq!(store.widgets().len(), 6);
    assert!(store.widget("campaign-performance").is_none());
    assert_eq!(store.widgets(), old_widgets.as_slice());
}

#[test]
fn test_state_envelope_record_loads() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("layout.json");
    let mut widgets = default_widgets();
    widgets[1].visible = false;
    let envelope = serde_json::json!({
        "state": { "widgets": widgets },
        "version": 0
    });
    fs::write(&path, envelope.to_string()).expect("Write failed");

    let store = LayoutStore::open(FileBackend::new(&path));
    assert_eq!(store.widgets(), widgets.as_slice());
    assert_eq!(store.arranged().len(), 6);
    assert_eq!(store.load_source(), LoadSource::Persisted { version: 0 });
}

#[test]
fn test_legacy_record_reports_its_version_until_rewritten() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("layout.json");
    let legacy = serde_json::json!({ "widgets": default_widgets() });
    fs::write(&path, legacy.to_string()).expect("Write failed");

    let mut store = LayoutStore::open(FileBackend::new(&path));
    assert_eq!(store.load_source(), LoadSource::Persisted { version: 0 });
    store.reset_layout();
    drop(store);

    let reopened = LayoutStore::open(FileBackend::new(&path));
    assert_eq!(
        reopened.load_source(),
        LoadSource::Persisted {
            version: SCHEMA_VERSION
        }
    );
}

#[test]
fn test_corrupt_record_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("layout.json");
    fs::write(&path, "{\"widgets\": [ truncated").expect("Write failed");

    let store = LayoutStore::open(FileBackend::new(&path));
    assert_eq!(store.widgets(), default_widgets().as_slice());
    assert_eq!(store.load_source(), LoadSource::Fallback);

    let on_disk = fs::read_to_string(&path).expect("Read failed");
    assert!(
        on_disk.contains("truncated"),
        "opening must not overwrite the unreadable record"
    );
}

#[test]
fn test_newer_version_record_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("layout.json");
    let future = serde_json::json!({ "version": SCHEMA_VERSION + 1, "widgets": [] });
    fs::write(&path, future.to_string()).expect("Write failed");

    let store = LayoutStore::open(FileBackend::new(&path));
    assert_eq!(store.load_source(), LoadSource::Fallback);
    assert_eq!(store.widgets().len(), 7);
}

#[test]
fn test_saved_file_is_versioned_document() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("layout.json");
    let mut store = LayoutStore::open(FileBackend::new(&path));
    store.reset_layout();

    let content = fs::read_to_string(&path).expect("Read failed");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    assert_eq!(value["version"], SCHEMA_VERSION);
    assert_eq!(value["widgets"][0]["id"], "stats");
    assert_eq!(value["widgets"][0]["component"], "StatsCards");
}

#[test]
fn test_unwritable_location_keeps_session_usable() {
    let dir = tempdir().expect("Failed to create temp directory");
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file in the way").expect("Write failed");
    let path = blocker.join("layout.json");

    let mut store = LayoutStore::open(FileBackend::new(&path));
    let hidden = edit::set_visible(store.widgets(), "stats", false).expect("edit");
    let status = store.update_widgets(hidden.clone()).expect("update");

    assert!(!status.is_saved());
    assert_eq!(store.widgets(), hidden.as_slice());
}

#[test]
fn test_clear_then_open_yields_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("layout.json");

    let mut store = LayoutStore::open(FileBackend::new(&path));
    store.update_widgets(Vec::new()).expect("update");
    store.backend_mut().clear().expect("clear");
    drop(store);

    let store = LayoutStore::open(FileBackend::new(&path));
    assert_eq!(store.load_source(), LoadSource::Defaults);
    assert_eq!(store.widgets().len(), 7);
}
