//! Store + backend round-trip tests through the public library API.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use todos::io::backend::{JsonFileBackend, PersistError, StoreBackend};
use todos::store::TodoStore;

fn backend_in(tmp: &TempDir) -> JsonFileBackend {
    JsonFileBackend::new(tmp.path().join("todos.json"))
}

#[test]
fn full_session_round_trip() {
    let tmp = TempDir::new().unwrap();
    let backend = backend_in(&tmp);

    // First session: two adds and a toggle
    let mut store = TodoStore::from_todos(backend.load().unwrap());
    store.add("Buy milk", "2%").unwrap();
    store.add("Walk dog", "evening").unwrap();
    store.toggle_done(0).unwrap();
    backend.save(store.todos()).unwrap();

    // Second session sees the identical two-element list
    let restored = TodoStore::from_todos(backend.load().unwrap());
    assert_eq!(restored.todos(), store.todos());
    assert_eq!(restored.len(), 2);
    assert!(restored.get(0).unwrap().is_done);
    assert!(!restored.get(1).unwrap().is_done);
    assert_eq!(restored.get(1).unwrap().title, "Walk dog");
}

#[test]
fn empty_store_round_trips() {
    let tmp = TempDir::new().unwrap();
    let backend = backend_in(&tmp);

    backend.save(&[]).unwrap();
    let restored = TodoStore::from_todos(backend.load().unwrap());
    assert!(restored.is_empty());
}

#[test]
fn order_survives_delete_and_save() {
    let tmp = TempDir::new().unwrap();
    let backend = backend_in(&tmp);

    let mut store = TodoStore::new();
    for (title, description) in [("a", "1"), ("b", "2"), ("c", "3")] {
        store.add(title, description).unwrap();
    }
    store.delete(1).unwrap();
    backend.save(store.todos()).unwrap();

    let restored = TodoStore::from_todos(backend.load().unwrap());
    let titles: Vec<&str> = restored.todos().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c"]);
    // Surviving ids are untouched
    assert_eq!(restored.get(0).unwrap().title, "a");
    assert_eq!(restored.get(2).unwrap().title, "c");
    // And the counter does not reuse the deleted id
    let mut restored = restored;
    assert_eq!(restored.add("d", "4").unwrap(), 3);
}

#[test]
fn clear_then_reload_from_fresh_file_is_empty() {
    let tmp = TempDir::new().unwrap();
    let backend = backend_in(&tmp);

    let mut store = TodoStore::new();
    store.add("a", "1").unwrap();
    backend.save(store.todos()).unwrap();

    store.clear();
    backend.save(store.todos()).unwrap();

    let restored = TodoStore::from_todos(backend.load().unwrap());
    assert!(restored.is_empty());

    // A never-written path also loads empty
    let fresh = JsonFileBackend::new(tmp.path().join("other.json"));
    assert!(fresh.load().unwrap().is_empty());
}

#[test]
fn corrupt_file_surfaces_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let backend = backend_in(&tmp);
    std::fs::write(backend.path(), "[{\"id\": }]").unwrap();

    assert!(matches!(
        backend.load(),
        Err(PersistError::Parse { .. })
    ));
}

#[test]
fn wire_format_matches_the_original_file_layout() {
    let tmp = TempDir::new().unwrap();
    let backend = backend_in(&tmp);

    // A compact hand-written file in the persisted layout
    std::fs::write(
        backend.path(),
        r#"[{"id":0,"title":"Buy milk","description":"2%","isDone":false},
            {"id":1,"title":"Walk dog","description":"evening","isDone":true}]"#,
    )
    .unwrap();

    let store = TodoStore::from_todos(backend.load().unwrap());
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(0).unwrap().title, "Buy milk");
    assert!(store.get(1).unwrap().is_done);

    // Writing it back keeps the same field names
    backend.save(store.todos()).unwrap();
    let json = std::fs::read_to_string(backend.path()).unwrap();
    assert!(json.contains("\"isDone\""));
    assert!(!json.contains("\"is_done\""));
}
