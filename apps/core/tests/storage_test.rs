use std::time::{SystemTime, UNIX_EPOCH};

use navhub_core::storage::{JsonFileStore, KvStore, MemoryStore};

fn unique_path(label: &str) -> std::path::PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("navhub-storage-{label}-{unique}.json"))
}

#[test]
fn memory_store_round_trips() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("navhub.theme"), None);
    store.set("navhub.theme", "dark");
    assert_eq!(store.get("navhub.theme").as_deref(), Some("dark"));
    store.set("navhub.theme", "light");
    assert_eq!(store.get("navhub.theme").as_deref(), Some("light"));
}

#[test]
fn file_store_persists_across_opens() {
    let path = unique_path("persist");

    let mut store = JsonFileStore::open(&path);
    store.set("navhub.theme", "system");
    store.set("navhub.locale", "en-US");
    drop(store);

    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.get("navhub.theme").as_deref(), Some("system"));
    assert_eq!(reopened.get("navhub.locale").as_deref(), Some("en-US"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn corrupt_file_falls_back_to_empty_store() {
    let path = unique_path("corrupt");
    std::fs::write(&path, "not json at all").unwrap();

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get("navhub.theme"), None);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_parent_directories_are_created_on_write() {
    let path = unique_path("nested")
        .with_extension("")
        .join("deep")
        .join("prefs.json");

    let mut store = JsonFileStore::open(&path);
    store.set("navhub.theme", "dark");

    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.get("navhub.theme").as_deref(), Some("dark"));

    std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap()).unwrap();
}
