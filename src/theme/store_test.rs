use super::*;

#[test]
fn memory_store_round_trips() {
    let store = MemoryPreferenceStore::new();
    assert_eq!(store.get("theme"), None);
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn missing_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferenceStore::open(dir.path().join("prefs.json")).unwrap();
    assert_eq!(store.get("theme"), None);
}

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");

    let store = FilePreferenceStore::open(&path).unwrap();
    store.set("theme", "dark").unwrap();
    store.set("lang", "pt").unwrap();
    drop(store);

    let reopened = FilePreferenceStore::open(&path).unwrap();
    assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    assert_eq!(reopened.get("lang").as_deref(), Some("pt"));
    assert_eq!(reopened.path(), path.as_path());
}

#[test]
fn corrupt_file_is_treated_as_empty_and_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = FilePreferenceStore::open(&path).unwrap();
    assert_eq!(store.get("theme"), None);

    store.set("theme", "light").unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.get("theme").map(String::as_str), Some("light"));
}

#[test]
fn unreadable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be read as a file.
    let err = FilePreferenceStore::open(dir.path()).err().unwrap();
    assert!(matches!(err, StoreError::Io { .. }));
}
