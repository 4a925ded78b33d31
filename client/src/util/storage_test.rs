use super::*;

#[test]
fn memory_storage_get_missing_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("accessibility-theme"), Ok(None));
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("accessibility-theme", "dark").unwrap();
    assert_eq!(storage.get("accessibility-theme"), Ok(Some("dark".to_owned())));
    storage.set("accessibility-theme", "light").unwrap();
    assert_eq!(storage.get("accessibility-theme"), Ok(Some("light".to_owned())));
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::with_entries([("accessibility-font-size", "large")]);
    let handle = storage.clone();
    handle.set("accessibility-font-size", "small").unwrap();
    assert_eq!(storage.get("accessibility-font-size"), Ok(Some("small".to_owned())));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_outside_browser() {
    let storage = BrowserStorage;
    assert!(matches!(storage.get("accessibility-theme"), Err(PreferenceError::StorageUnavailable(_))));
    assert!(matches!(storage.set("accessibility-theme", "dark"), Err(PreferenceError::StorageUnavailable(_))));
}
