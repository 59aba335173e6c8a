use super::*;

#[test]
fn collection_keys_are_distinct_and_prefixed() {
    let keys: std::collections::HashSet<_> = CollectionKey::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(keys.len(), CollectionKey::ALL.len());
    assert!(keys.iter().all(|k| k.starts_with("hibridshop_")));
    assert!(!keys.contains(ADMIN_AUTH_KEY));
}

#[test]
fn memory_storage_returns_none_for_missing_key() {
    let store = MemoryStorage::new();
    assert_eq!(store.load("nope"), None);
}

#[test]
fn memory_storage_overwrites_and_logs_writes() {
    let store = MemoryStorage::new();
    store.save("a", "1");
    store.save("b", "2");
    store.save("a", "3");
    assert_eq!(store.load("a").as_deref(), Some("3"));
    assert_eq!(store.writes(), vec!["a", "b", "a"]);
    store.clear_writes();
    assert!(store.writes().is_empty());
}

#[test]
fn json_round_trip_through_store() {
    let store = MemoryStorage::new();
    save_json(&store, "list", &vec![1u32, 2, 3]);
    assert_eq!(store.load("list").as_deref(), Some("[1,2,3]"));
    assert_eq!(load_json::<Vec<u32>>(&store, "list"), Some(vec![1, 2, 3]));
}

#[test]
fn load_json_swallows_parse_failure() {
    let store = MemoryStorage::new();
    store.save("list", "{not json");
    assert_eq!(load_json::<Vec<u32>>(&store, "list"), None);
}

#[test]
fn load_json_rejects_wrong_shape() {
    let store = MemoryStorage::new();
    store.save("list", r#"{"a":1}"#);
    assert_eq!(load_json::<Vec<u32>>(&store, "list"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_without_hydrate() {
    let store = BrowserStorage;
    store.save("k", "v");
    assert_eq!(store.load("k"), None);
}
