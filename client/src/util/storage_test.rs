use super::*;

#[test]
fn store_tokens_writes_both_keys() {
    let store = MemoryStorage::default();
    store_tokens(
        &store,
        &TokenPair { access_token: "acc".to_owned(), refresh_token: Some("ref".to_owned()) },
    );
    assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("acc"));
    assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("ref"));
}

#[test]
fn store_tokens_without_refresh_drops_old_refresh() {
    let store = MemoryStorage::default();
    store.set(REFRESH_TOKEN_KEY, "stale");
    store_tokens(&store, &TokenPair { access_token: "acc".to_owned(), refresh_token: None });
    assert!(!store.contains(REFRESH_TOKEN_KEY));
}

#[test]
fn clear_tokens_removes_both() {
    let store = MemoryStorage::default();
    store.set(ACCESS_TOKEN_KEY, "acc");
    store.set(REFRESH_TOKEN_KEY, "ref");
    clear_tokens(&store);
    assert!(!store.contains(ACCESS_TOKEN_KEY));
    assert!(!store.contains(REFRESH_TOKEN_KEY));
}

#[test]
fn access_token_ignores_blank() {
    let store = MemoryStorage::default();
    assert_eq!(access_token(&store), None);
    store.set(ACCESS_TOKEN_KEY, "   ");
    assert_eq!(access_token(&store), None);
    store.set(ACCESS_TOKEN_KEY, "tok");
    assert_eq!(access_token(&store).as_deref(), Some("tok"));
}

#[test]
fn load_json_treats_corrupt_value_as_absent() {
    let store = MemoryStorage::default();
    store.set("k", "{not json");
    assert_eq!(load_json::<Vec<u32>>(&store, "k"), None);
    save_json(&store, "k", &vec![1_u32, 2]);
    assert_eq!(load_json::<Vec<u32>>(&store, "k"), Some(vec![1, 2]));
}

#[test]
fn browser_storage_is_inert_off_browser() {
    let store = BrowserStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
}
