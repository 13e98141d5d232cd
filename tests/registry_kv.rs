use std::sync::Arc;

use qr_redirect::domain::entities::{QrCode, QrStyle};
use qr_redirect::domain::repositories::CodeRegistry;
use qr_redirect::infrastructure::kv::{KvStore, MemoryStore};
use qr_redirect::infrastructure::persistence::KvRegistry;

fn sample_code(id: &str, slug: &str, created_at: i64) -> QrCode {
    QrCode {
        id: id.to_string(),
        title: format!("Code {}", id),
        slug: slug.to_string(),
        target_url: "https://example.com".to_string(),
        created_at,
        scan_count: 0,
        last_scanned: None,
        style: QrStyle::default(),
    }
}

fn make_registry() -> (KvRegistry<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (KvRegistry::new(store.clone()), store)
}

#[tokio::test]
async fn test_store_and_find_round_trip() {
    let (registry, _store) = make_registry();

    let code = sample_code("id-1", "promo", 100);
    registry.store(&code).await.unwrap();
    registry.init_scan_stats("id-1", 0, None).await.unwrap();

    let loaded = registry.find_by_id("id-1").await.unwrap().unwrap();
    assert_eq!(loaded, code);

    assert!(registry.find_by_id("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_slug_index_round_trip() {
    let (registry, _store) = make_registry();

    registry.register_slug("promo", "id-1").await.unwrap();
    assert_eq!(
        registry.find_id_by_slug("promo").await.unwrap().as_deref(),
        Some("id-1")
    );

    registry.unregister_slug("promo").await.unwrap();
    assert!(registry.find_id_by_slug("promo").await.unwrap().is_none());
}

#[tokio::test]
async fn test_record_scan_accumulates_and_hydrates() {
    let (registry, _store) = make_registry();

    registry.store(&sample_code("id-1", "promo", 100)).await.unwrap();
    registry.init_scan_stats("id-1", 0, None).await.unwrap();

    assert_eq!(registry.record_scan("id-1", 1_000).await.unwrap(), 1);
    assert_eq!(registry.record_scan("id-1", 2_000).await.unwrap(), 2);

    let loaded = registry.find_by_id("id-1").await.unwrap().unwrap();
    assert_eq!(loaded.scan_count, 2);
    assert_eq!(loaded.last_scanned, Some(2_000));
}

#[tokio::test]
async fn test_init_scan_stats_supports_imported_history() {
    let (registry, _store) = make_registry();

    registry.store(&sample_code("id-1", "promo", 100)).await.unwrap();
    registry.init_scan_stats("id-1", 40, Some(9_000)).await.unwrap();

    let loaded = registry.find_by_id("id-1").await.unwrap().unwrap();
    assert_eq!(loaded.scan_count, 40);
    assert_eq!(loaded.last_scanned, Some(9_000));

    // The imported base keeps counting from where it left off.
    assert_eq!(registry.record_scan("id-1", 10_000).await.unwrap(), 41);
}

#[tokio::test]
async fn test_list_all_returns_every_stored_record() {
    let (registry, _store) = make_registry();

    for (id, slug, created_at) in [("a", "slug-a", 1), ("b", "slug-b", 2)] {
        let code = sample_code(id, slug, created_at);
        registry.store(&code).await.unwrap();
        registry.init_scan_stats(id, 0, None).await.unwrap();
        registry.add_id(id).await.unwrap();
    }

    let mut ids: Vec<String> = registry
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|code| code.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_list_all_drops_ids_with_missing_bodies() {
    let (registry, _store) = make_registry();

    let code = sample_code("kept", "slug-kept", 1);
    registry.store(&code).await.unwrap();
    registry.init_scan_stats("kept", 0, None).await.unwrap();
    registry.add_id("kept").await.unwrap();

    // Stale id in the set with no record body behind it.
    registry.add_id("ghost").await.unwrap();

    let listed = registry.list_all().await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "kept");
}

#[tokio::test]
async fn test_list_all_drops_unreadable_bodies() {
    let (registry, store) = make_registry();

    let code = sample_code("kept", "slug-kept", 1);
    registry.store(&code).await.unwrap();
    registry.init_scan_stats("kept", 0, None).await.unwrap();
    registry.add_id("kept").await.unwrap();

    store.set("code:corrupt", "{ not json").await.unwrap();
    registry.add_id("corrupt").await.unwrap();

    let listed = registry.list_all().await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "kept");
}

#[tokio::test]
async fn test_remove_clears_body_and_scan_keys() {
    let (registry, store) = make_registry();

    registry.store(&sample_code("id-1", "promo", 100)).await.unwrap();
    registry.init_scan_stats("id-1", 0, None).await.unwrap();
    registry.record_scan("id-1", 1_000).await.unwrap();

    registry.remove("id-1").await.unwrap();

    assert!(registry.find_by_id("id-1").await.unwrap().is_none());
    assert!(store.get("code:id-1").await.unwrap().is_none());
    assert!(store.get("scans:id-1").await.unwrap().is_none());
    assert!(store.get("last_scan:id-1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_key_layout_matches_store_contract() {
    let (registry, store) = make_registry();

    let code = sample_code("id-1", "promo", 100);
    registry.store(&code).await.unwrap();
    registry.register_slug("promo", "id-1").await.unwrap();
    registry.add_id("id-1").await.unwrap();

    assert!(store.get("code:id-1").await.unwrap().is_some());
    assert_eq!(
        store.get("slug:promo").await.unwrap().as_deref(),
        Some("id-1")
    );
    assert_eq!(store.smembers("codes").await.unwrap(), vec!["id-1"]);

    // Body JSON uses the camelCase wire names.
    let raw = store.get("code:id-1").await.unwrap().unwrap();
    let body: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(body["targetUrl"], "https://example.com");
    assert_eq!(body["createdAt"], 100);
}
