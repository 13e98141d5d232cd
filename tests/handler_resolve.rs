mod common;

use serde_json::Value;

/// Fetches a record's current state through the authorized listing.
async fn fetch_code(server: &axum_test::TestServer, id: &str) -> Value {
    let response = server
        .get("/codes")
        .add_header("Authorization", common::bearer())
        .await;
    response.assert_status_ok();

    response
        .json::<Value>()
        .as_array()
        .unwrap()
        .iter()
        .find(|code| code["id"] == id)
        .cloned()
        .expect("record should be listed")
}

#[tokio::test]
async fn test_resolve_returns_target_url_without_auth() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let payload = common::code_payload("id-1", "promo", "https://x.com", 100);
    common::create_code(&server, &payload).await;

    // No Authorization header: the resolution path is public.
    let response = server.get("/resolve/promo").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["targetUrl"], "https://x.com");
}

#[tokio::test]
async fn test_resolve_unknown_slug_is_not_found() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/resolve/missing").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_each_resolve_increments_scan_count_by_one() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let payload = common::code_payload("id-1", "promo", "https://x.com", 100);
    common::create_code(&server, &payload).await;

    assert_eq!(fetch_code(&server, "id-1").await["scanCount"], 0);

    server.get("/resolve/promo").await.assert_status_ok();
    assert_eq!(fetch_code(&server, "id-1").await["scanCount"], 1);

    server.get("/resolve/promo").await.assert_status_ok();
    assert_eq!(fetch_code(&server, "id-1").await["scanCount"], 2);
}

#[tokio::test]
async fn test_resolve_stamps_last_scanned() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let payload = common::code_payload("id-1", "promo", "https://x.com", 100);
    common::create_code(&server, &payload).await;

    // Never scanned: the field is omitted.
    assert!(fetch_code(&server, "id-1").await.get("lastScanned").is_none());

    let before = chrono::Utc::now().timestamp_millis();
    server.get("/resolve/promo").await.assert_status_ok();
    let after = chrono::Utc::now().timestamp_millis();

    let last_scanned = fetch_code(&server, "id-1").await["lastScanned"]
        .as_i64()
        .expect("lastScanned should be set after a scan");

    assert!(last_scanned >= before && last_scanned <= after);
}

#[tokio::test]
async fn test_update_does_not_reset_scan_count() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let payload = common::code_payload("id-1", "promo", "https://x.com", 100);
    common::create_code(&server, &payload).await;

    server.get("/resolve/promo").await.assert_status_ok();
    server.get("/resolve/promo").await.assert_status_ok();

    server
        .put("/codes/id-1")
        .add_header("Authorization", common::bearer())
        .json(&serde_json::json!({ "title": "Renamed" }))
        .await
        .assert_status_ok();

    let code = fetch_code(&server, "id-1").await;
    assert_eq!(code["title"], "Renamed");
    assert_eq!(code["scanCount"], 2);
}
