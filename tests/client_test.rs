//! Integration tests for the authenticated API client.

mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use common::{MockBackend, Reply};
use simpadu::storage::{MemoryStore, SessionStore, TOKEN_KEY, USER_KEY};
use simpadu::{ApiClient, Method, RequestError, StatusCode};

fn client(backend: &MockBackend, store: Arc<MemoryStore>) -> ApiClient {
    ApiClient::with_base_url(&backend.base_url, Duration::from_secs(5), store).unwrap()
}

#[actix_web::test]
async fn attaches_stored_token_as_bearer() {
    let backend = MockBackend::start(|_, _| Reply::json(json!([])));
    let store = Arc::new(MemoryStore::new());
    store.set_item(TOKEN_KEY, "tok-123").unwrap();
    let client = client(&backend, store.clone());

    let _: Value = client.get("/api/pegawai").await.unwrap();
    store.set_item(TOKEN_KEY, "tok-456").unwrap();
    let _: Value = client.post("api/presensi", &json!({"x": 1})).await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer tok-123"));
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer tok-456"));
    assert_eq!(requests[1].path, "/api/presensi");
    assert_eq!(requests[1].body, json!({"x": 1}));
}

#[actix_web::test]
async fn sends_no_authorization_without_token() {
    let backend = MockBackend::start(|_, _| Reply::json(json!({"ok": true})));
    let store = Arc::new(MemoryStore::new());
    let client = client(&backend, store.clone());

    let body = client
        .request(Method::GET, "/api/pegawai", None::<&()>)
        .await
        .unwrap();
    assert_eq!(body, json!({"ok": true}));

    store.set_item(TOKEN_KEY, "").unwrap();
    let _: Value = client.get("/api/pegawai").await.unwrap();

    for request in backend.requests() {
        assert_eq!(request.authorization, None);
    }
}

#[actix_web::test]
async fn unauthorized_is_returned_and_session_left_alone() {
    let backend = MockBackend::start(|_, _| {
        Reply::with_status(401, json!({"message": "Token expired"}))
    });
    let store = Arc::new(MemoryStore::new());
    store.set_item(TOKEN_KEY, "stale").unwrap();
    store.set_item(USER_KEY, r#"{"id":1}"#).unwrap();
    let client = client(&backend, store.clone());

    let err = client.get::<Value>("/api/pegawai").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.server_message(), Some("Token expired"));

    assert_eq!(store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("stale"));
    assert_eq!(store.get_item(USER_KEY).unwrap().as_deref(), Some(r#"{"id":1}"#));
    assert_eq!(backend.request_count(), 1);
}

#[actix_web::test]
async fn non_json_error_body_has_no_message() {
    let backend = MockBackend::start(|_, _| Reply::raw(502, "<html>Bad Gateway</html>"));
    let client = client(&backend, Arc::new(MemoryStore::new()));

    let err = client.delete::<Value>("/api/pegawai/3").await.unwrap_err();
    match err {
        RequestError::Status { status, message } => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(message, None);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[actix_web::test]
async fn empty_success_body_is_null() {
    let backend = MockBackend::start(|_, _| Reply::empty(204));
    let client = client(&backend, Arc::new(MemoryStore::new()));

    let body: Value = client.put("/api/pegawai", &json!({})).await.unwrap();
    assert_eq!(body, Value::Null);
}

#[actix_web::test]
async fn slow_server_hits_the_timeout() {
    let backend =
        MockBackend::start(|_, _| Reply::json(json!([])).delayed(Duration::from_secs(2)));
    let client = ApiClient::with_base_url(
        &backend.base_url,
        Duration::from_millis(200),
        Arc::new(MemoryStore::new()),
    )
    .unwrap();

    let err = client.get::<Value>("/api/pegawai").await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}

#[actix_web::test]
async fn unreachable_server_is_a_transport_error() {
    let client = ApiClient::with_base_url(
        "http://127.0.0.1:9",
        Duration::from_secs(2),
        Arc::new(MemoryStore::new()),
    )
    .unwrap();

    let err = client.get::<Value>("/api/pegawai").await.unwrap_err();
    assert!(matches!(err, RequestError::Transport(_)));
    assert_eq!(err.user_message("Tidak dapat terhubung"), "Tidak dapat terhubung");
}

#[actix_web::test]
async fn upload_photo_sends_multipart_and_returns_filename() {
    let backend = MockBackend::start(|_, _| Reply::json(json!({"filename": "foto-17.jpg"})));
    let store = Arc::new(MemoryStore::new());
    store.set_item(TOKEN_KEY, "tok").unwrap();
    let client = client(&backend, store);

    let name = client
        .upload_photo(vec![0xFF, 0xD8, 0xFF, 0xE0], "photo.jpg")
        .await
        .unwrap();
    assert_eq!(name, "foto-17.jpg");

    let request = &backend.requests()[0];
    assert_eq!(request.path, "/uploads");
    assert_eq!(request.authorization.as_deref(), Some("Bearer tok"));
    assert!(
        request
            .content_type
            .as_deref()
            .unwrap_or_default()
            .starts_with("multipart/form-data")
    );
    assert!(request.raw_len > 4);
}
