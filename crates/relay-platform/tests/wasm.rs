//! WASM-target tests for relay-platform (Node.js runtime).
//!
//! Tests MemoryStorage and the request-URL builder under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! LocalStorage and the live HTTP client need a browser environment and
//! are covered indirectly through the core's port contracts.

use wasm_bindgen_test::*;

use relay_core::ports::StoragePort;
use relay_platform::api::build_url;
use relay_platform::storage::MemoryStorage;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    let result = storage.get("nonexistent").await.unwrap();
    assert!(result.is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_set_and_get() {
    let storage = MemoryStorage::new();
    storage.set("key1", b"value1").await.unwrap();
    let result = storage.get("key1").await.unwrap();
    assert_eq!(result, Some(b"value1".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", b"v1").await.unwrap();
    storage.set("key", b"v2").await.unwrap();
    let result = storage.get("key").await.unwrap();
    assert_eq!(result, Some(b"v2".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_empty_value() {
    let storage = MemoryStorage::new();
    storage.set("empty", b"").await.unwrap();
    let result = storage.get("empty").await.unwrap().unwrap();
    assert!(result.is_empty());
}

// ─── build_url Tests ─────────────────────────────────────

#[wasm_bindgen_test]
fn build_url_no_params() {
    assert_eq!(build_url("/newsession", &[], None), "/newsession");
}

#[wasm_bindgen_test]
fn build_url_single_param() {
    assert_eq!(
        build_url("/sessionexists", &[("id", "abc123")], None),
        "/sessionexists?id=abc123"
    );
}

#[wasm_bindgen_test]
fn build_url_multiple_params() {
    assert_eq!(
        build_url(
            "/editsession",
            &[("id", "abc123"), ("httpProxy", "proxy")],
            None
        ),
        "/editsession?id=abc123&httpProxy=proxy"
    );
}

#[wasm_bindgen_test]
fn build_url_encodes_values() {
    assert_eq!(
        build_url(
            "/editsession",
            &[("id", "abc123"), ("httpProxy", "http://proxy.local:8080")],
            None
        ),
        "/editsession?id=abc123&httpProxy=http%3A%2F%2Fproxy.local%3A8080"
    );
}

#[wasm_bindgen_test]
fn build_url_appends_secret_without_existing_query() {
    assert_eq!(
        build_url("/newsession", &[], Some("hunter2")),
        "/newsession?pwd=hunter2"
    );
}

#[wasm_bindgen_test]
fn build_url_appends_secret_after_existing_params() {
    assert_eq!(
        build_url("/sessionexists", &[("id", "abc123")], Some("hunter2")),
        "/sessionexists?id=abc123&pwd=hunter2"
    );
}

#[wasm_bindgen_test]
fn build_url_appends_to_path_with_query() {
    assert_eq!(
        build_url("/page?tab=1", &[("id", "x")], Some("s")),
        "/page?tab=1&id=x&pwd=s"
    );
}

#[wasm_bindgen_test]
fn build_url_encodes_secret() {
    assert_eq!(
        build_url("/newsession", &[], Some("p&w=d")),
        "/newsession?pwd=p%26w%3Dd"
    );
}
