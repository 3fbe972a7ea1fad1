//! Common test utilities.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;

use clientbook_core::{ExportOptions, MemoryStore};
use clientbook_server::db::{self, SqliteStore};
use clientbook_server::{app, AppState};

/// Test app over an empty in-memory store.
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    memory_app_with(ExportOptions::default())
}

pub fn memory_app_with(options: ExportOptions) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), options);
    (app(state), store)
}

/// SQLite store over a fresh in-memory database with the schema applied.
pub async fn sqlite_store() -> SqliteStore {
    let pool = db::create_memory_pool().await.unwrap();
    db::init_schema(&pool).await.unwrap();
    SqliteStore::new(pool)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST with a raw body and optional content type.
pub fn post_raw(uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::post(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}
