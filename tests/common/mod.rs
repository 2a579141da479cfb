// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use ifter_spot_api::db::{DocumentStore, MemoryStore, MongoStore};
use ifter_spot_api::routes::create_router;
use ifter_spot_api::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if a MongoDB deployment is available via environment variable.
#[allow(dead_code)]
pub fn mongo_available() -> bool {
    std::env::var("MONGODB_URI").is_ok()
}

/// Skip test with message if MongoDB is not available.
#[macro_export]
macro_rules! require_mongo {
    () => {
        if !crate::common::mongo_available() {
            eprintln!("⚠️  Skipping: MONGODB_URI not set");
            return;
        }
    };
}

/// Connect to the MongoDB deployment named by `MONGODB_URI`.
#[allow(dead_code)]
pub async fn test_mongo() -> MongoStore {
    let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI not set");
    MongoStore::connect(&uri, "IfterSpotTest")
        .await
        .expect("Failed to connect to MongoDB")
}

/// Create a test app backed by a fresh in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with(Arc::new(MemoryStore::new()))
}

/// Create a test app backed by `store`.
#[allow(dead_code)]
pub fn create_test_app_with(store: Arc<dyn DocumentStore>) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState { store });

    (create_router(state.clone()), state)
}

/// Send one request and decode the JSON response body (`Value::Null` if empty
/// or not JSON).
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// POST `body` to `path` and return the store-assigned id.
#[allow(dead_code)]
pub async fn create(app: &Router, path: &str, body: Value) -> String {
    let (status, json) = send(app, Method::POST, path, Some(body)).await;
    assert_eq!(status, StatusCode::OK, "create failed: {}", json);
    json["insertedId"]
        .as_str()
        .expect("insertedId missing")
        .to_string()
}
