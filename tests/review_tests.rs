// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Review route tests, including the submitter-email routes.

use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::{create, send};

#[tokio::test]
async fn test_review_crud() {
    let (app, _state) = common::create_test_app();
    let id = create(
        &app,
        "/review",
        json!({ "email": "a@example.com", "content": "Great iftar" }),
    )
    .await;

    let (status, doc) = send(&app, Method::GET, &format!("/review/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["content"], "Great iftar");

    let (status, doc) = send(
        &app,
        Method::PATCH,
        &format!("/review/{}", id),
        Some(json!({ "content": "Great iftar, long queue" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["document"]["content"], "Great iftar, long queue");
    assert_eq!(doc["document"]["email"], "a@example.com");

    let (status, _) = send(&app, Method::DELETE, &format!("/review/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &format!("/review/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_review_create_does_not_echo_document() {
    let (app, _state) = common::create_test_app();

    let (status, json) = send(
        &app,
        Method::POST,
        "/review",
        Some(json!({ "email": "a@example.com", "content": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["acknowledged"], true);
    assert!(json.get("document").is_none());
}

#[tokio::test]
async fn test_list_by_email_is_exact_and_case_sensitive() {
    let (app, _state) = common::create_test_app();
    create(&app, "/review", json!({ "email": "a@example.com", "content": "1" })).await;
    create(&app, "/review", json!({ "email": "b@example.com", "content": "2" })).await;
    create(&app, "/review", json!({ "email": "a@example.com", "content": "3" })).await;
    create(&app, "/review", json!({ "email": "A@example.com", "content": "4" })).await;

    let (status, docs) = send(&app, Method::GET, "/review/user/a@example.com", None).await;
    assert_eq!(status, StatusCode::OK);
    let contents: Vec<&str> = docs
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["1", "3"]);
}

#[tokio::test]
async fn test_list_by_unknown_email_is_empty_array() {
    let (app, _state) = common::create_test_app();

    let (status, docs) = send(&app, Method::GET, "/review/user/nobody@example.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(docs, json!([]));
}

#[tokio::test]
async fn test_delete_by_email_reports_count() {
    let (app, _state) = common::create_test_app();
    create(&app, "/review", json!({ "email": "a@example.com", "content": "1" })).await;
    create(&app, "/review", json!({ "email": "a@example.com", "content": "2" })).await;
    let keep = create(&app, "/review", json!({ "email": "b@example.com", "content": "3" })).await;

    let (status, ack) = send(&app, Method::DELETE, "/review/user/a@example.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({ "acknowledged": true, "deletedCount": 2 }));

    // Zero matches is still a success.
    let (status, ack) = send(&app, Method::DELETE, "/review/user/a@example.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["deletedCount"], 0);

    let (_, docs) = send(&app, Method::GET, "/review", None).await;
    let docs = docs.as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["_id"], keep.as_str());
}

#[tokio::test]
async fn test_percent_encoded_email_is_decoded() {
    let (app, _state) = common::create_test_app();
    create(&app, "/review", json!({ "email": "a+iftar@example.com", "content": "1" })).await;

    let (status, docs) = send(&app, Method::GET, "/review/user/a%2Biftar%40example.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(docs.as_array().unwrap().len(), 1);
}
