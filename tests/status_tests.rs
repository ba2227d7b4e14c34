// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

mod common;

use axum::http::StatusCode;
use linkboard::models::TokenRecord;
use tower::ServiceExt;

#[tokio::test]
async fn test_status_not_connected_when_store_is_empty() {
    let server = mockito::Server::new_async().await;
    let (app, _state) = common::create_test_app(&server.url()).await;

    let response = app
        .oneshot(common::get_request("/api/status"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["isConnected"], false);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_status_connected_even_when_token_is_expired() {
    let server = mockito::Server::new_async().await;
    let (app, state) = common::create_test_app(&server.url()).await;

    // Expired an hour ago; status only checks existence
    let record = TokenRecord::for_default_user("tok_expired".to_string(), -3600);
    state.db.upsert_token(&record).await.unwrap();

    let response = app
        .oneshot(common::get_request("/api/status"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["isConnected"], true);
}

#[tokio::test]
async fn test_status_distinguishes_store_failure_from_absence() {
    let server = mockito::Server::new_async().await;
    let (app, _state) = common::create_test_app_disconnected(&server.url());

    let response = app
        .oneshot(common::get_request("/api/status"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["isConnected"], false);
    assert_eq!(body["error"], "store_unavailable");
}

#[tokio::test]
async fn test_health_reports_reachable_store() {
    let server = mockito::Server::new_async().await;
    let (app, _state) = common::create_test_app(&server.url()).await;

    let response = app.oneshot(common::get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "reachable");
}

#[tokio::test]
async fn test_health_degraded_when_store_unreachable() {
    let server = mockito::Server::new_async().await;
    let (app, _state) = common::create_test_app_disconnected(&server.url());

    let response = app.oneshot(common::get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unreachable");
}
