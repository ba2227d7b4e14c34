// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::Request;
use linkboard::config::Config;
use linkboard::db::Database;
use linkboard::routes::create_router;
use linkboard::services::{LinkedInClient, LinkedInService};
use linkboard::AppState;
use std::sync::Arc;

/// Build app state over a given store, with both LinkedIn hosts pointed at
/// a mock provider URL.
#[allow(dead_code)]
pub fn build_state(db: Database, provider_url: &str) -> Arc<AppState> {
    let config = Config::default();
    let client = LinkedInClient::new(
        config.linkedin_client_id.clone(),
        config.linkedin_client_secret.clone(),
        config.linkedin_version.clone(),
    )
    .with_base_urls(provider_url, provider_url);
    let linkedin = LinkedInService::new(client, db.clone());

    Arc::new(AppState {
        config,
        db,
        linkedin,
    })
}

/// Create a test app over an in-memory store and a mock provider.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app(provider_url: &str) -> (axum::Router, Arc<AppState>) {
    let db = Database::connect_in_memory()
        .await
        .expect("Failed to open in-memory store");
    let state = build_state(db, provider_url);
    (create_router(state.clone()), state)
}

/// Create a test app whose store fails every operation.
#[allow(dead_code)]
pub fn create_test_app_disconnected(provider_url: &str) -> (axum::Router, Arc<AppState>) {
    let state = build_state(Database::disconnected(), provider_url);
    (create_router(state.clone()), state)
}

/// Build a GET request for the router.
#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}
