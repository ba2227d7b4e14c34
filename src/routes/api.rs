// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for the dashboard frontend.

use crate::error::Result;
use crate::models::NormalizedPost;
use crate::AppState;
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/status", get(get_status))
        .route("/api/posts", get(get_posts))
}

// ─── Connection Status ───────────────────────────────────────

/// Connection status response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub is_connected: bool,
    /// Set when the store could not be consulted, so callers can tell
    /// "never connected" from "cannot determine".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Report whether a LinkedIn token is on file. Expiry is not checked.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    match state.linkedin.connection_status().await {
        Ok(is_connected) => Json(StatusResponse {
            is_connected,
            error: None,
        }),
        Err(e) => {
            tracing::error!(error = %e, "Connection status lookup failed");
            Json(StatusResponse {
                is_connected: false,
                error: Some("store_unavailable".to_string()),
            })
        }
    }
}

// ─── Posts ───────────────────────────────────────────────────

/// Fetch the connected member's recent posts, normalized.
async fn get_posts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<NormalizedPost>>> {
    let posts = state.linkedin.fetch_posts().await?;
    Ok(Json(posts))
}
