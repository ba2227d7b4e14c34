// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! LinkedIn OAuth authorization routes.
//!
//! Both handlers answer with redirects only. Failures during the callback
//! land the user on the configured frontend with `?linkedin=error`; raw
//! provider diagnostics stay in the logs.

use axum::{
    extract::{Query, State},
    response::Redirect,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/linkedin", get(auth_start))
        .route("/auth/linkedin/callback", get(auth_callback))
}

fn callback_url(state: &AppState) -> String {
    // api_base_url is validated at startup; LinkedIn checks this value for
    // exact equality between the authorize and exchange steps.
    format!("{}/auth/linkedin/callback", state.config.api_base_url)
}

/// Start the OAuth flow - redirect to LinkedIn authorization.
async fn auth_start(State(state): State<Arc<AppState>>) -> Redirect {
    let auth_url = state
        .linkedin
        .authorize_url(&callback_url(&state), &state.config.linkedin_scope);

    tracing::info!(
        client_id = %state.config.linkedin_client_id,
        "Starting LinkedIn OAuth flow"
    );

    Redirect::temporary(&auth_url)
}

/// Query parameters LinkedIn sends to the callback.
#[derive(Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// OAuth callback - exchange the code for a token and store it.
async fn auth_callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CallbackParams>,
) -> Redirect {
    let frontend_url = &state.config.frontend_url;

    // The provider reports denied consent as an error parameter
    if let Some(error) = params.error {
        tracing::warn!(error = %error, "LinkedIn authorization denied");
        return Redirect::temporary(&format!("{}?linkedin=error", frontend_url));
    }

    let code = match params.code.as_deref().filter(|c| !c.is_empty()) {
        Some(code) => code.to_string(),
        None => {
            tracing::warn!("LinkedIn callback without authorization code");
            return Redirect::temporary(&format!("{}?linkedin=error", frontend_url));
        }
    };

    match state
        .linkedin
        .complete_authorization(&code, &callback_url(&state))
        .await
    {
        Ok(()) => {
            tracing::info!("LinkedIn account connected");
            Redirect::temporary(&format!("{}?linkedin=success", frontend_url))
        }
        Err(e) => {
            tracing::error!(error = %e, "LinkedIn code exchange failed");
            Redirect::temporary(&format!("{}?linkedin=error", frontend_url))
        }
    }
}
