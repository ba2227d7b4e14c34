// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Linkboard API Server
//!
//! Connects a single LinkedIn account via OAuth and serves that account's
//! recent posts with engagement metrics to a personal dashboard.

use linkboard::{
    config::Config,
    db::Database,
    services::{LinkedInClient, LinkedInService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment; missing OAuth or URL settings
    // abort startup rather than surfacing per-request
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Linkboard API");

    // Open the token store and verify reachability before accepting traffic
    let db = Database::connect(
        &config.database_url,
        config.database_max_connections,
        config.database_acquire_timeout_secs,
    )
    .await
    .expect("Failed to open token store");
    db.ping().await.expect("Token store is not reachable");

    let client = LinkedInClient::new(
        config.linkedin_client_id.clone(),
        config.linkedin_client_secret.clone(),
        config.linkedin_version.clone(),
    );
    let linkedin = LinkedInService::new(client, db.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        linkedin,
    });

    // Build router
    let app = linkboard::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("linkboard=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
