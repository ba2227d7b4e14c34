// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Linkboard: a personal LinkedIn post dashboard backend.
//!
//! This crate provides the backend API for connecting a single LinkedIn
//! account via OAuth and fetching its recent posts with engagement metrics.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::Database;
use services::LinkedInService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub linkedin: LinkedInService,
}
