// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQLite-backed token store.
//!
//! The core only needs two primitives from the store: an atomic
//! upsert-by-key and a point lookup-by-key, both on the `linkedin_tokens`
//! table. Connections come from a bounded pool; acquisition blocks up to the
//! configured timeout when the pool is exhausted.

use crate::error::AppError;
use crate::models::TokenRecord;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// SQLite database client.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the store with a bounded connection pool and create the schema.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout_secs: u64,
    ) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::Store(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|e| AppError::Store(format!("Failed to open database: {}", e)))?;

        let db = Self { pool };
        db.migrate().await?;

        tracing::info!(max_connections, "Connected to token store");
        Ok(db)
    }

    /// In-memory store for tests. A single connection keeps every operation
    /// on the same ephemeral database.
    pub async fn connect_in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::Store(e.to_string()))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// A store handle whose every operation fails (tests of degraded paths).
    ///
    /// The pool is created lazily against a path that cannot be opened, so
    /// construction succeeds but the first acquisition errors.
    pub fn disconnected() -> Self {
        let options = SqliteConnectOptions::new().filename("/nonexistent/linkboard/tokens.db");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(1))
            .connect_lazy_with(options);
        Self { pool }
    }

    /// Create the token table if it does not exist.
    async fn migrate(&self) -> Result<(), AppError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS linkedin_tokens (
                user_id TEXT PRIMARY KEY,
                access_token TEXT NOT NULL,
                expires_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(())
    }

    /// Reachability probe, used by the startup gate and the health route.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;
        Ok(())
    }

    // ─── Token Operations ────────────────────────────────────────

    /// Insert or replace the token row for a user in one atomic statement.
    pub async fn upsert_token(&self, record: &TokenRecord) -> Result<(), AppError> {
        sqlx::query(
            r"
            INSERT INTO linkedin_tokens (user_id, access_token, expires_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(user_id) DO UPDATE SET
                access_token = excluded.access_token,
                expires_at = excluded.expires_at,
                updated_at = excluded.updated_at
            ",
        )
        .bind(&record.user_id)
        .bind(&record.access_token)
        .bind(record.expires_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(())
    }

    /// Point lookup of a user's token row.
    pub async fn get_token(&self, user_id: &str) -> Result<Option<TokenRecord>, AppError> {
        sqlx::query_as::<_, TokenRecord>(
            r"
            SELECT user_id, access_token, expires_at, updated_at
            FROM linkedin_tokens
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Store(e.to_string()))
    }
}
