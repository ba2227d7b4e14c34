// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{Duration, Utc};
use linkboard::db::Database;
use linkboard::error::AppError;
use linkboard::models::{TokenRecord, DEFAULT_USER_ID};

#[tokio::test]
async fn test_get_token_missing_returns_none() {
    let db = Database::connect_in_memory().await.unwrap();
    let token = db.get_token(DEFAULT_USER_ID).await.unwrap();
    assert!(token.is_none());
}

#[tokio::test]
async fn test_upsert_then_get_roundtrip() {
    let db = Database::connect_in_memory().await.unwrap();

    let record = TokenRecord::for_default_user("tok_one".to_string(), 3600);
    db.upsert_token(&record).await.unwrap();

    let stored = db.get_token(DEFAULT_USER_ID).await.unwrap().unwrap();
    assert_eq!(stored.user_id, DEFAULT_USER_ID);
    assert_eq!(stored.access_token, "tok_one");
    // RFC 3339 round-trip keeps expiry ordering intact
    assert!(stored.expires_at > Utc::now() + Duration::seconds(3000));
}

#[tokio::test]
async fn test_upsert_replaces_existing_row() {
    let db = Database::connect_in_memory().await.unwrap();

    let first = TokenRecord::for_default_user("tok_first".to_string(), 3600);
    db.upsert_token(&first).await.unwrap();

    let second = TokenRecord::for_default_user("tok_second".to_string(), 7200);
    db.upsert_token(&second).await.unwrap();

    // The primary key guarantees a single row; its value is the latest write
    let stored = db.get_token(DEFAULT_USER_ID).await.unwrap().unwrap();
    assert_eq!(stored.access_token, "tok_second");
    assert_eq!(
        stored.expires_at.timestamp_millis(),
        second.expires_at.timestamp_millis()
    );
    assert_eq!(
        stored.updated_at.timestamp_millis(),
        second.updated_at.timestamp_millis()
    );
}

#[tokio::test]
async fn test_upsert_keeps_users_separate() {
    let db = Database::connect_in_memory().await.unwrap();

    let mut other = TokenRecord::for_default_user("tok_other".to_string(), 3600);
    other.user_id = "someone_else".to_string();
    db.upsert_token(&other).await.unwrap();

    assert!(db.get_token(DEFAULT_USER_ID).await.unwrap().is_none());
    assert!(db.get_token("someone_else").await.unwrap().is_some());
}

#[tokio::test]
async fn test_ping_reachable() {
    let db = Database::connect_in_memory().await.unwrap();
    db.ping().await.unwrap();
}

#[tokio::test]
async fn test_disconnected_store_fails_with_store_error() {
    let db = Database::disconnected();

    let err = db.ping().await.unwrap_err();
    assert!(matches!(err, AppError::Store(_)));

    let err = db.get_token(DEFAULT_USER_ID).await.unwrap_err();
    assert!(matches!(err, AppError::Store(_)));
}
