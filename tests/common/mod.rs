#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::Response,
};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tinylink::{config::AppConfig, db, AppState};

/// Fresh in-memory database with the schema applied.
///
/// A single long-lived connection keeps the in-memory database alive for the
/// whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    db::migrate(&pool).await.unwrap();
    pool
}

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|_| None).unwrap()
}

pub async fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(test_pool().await, test_config()))
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
