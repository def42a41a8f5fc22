//! Unauthenticated liveness probe.

use crate::api::AppState;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

pub(in crate::api) fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
