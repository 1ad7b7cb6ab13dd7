// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! Request handlers for the search API and the demo page.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

use super::errors::ApiError;
use super::AppState;
use crate::error::SearchError;
use crate::types::SearchResponse;

const DEMO_HTML: &str = include_str!("demo.html");

/// Pull a usable query out of a request body.
///
/// The body must be a JSON object whose `query` is a string with something
/// other than whitespace in it. Anything else is the same client error.
pub fn extract_query(body: &Value) -> Result<&str, SearchError> {
    match body.get("query").and_then(Value::as_str) {
        Some(query) if !query.trim().is_empty() => Ok(query),
        _ => Err(SearchError::InvalidQuery),
    }
}

/// `POST /api/search`
pub async fn handle_search(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!("rejected search body: {}", rejection.body_text());
        ApiError::from(SearchError::InvalidQuery)
    })?;

    let query = extract_query(&body)?;
    let result = state.search.search(query)?;

    tracing::debug!(
        query,
        hits = result.results().len(),
        "search completed"
    );

    Ok(Json(SearchResponse::from(result)))
}

/// Any other method on `/api/search`.
pub async fn handle_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// `GET /`
pub async fn handle_demo() -> Html<&'static str> {
    Html(DEMO_HTML)
}

/// `GET /health`
pub async fn handle_health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "records": state.search.len(),
    }))
}
