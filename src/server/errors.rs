// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! API error types mapped to HTTP status codes.
//!
//! Every variant renders as `{"message": "..."}`, the same key the demo page
//! reads for both errors and the no-match notice.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::SearchError;

/// Error type for `/api/search`.
///
/// - `BadRequest` → 400
/// - `MethodNotAllowed` → 405
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing, non-string or blank query, or a body that is not JSON.
    BadRequest(String),
    /// Anything but `POST`.
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidQuery => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = axum::Json(json!({ "message": self.message() }));
        (self.status(), body).into_response()
    }
}
