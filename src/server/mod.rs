// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! HTTP boundary around `RankedSearch`.
//!
//! | Route         | Method | Handler                     |
//! |---------------|--------|-----------------------------|
//! | `/`           | GET    | demo page                   |
//! | `/api/search` | POST   | ranked search, JSON in/out  |
//! | `/api/search` | other  | 405 `Method Not Allowed`    |
//! | `/health`     | GET    | record count                |
//!
//! The dataset is loaded before the router is built and shared read-only
//! through `AppState`. Handlers never write to it.

pub mod errors;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::search::RankedSearch;
use handlers::{handle_demo, handle_health, handle_method_not_allowed, handle_search};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub search: Arc<RankedSearch>,
}

impl AppState {
    pub fn new(search: RankedSearch) -> Self {
        AppState {
            search: Arc::new(search),
        }
    }
}

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_demo))
        .route(
            "/api/search",
            post(handle_search).fallback(handle_method_not_allowed),
        )
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for Ctrl+C: {}", e),
    }
}
