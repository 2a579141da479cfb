// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod registry;
pub mod resource;

use crate::models::{COMMENT, LISTING, REVIEW};
use crate::AppState;
use axum::Router;
use registry::{RouteRegistry, Verb};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Liveness check.
async fn root() -> &'static str {
    "Hello World!"
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let registry = RouteRegistry::new().on("/", Verb::Get, root);
    let registry = [LISTING, REVIEW, COMMENT]
        .into_iter()
        .fold(registry, resource::register);

    registry
        .finish()
        // The web client is served from a different origin.
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
