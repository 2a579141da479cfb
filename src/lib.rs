// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ifter-Spot API: CRUD backend for iftar spot listings, reviews and comments.
//!
//! This crate provides the HTTP routes and the document-store seam used by
//! the web client to share and discuss iftar spots.

pub mod config;
pub mod db;
pub mod error;
pub mod ids;
pub mod models;
pub mod routes;
pub mod time_utils;

use db::DocumentStore;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}
