// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route registration with an introspectable table.
//!
//! axum does not expose the paths a `Router` was built from, so routes are
//! registered here first. The recorded table is served at `/_routes`.

use crate::AppState;
use axum::handler::Handler;
use axum::routing::{get, MethodFilter, MethodRouter};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Path of the diagnostic route listing.
pub const ROUTES_PATH: &str = "/_routes";

/// HTTP methods the API registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    fn filter(self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Put => MethodFilter::PUT,
            Verb::Patch => MethodFilter::PATCH,
            Verb::Delete => MethodFilter::DELETE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }
}

/// One registered path and the methods it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RouteInfo {
    pub path: String,
    pub methods: Vec<String>,
}

struct Entry {
    path: String,
    verbs: Vec<Verb>,
    router: MethodRouter<Arc<AppState>>,
}

/// Builder that records every `(path, method)` it wires into the router.
#[derive(Default)]
pub struct RouteRegistry {
    entries: Vec<Entry>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `verb` on `path`.
    pub fn on<H, T>(mut self, path: &str, verb: Verb, handler: H) -> Self
    where
        H: Handler<T, Arc<AppState>>,
        T: 'static,
    {
        match self.entries.iter_mut().find(|e| e.path == path) {
            Some(entry) => {
                let router = std::mem::replace(&mut entry.router, MethodRouter::new());
                entry.router = router.on(verb.filter(), handler);
                entry.verbs.push(verb);
            }
            None => self.entries.push(Entry {
                path: path.to_string(),
                verbs: vec![verb],
                router: axum::routing::on(verb.filter(), handler),
            }),
        }
        self
    }

    /// Registration table in registration order.
    pub fn table(&self) -> Vec<RouteInfo> {
        self.entries
            .iter()
            .map(|e| RouteInfo {
                path: e.path.clone(),
                methods: e.verbs.iter().map(|v| v.as_str().to_string()).collect(),
            })
            .collect()
    }

    /// Build the router, adding the `/_routes` listing over everything
    /// registered so far (itself included).
    pub fn finish(self) -> Router<Arc<AppState>> {
        let mut table = self.table();
        table.push(RouteInfo {
            path: ROUTES_PATH.to_string(),
            methods: vec![Verb::Get.as_str().to_string()],
        });
        let table = Arc::new(table);

        let router = self
            .entries
            .into_iter()
            .fold(Router::new(), |router, entry| {
                router.route(&entry.path, entry.router)
            });

        router.route(
            ROUTES_PATH,
            get(move || {
                let table = Arc::clone(&table);
                async move { Json(table.as_ref().clone()) }
            }),
        )
    }
}
