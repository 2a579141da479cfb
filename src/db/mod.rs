// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer.
//!
//! Route handlers talk to the store only through [`DocumentStore`]; the
//! composition root decides which implementation backs it.

pub mod convert;
pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::config::{Config, StoreKind};
use crate::error::Result;
use crate::ids::DocumentId;
use crate::models::{DeleteAck, Document, InsertAck, UpdatedResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Collection names as constants.
pub mod collections {
    pub const LISTINGS: &str = "ifterSpot";
    pub const REVIEWS: &str = "reviews";
    pub const COMMENTS: &str = "comments";
}

/// A document store holding loosely-typed JSON documents in named collections.
///
/// Every method maps onto exactly one store operation, so consistency
/// follows the store's per-operation atomicity. Concurrent updates to the
/// same document are last-write-wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short name for logs.
    fn kind(&self) -> &'static str;

    /// Check the store is reachable.
    async fn ping(&self) -> Result<()>;

    /// Insert a new document. Any `_id` in `document` is ignored; the store
    /// assigns the identity.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<InsertAck>;

    /// Every document in the collection, in the store's natural order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>>;

    async fn find_by_id(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>>;

    /// Merge `fields` into an existing document.
    ///
    /// Returns the update acknowledgement together with the document as it
    /// reads afterwards, or `None` when no document has `id`. An empty
    /// `fields` is a plain lookup that modifies nothing.
    async fn update_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: Document,
    ) -> Result<Option<UpdatedResponse>>;

    async fn delete_by_id(&self, collection: &str, id: &DocumentId) -> Result<DeleteAck>;

    /// Documents whose `field` equals `value` exactly (case-sensitive),
    /// optionally sorted ascending by `sort_by`.
    async fn find_where(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        sort_by: Option<&str>,
    ) -> Result<Vec<Document>>;

    /// Delete every document whose `field` equals `value`.
    async fn delete_where(&self, collection: &str, field: &str, value: &str) -> Result<DeleteAck>;
}

/// Open the store selected by `config`.
pub async fn open_store(config: &Config) -> Result<Arc<dyn DocumentStore>> {
    match config.store {
        StoreKind::Mongo => {
            let store = MongoStore::connect(&config.mongodb_uri, &config.db_name).await?;
            Ok(Arc::new(store))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store; data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
