// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod ack;
pub mod resource;

pub use ack::{CreatedResponse, DeleteAck, InsertAck, UpdateAck, UpdatedResponse};
pub use resource::{ParentQuery, ResourceKind, COMMENT, LISTING, REVIEW};

/// A loosely-typed stored document: field name to JSON value.
///
/// No schema is enforced beyond the store-assigned `_id`.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Field holding a document's store-assigned identity.
pub const ID_FIELD: &str = "_id";
