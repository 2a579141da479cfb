// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resource kinds exposed over HTTP.
//!
//! Each kind maps a URL prefix onto one collection. The route factory in
//! `routes::resource` reads these definitions to decide which operations a
//! kind gets beyond the common create/list/get/update/delete set.

use crate::db::collections;

/// Lookup of child documents by an informal parent reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentQuery {
    /// Path segment under the resource prefix, e.g. `spot` in `/comment/spot/:spotId`.
    pub segment: &'static str,
    /// Field holding the parent's identity.
    pub field: &'static str,
    /// Field the results are sorted by, ascending.
    pub sort_by: &'static str,
}

/// Static description of one resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// URL prefix without the leading slash.
    pub path: &'static str,
    pub collection: &'static str,
    /// Submitter email field; enables `/{path}/user/{email}` routes.
    pub email_field: Option<&'static str>,
    pub parent: Option<ParentQuery>,
    /// Field stamped with the creation time when the client omits it.
    pub created_at_field: Option<&'static str>,
    /// Whether create responses include the stored document.
    pub echo_created: bool,
}

impl ResourceKind {
    /// Path of the collection root, e.g. `/review`.
    pub fn base_path(&self) -> String {
        format!("/{}", self.path)
    }
}

/// Iftar spot listings.
pub const LISTING: ResourceKind = ResourceKind {
    path: "ifterspot",
    collection: collections::LISTINGS,
    email_field: None,
    parent: None,
    created_at_field: None,
    echo_created: false,
};

/// Reviews submitted by users.
pub const REVIEW: ResourceKind = ResourceKind {
    path: "review",
    collection: collections::REVIEWS,
    email_field: Some("email"),
    parent: None,
    created_at_field: None,
    echo_created: false,
};

/// Comments on a listing, ordered by creation time.
pub const COMMENT: ResourceKind = ResourceKind {
    path: "comment",
    collection: collections::COMMENTS,
    email_field: Some("email"),
    parent: Some(ParentQuery {
        segment: "spot",
        field: "spotId",
        sort_by: "createdAt",
    }),
    created_at_field: Some("createdAt"),
    echo_created: true,
};
