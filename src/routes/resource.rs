// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generic CRUD routes, instantiated once per resource kind.
//!
//! Every handler validates its input, makes a single store call and returns
//! the store's result. Listing, review and comment share this code, so their
//! validation and error mapping cannot drift apart.

use crate::error::{AppError, Result};
use crate::ids::DocumentId;
use crate::models::{CreatedResponse, DeleteAck, Document, ResourceKind, UpdatedResponse, ID_FIELD};
use crate::routes::registry::{RouteRegistry, Verb};
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

type JsonBody = std::result::Result<Json<Document>, JsonRejection>;

/// Register every route of `kind` on `registry`.
///
/// All kinds get create/list/get/update/delete. Kinds with a submitter email
/// field also get `/{path}/user/{email}`, and kinds with a parent reference
/// get `/{path}/{segment}/{parent_field}`.
pub fn register(registry: RouteRegistry, kind: ResourceKind) -> RouteRegistry {
    let base = kind.base_path();
    let by_id = format!("{}/{{id}}", base);

    let mut registry = registry
        .on(&base, Verb::Post, move |State(state): State<Arc<AppState>>, body: JsonBody| {
            create(state, kind, body)
        })
        .on(&base, Verb::Get, move |State(state): State<Arc<AppState>>| {
            list_all(state, kind)
        })
        .on(&by_id, Verb::Get, move |State(state): State<Arc<AppState>>, Path(id): Path<String>| {
            get_by_id(state, kind, id)
        })
        .on(
            &by_id,
            Verb::Patch,
            move |State(state): State<Arc<AppState>>, Path(id): Path<String>, body: JsonBody| {
                update(state, kind, id, body)
            },
        )
        // PUT merges exactly like PATCH.
        .on(
            &by_id,
            Verb::Put,
            move |State(state): State<Arc<AppState>>, Path(id): Path<String>, body: JsonBody| {
                update(state, kind, id, body)
            },
        )
        .on(&by_id, Verb::Delete, move |State(state): State<Arc<AppState>>, Path(id): Path<String>| {
            delete_by_id(state, kind, id)
        });

    if let Some(field) = kind.email_field {
        let by_email = format!("{}/user/{{email}}", base);
        registry = registry
            .on(
                &by_email,
                Verb::Get,
                move |State(state): State<Arc<AppState>>, Path(email): Path<String>| {
                    list_where(state, kind, field, email, None)
                },
            )
            .on(
                &by_email,
                Verb::Delete,
                move |State(state): State<Arc<AppState>>, Path(email): Path<String>| {
                    delete_where(state, kind, field, email)
                },
            );
    }

    if let Some(parent) = kind.parent {
        let by_parent = format!("{}/{}/{{{}}}", base, parent.segment, parent.field);
        registry = registry.on(
            &by_parent,
            Verb::Get,
            move |State(state): State<Arc<AppState>>, Path(parent_id): Path<String>| {
                list_where(state, kind, parent.field, parent_id, Some(parent.sort_by))
            },
        );
    }

    registry
}

/// Create a document; the store assigns its identity.
async fn create(
    state: Arc<AppState>,
    kind: ResourceKind,
    body: JsonBody,
) -> Result<Json<CreatedResponse>> {
    let Json(mut document) = body?;
    document.remove(ID_FIELD);

    if let Some(field) = kind.created_at_field {
        if !document.contains_key(field) {
            document.insert(field.to_string(), Value::String(now_rfc3339()));
        }
    }

    let echo = kind.echo_created.then(|| document.clone());
    let ack = state.store.insert_one(kind.collection, document).await?;

    tracing::info!(
        collection = kind.collection,
        id = %ack.inserted_id,
        "Document created"
    );

    let document = echo.map(|mut doc| {
        doc.insert(ID_FIELD.to_string(), Value::String(ack.inserted_id.clone()));
        doc
    });

    Ok(Json(CreatedResponse { ack, document }))
}

async fn list_all(state: Arc<AppState>, kind: ResourceKind) -> Result<Json<Vec<Document>>> {
    let docs = state.store.find_all(kind.collection).await?;
    Ok(Json(docs))
}

async fn get_by_id(state: Arc<AppState>, kind: ResourceKind, id: String) -> Result<Json<Document>> {
    let id = DocumentId::parse(&id)?;
    state
        .store
        .find_by_id(kind.collection, &id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Merge the body's fields into the document and return it as updated.
async fn update(
    state: Arc<AppState>,
    kind: ResourceKind,
    id: String,
    body: JsonBody,
) -> Result<Json<UpdatedResponse>> {
    let id = DocumentId::parse(&id)?;
    let Json(mut fields) = body?;
    // The identity is immutable.
    fields.remove(ID_FIELD);

    let updated = state
        .store
        .update_by_id(kind.collection, &id, fields)
        .await?
        .ok_or(AppError::NotFound)?;

    tracing::debug!(
        collection = kind.collection,
        id = %id,
        modified = updated.ack.modified_count,
        "Document updated"
    );
    Ok(Json(updated))
}

async fn delete_by_id(state: Arc<AppState>, kind: ResourceKind, id: String) -> Result<Json<DeleteAck>> {
    let id = DocumentId::parse(&id)?;
    let ack = state.store.delete_by_id(kind.collection, &id).await?;
    if ack.deleted_count == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(collection = kind.collection, id = %id, "Document deleted");
    Ok(Json(ack))
}

/// Documents whose `field` equals `value`. No match is an empty array, not an error.
async fn list_where(
    state: Arc<AppState>,
    kind: ResourceKind,
    field: &'static str,
    value: String,
    sort_by: Option<&'static str>,
) -> Result<Json<Vec<Document>>> {
    let docs = state
        .store
        .find_where(kind.collection, field, &value, sort_by)
        .await?;
    Ok(Json(docs))
}

async fn delete_where(
    state: Arc<AppState>,
    kind: ResourceKind,
    field: &'static str,
    value: String,
) -> Result<Json<DeleteAck>> {
    let ack = state
        .store
        .delete_where(kind.collection, field, &value)
        .await?;

    tracing::info!(
        collection = kind.collection,
        field,
        deleted = ack.deleted_count,
        "Documents deleted by filter"
    );
    Ok(Json(ack))
}
