// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store.
//!
//! Used by the test suite and by `STORE=memory` local runs. Collections keep
//! insertion order, and each operation holds one shard lock for its whole
//! duration, which gives the same per-operation atomicity as the real store.

use crate::db::DocumentStore;
use crate::error::Result;
use crate::ids::DocumentId;
use crate::models::{DeleteAck, Document, InsertAck, UpdateAck, UpdatedResponse, ID_FIELD};
use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use std::cmp::Ordering;

/// Document store backed by a concurrent map of collections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn has_id(document: &Document, id: &DocumentId) -> bool {
    matches!(document.get(ID_FIELD), Some(Value::String(s)) if s == id.as_str())
}

fn field_equals(document: &Document, field: &str, value: &str) -> bool {
    matches!(document.get(field), Some(Value::String(s)) if s == value)
}

/// Rank of a value's type in the store's cross-type sort order.
fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Number(_)) => 1,
        Some(Value::String(_)) => 2,
        Some(Value::Object(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Bool(_)) => 5,
    }
}

/// Ascending comparison; missing and null sort first.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> Result<InsertAck> {
        let id = ObjectId::new().to_hex();
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.value().clone())
            .unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| has_id(d, id)).cloned()))
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: Document,
    ) -> Result<Option<UpdatedResponse>> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(None);
        };
        let Some(document) = docs.iter_mut().find(|d| has_id(d, id)) else {
            return Ok(None);
        };

        let mut modified = false;
        for (key, value) in fields {
            if key == ID_FIELD {
                continue;
            }
            if document.get(&key) != Some(&value) {
                document.insert(key, value);
                modified = true;
            }
        }

        Ok(Some(UpdatedResponse {
            ack: UpdateAck::new(1, u64::from(modified)),
            document: document.clone(),
        }))
    }

    async fn delete_by_id(&self, collection: &str, id: &DocumentId) -> Result<DeleteAck> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(DeleteAck::new(0));
        };

        match docs.iter().position(|d| has_id(d, id)) {
            Some(index) => {
                docs.remove(index);
                Ok(DeleteAck::new(1))
            }
            None => Ok(DeleteAck::new(0)),
        }
    }

    async fn find_where(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        sort_by: Option<&str>,
    ) -> Result<Vec<Document>> {
        let mut matches: Vec<Document> = self
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| field_equals(d, field, value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(key) = sort_by {
            // Stable, so ties keep insertion order.
            matches.sort_by(|a, b| compare_values(a.get(key), b.get(key)));
        }

        Ok(matches)
    }

    async fn delete_where(&self, collection: &str, field: &str, value: &str) -> Result<DeleteAck> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(DeleteAck::new(0));
        };

        let before = docs.len();
        docs.retain(|d| !field_equals(d, field, value));

        Ok(DeleteAck::new((before - docs.len()) as u64))
    }
}
