// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MongoDB-backed document store.
//!
//! One client is created at startup and shared by every request; connection
//! pooling is left to the driver.

use crate::db::convert::{bson_to_json, bson_value_to_json, json_to_bson};
use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::ids::DocumentId;
use crate::models::{DeleteAck, Document, InsertAck, UpdateAck, UpdatedResponse, ID_FIELD};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Bson};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database};

/// MongoDB client wrapper.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Create a client for `uri` and select `db_name`.
    ///
    /// The driver connects lazily; call [`DocumentStore::ping`] to verify
    /// the deployment is reachable.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::Database(format!("Failed to parse MongoDB URI: {}", e)))?;

        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options)
            .map_err(|e| AppError::Database(format!("Failed to create MongoDB client: {}", e)))?;
        let db = client.database(db_name);

        tracing::info!(database = db_name, "MongoDB client created");

        Ok(Self { client, db })
    }

    fn collection(&self, name: &str) -> Collection<bson::Document> {
        self.db.collection(name)
    }
}

fn object_id(id: &DocumentId) -> Result<ObjectId> {
    ObjectId::parse_str(id.as_str()).map_err(|_| AppError::InvalidId)
}

fn id_filter(id: &DocumentId) -> Result<bson::Document> {
    Ok(doc! { "_id": object_id(id)? })
}

fn field_filter(field: &str, value: &str) -> bson::Document {
    let mut filter = bson::Document::new();
    filter.insert(field, value);
    filter
}

/// Map a driver error to `AppError::Database`, logging the collection it hit.
fn store_error(collection: &str) -> impl Fn(mongodb::error::Error) -> AppError + '_ {
    move |e| {
        tracing::error!(collection, error = %e, "MongoDB operation failed");
        AppError::Database(e.to_string())
    }
}

fn inserted_id_hex(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => bson_value_to_json(other).to_string(),
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn kind(&self) -> &'static str {
        "mongo"
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "MongoDB ping failed");
                AppError::Database(e.to_string())
            })?;
        Ok(())
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> Result<InsertAck> {
        document.remove(ID_FIELD);
        let document = json_to_bson(&document)?;

        let result = self
            .collection(collection)
            .insert_one(document)
            .await
            .map_err(store_error(collection))?;

        Ok(InsertAck {
            acknowledged: true,
            inserted_id: inserted_id_hex(result.inserted_id),
        })
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>> {
        let docs: Vec<bson::Document> = self
            .collection(collection)
            .find(doc! {})
            .await
            .map_err(store_error(collection))?
            .try_collect()
            .await
            .map_err(store_error(collection))?;

        Ok(docs.into_iter().map(bson_to_json).collect())
    }

    async fn find_by_id(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>> {
        let doc = self
            .collection(collection)
            .find_one(id_filter(id)?)
            .await
            .map_err(store_error(collection))?;

        Ok(doc.map(bson_to_json))
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
        mut fields: Document,
    ) -> Result<Option<UpdatedResponse>> {
        fields.remove(ID_FIELD);
        // The server rejects an empty $set.
        if fields.is_empty() {
            let document = self.find_by_id(collection, id).await?;
            return Ok(document.map(|document| UpdatedResponse {
                ack: UpdateAck::new(1, 0),
                document,
            }));
        }

        let set = json_to_bson(&fields)?;
        let result = self
            .collection(collection)
            .update_one(id_filter(id)?, doc! { "$set": set })
            .await
            .map_err(store_error(collection))?;
        if result.matched_count == 0 {
            return Ok(None);
        }

        // A concurrent delete between the two calls reads as not found.
        let document = self.find_by_id(collection, id).await?;
        Ok(document.map(|document| UpdatedResponse {
            ack: UpdateAck::new(result.matched_count, result.modified_count),
            document,
        }))
    }

    async fn delete_by_id(&self, collection: &str, id: &DocumentId) -> Result<DeleteAck> {
        let result = self
            .collection(collection)
            .delete_one(id_filter(id)?)
            .await
            .map_err(store_error(collection))?;

        Ok(DeleteAck::new(result.deleted_count))
    }

    async fn find_where(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        sort_by: Option<&str>,
    ) -> Result<Vec<Document>> {
        let coll = self.collection(collection);
        let mut find = coll.find(field_filter(field, value));
        if let Some(key) = sort_by {
            let mut sort = bson::Document::new();
            sort.insert(key, 1_i32);
            find = find.sort(sort);
        }

        let docs: Vec<bson::Document> = find
            .await
            .map_err(store_error(collection))?
            .try_collect()
            .await
            .map_err(store_error(collection))?;

        Ok(docs.into_iter().map(bson_to_json).collect())
    }

    async fn delete_where(&self, collection: &str, field: &str, value: &str) -> Result<DeleteAck> {
        let result = self
            .collection(collection)
            .delete_many(field_filter(field, value))
            .await
            .map_err(store_error(collection))?;

        Ok(DeleteAck::new(result.deleted_count))
    }
}
