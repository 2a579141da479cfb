// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversion between JSON request/response bodies and BSON documents.
//!
//! ObjectIds are rendered as bare 24-hex strings and dates as RFC3339, the
//! same shapes the web client gets from a Node driver's JSON encoding.

use crate::error::AppError;
use crate::models::Document;
use mongodb::bson::{self, Bson};
use serde_json::Value;

/// Convert a JSON object from a request body into a BSON document.
pub fn json_to_bson(document: &Document) -> Result<bson::Document, AppError> {
    bson::to_document(document)
        .map_err(|e| AppError::BadRequest(format!("Invalid document: {}", e)))
}

/// Convert a stored BSON document into a JSON object.
pub fn bson_to_json(document: bson::Document) -> Document {
    document
        .into_iter()
        .map(|(key, value)| (key, bson_value_to_json(value)))
        .collect()
}

/// Convert a single BSON value into JSON.
pub fn bson_value_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        Bson::Document(doc) => Value::Object(bson_to_json(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_value_to_json).collect()),
        Bson::Double(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Bson::Int32(i) => Value::from(i),
        Bson::Int64(i) => Value::from(i),
        Bson::String(s) => Value::String(s),
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Null | Bson::Undefined => Value::Null,
        other => other.into_relaxed_extjson(),
    }
}
