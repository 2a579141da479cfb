// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store acknowledgement shapes returned to the web client.
//!
//! Field names follow the driver's native result documents so that clients
//! written against the store's JSON keep working.

use super::Document;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Acknowledgement of a single insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct InsertAck {
    pub acknowledged: bool,
    /// Store-assigned identity (24 hex characters).
    pub inserted_id: String,
}

/// Acknowledgement of a delete by id or by filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteAck {
    pub acknowledged: bool,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub deleted_count: u64,
}

impl DeleteAck {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// Acknowledgement of a merge update on a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UpdateAck {
    pub acknowledged: bool,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub matched_count: u64,
    /// Zero when every submitted field already held the submitted value.
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub modified_count: u64,
}

impl UpdateAck {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
        }
    }
}

/// Response to an update: the update acknowledgement plus the document as
/// it reads after the merge.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedResponse {
    #[serde(flatten)]
    pub ack: UpdateAck,
    pub document: Document,
}

/// Response to a create: the insert acknowledgement, plus the stored
/// document for kinds that echo it back.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    #[serde(flatten)]
    pub ack: InsertAck,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_ack_uses_driver_field_names() {
        let ack = InsertAck {
            acknowledged: true,
            inserted_id: "65f1a2b3c4d5e6f708192a3b".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            json!({ "acknowledged": true, "insertedId": "65f1a2b3c4d5e6f708192a3b" })
        );
    }

    #[test]
    fn test_created_response_omits_missing_document() {
        let created = CreatedResponse {
            ack: InsertAck {
                acknowledged: true,
                inserted_id: "65f1a2b3c4d5e6f708192a3b".to_string(),
            },
            document: None,
        };
        let value = serde_json::to_value(&created).unwrap();
        assert_eq!(value["insertedId"], "65f1a2b3c4d5e6f708192a3b");
        assert!(value.get("document").is_none());
    }

    #[test]
    fn test_updated_response_flattens_ack() {
        let mut document = Document::new();
        document.insert("status".to_string(), json!("approved"));
        let updated = UpdatedResponse {
            ack: UpdateAck::new(1, 1),
            document,
        };
        assert_eq!(
            serde_json::to_value(&updated).unwrap(),
            json!({
                "acknowledged": true,
                "matchedCount": 1,
                "modifiedCount": 1,
                "document": { "status": "approved" },
            })
        );
    }

    #[test]
    fn test_delete_ack_shape() {
        assert_eq!(
            serde_json::to_value(DeleteAck::new(2)).unwrap(),
            json!({ "acknowledged": true, "deletedCount": 2 })
        );
    }
}
