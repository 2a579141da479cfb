// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document identifier validation.
//!
//! Every document is addressed by a store-assigned ObjectId rendered as 24
//! hexadecimal characters. Path parameters are checked against that format
//! before any identity-keyed store call is made.

use crate::error::AppError;
use std::fmt;

/// Length of a hex-encoded ObjectId.
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// Returns true iff `id` is exactly 24 hexadecimal characters (either case).
pub fn is_valid_object_id(id: &str) -> bool {
    id.len() == OBJECT_ID_HEX_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// A validated document identifier, normalized to lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// Validate a caller-supplied identifier.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if !is_valid_object_id(raw) {
            return Err(AppError::InvalidId);
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_24_hex_chars_any_case() {
        assert!(is_valid_object_id("65f1a2b3c4d5e6f708192a3b"));
        assert!(is_valid_object_id("65F1A2B3C4D5E6F708192A3B"));
        assert!(is_valid_object_id("65f1A2b3C4d5E6f708192A3b"));
        assert!(is_valid_object_id("000000000000000000000000"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_object_id(""));
        assert!(!is_valid_object_id("65f1a2b3c4d5e6f708192a3"));
        assert!(!is_valid_object_id("65f1a2b3c4d5e6f708192a3b0"));
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(!is_valid_object_id("not-a-valid-id"));
        assert!(!is_valid_object_id("65f1a2b3c4d5e6f708192a3g"));
        assert!(!is_valid_object_id("65f1a2b3c4d5e6f708192a3 "));
        // Multi-byte characters must not sneak past a byte-length check.
        assert!(!is_valid_object_id("65f1a2b3c4d5e6f708192aé"));
    }

    #[test]
    fn test_document_id_normalizes_case() {
        let id = DocumentId::parse("65F1A2B3C4D5E6F708192A3B").unwrap();
        assert_eq!(id.as_str(), "65f1a2b3c4d5e6f708192a3b");
        assert_eq!(id.to_string(), "65f1a2b3c4d5e6f708192a3b");
    }

    #[test]
    fn test_document_id_rejects_malformed() {
        assert!(matches!(
            DocumentId::parse("not-a-valid-id"),
            Err(AppError::InvalidId)
        ));
    }
}
