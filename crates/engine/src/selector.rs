//! Reading request items
//!
//! Every write input is a JSON object. These helpers pull the target key and
//! the expected revision out of it.

use docgraph_core::document::{json_type_name, ID, KEY, REV};
use docgraph_core::{CollectionName, DocumentId, DocumentKey, Error, Result, Revision};
use serde_json::{Map, Value};

/// Unwrap a request item that must be a JSON object
pub(crate) fn expect_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::DocumentTypeInvalid {
            reason: format!("expected object, got {}", json_type_name(&other)),
        }),
    }
}

/// Parse a `_key` value
pub(crate) fn key_from_value(value: &Value) -> Result<DocumentKey> {
    match value {
        Value::String(s) => DocumentKey::new(s.as_str()),
        other => Err(Error::DocumentKeyBad {
            reason: format!("_key must be a string, got {}", json_type_name(other)),
        }),
    }
}

/// Key of the document an update or replace targets
///
/// `_key` wins; otherwise `_id` is used and must name `collection`.
pub(crate) fn select_key(collection: &CollectionName, object: &Map<String, Value>) -> Result<DocumentKey> {
    if let Some(value) = object.get(KEY) {
        return key_from_value(value);
    }
    match object.get(ID) {
        Some(Value::String(handle)) => {
            let id = DocumentId::parse(handle)?;
            if id.collection() != collection {
                return Err(Error::DocumentHandleBad {
                    reason: format!("'{}' does not belong to collection '{}'", handle, collection),
                });
            }
            Ok(id.key().clone())
        }
        Some(other) => Err(Error::DocumentHandleBad {
            reason: format!("_id must be a string, got {}", json_type_name(other)),
        }),
        None => Err(Error::DocumentHandleBad {
            reason: "neither _key nor _id given".to_string(),
        }),
    }
}

/// Revision the caller expects to overwrite, if any
///
/// A missing or null `_rev` means no expectation.
pub(crate) fn expected_revision(object: &Map<String, Value>) -> Result<Option<Revision>> {
    match object.get(REV) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(Revision::new(s.as_str()))),
        Some(other) => Err(Error::bad_parameter(format!(
            "_rev must be a string, got {}",
            json_type_name(other)
        ))),
    }
}
