//! Document size limits
//!
//! | Limit | Default |
//! |-------|---------|
//! | Max serialized body size | 16 MB |
//! | Max nesting depth | 100 levels |
//!
//! Limits are checked on every write before the document is persisted.
//! Violations return [`Error::DocumentTooLarge`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Maximum document size in bytes (16 MB)
pub const MAX_DOCUMENT_SIZE: usize = 16 * 1024 * 1024;

/// Maximum nesting depth in a document (100 levels)
///
/// Prevents stack overflow during recursive merge and serialization.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Limits enforced on document bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLimits {
    /// Maximum serialized body size in bytes
    pub max_document_size: usize,
    /// Maximum nesting depth of objects and arrays
    pub max_nesting_depth: usize,
}

impl Default for DocumentLimits {
    fn default() -> Self {
        DocumentLimits {
            max_document_size: MAX_DOCUMENT_SIZE,
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl DocumentLimits {
    /// Check a document body against these limits
    pub fn validate(&self, body: &Map<String, Value>) -> Result<()> {
        let depth = object_depth(body);
        if depth > self.max_nesting_depth {
            return Err(Error::DocumentTooLarge {
                reason: format!(
                    "nesting depth {} exceeds maximum {}",
                    depth, self.max_nesting_depth
                ),
            });
        }
        let size = serde_json::to_vec(body)?.len();
        if size > self.max_document_size {
            return Err(Error::DocumentTooLarge {
                reason: format!(
                    "document size {} bytes exceeds maximum {} bytes",
                    size, self.max_document_size
                ),
            });
        }
        Ok(())
    }
}

fn object_depth(map: &Map<String, Value>) -> usize {
    1 + map.values().map(value_depth).max().unwrap_or(0)
}

fn value_depth(value: &Value) -> usize {
    match value {
        Value::Object(map) => object_depth(map),
        Value::Array(items) => 1 + items.iter().map(value_depth).max().unwrap_or(0),
        _ => 0,
    }
}
