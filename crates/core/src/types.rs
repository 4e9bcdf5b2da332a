//! Identifier types
//!
//! - `CollectionName`: validated collection name
//! - `CollectionKind`: vertex or edge
//! - `DocumentKey`: validated `_key`, unique within a collection
//! - `DocumentId`: `collection/key` handle (`_id`, `_from`, `_to`)
//! - `Revision`: opaque `_rev` token
//!
//! All string-backed identifiers validate on construction and on
//! deserialization, so a value of these types is always well formed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum collection name length in bytes
pub const MAX_COLLECTION_NAME_LENGTH: usize = 256;

/// Maximum document key length in bytes
pub const MAX_KEY_LENGTH: usize = 254;

/// Punctuation allowed in document keys besides ASCII alphanumerics
const KEY_PUNCTUATION: &str = "_-:.@()+,=;$!*'%";

// =============================================================================
// CollectionName
// =============================================================================

/// Validated collection name
///
/// 1-256 bytes; first character an ASCII letter or `_`, the rest ASCII
/// alphanumerics, `_` or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    /// Validate and wrap a collection name
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let mut chars = name.chars();
        let valid_first = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid_first || !valid_rest || name.len() > MAX_COLLECTION_NAME_LENGTH {
            return Err(Error::IllegalName { name });
        }
        Ok(CollectionName(name))
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CollectionName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        CollectionName::new(value)
    }
}

impl From<CollectionName> for String {
    fn from(name: CollectionName) -> Self {
        name.0
    }
}

// =============================================================================
// CollectionKind
// =============================================================================

/// Collection type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// Plain documents
    #[serde(alias = "document")]
    Vertex,
    /// Documents carrying `_from` and `_to`
    Edge,
}

impl CollectionKind {
    /// True for edge collections
    pub fn is_edge(&self) -> bool {
        matches!(self, CollectionKind::Edge)
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionKind::Vertex => f.write_str("vertex"),
            CollectionKind::Edge => f.write_str("edge"),
        }
    }
}

impl FromStr for CollectionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vertex" | "document" => Ok(CollectionKind::Vertex),
            "edge" => Ok(CollectionKind::Edge),
            other => Err(Error::bad_parameter(format!(
                "unknown collection kind '{}', expected \"vertex\" or \"edge\"",
                other
            ))),
        }
    }
}

/// A registered collection and its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Collection name
    pub name: CollectionName,
    /// Collection kind
    pub kind: CollectionKind,
}

// =============================================================================
// DocumentKey
// =============================================================================

/// Validated document key (`_key`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentKey(String);

impl DocumentKey {
    /// Validate and wrap a document key
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::DocumentKeyBad {
                reason: "key must not be empty".to_string(),
            });
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(Error::DocumentKeyBad {
                reason: format!("key exceeds {} bytes", MAX_KEY_LENGTH),
            });
        }
        if let Some(c) = key
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || KEY_PUNCTUATION.contains(*c)))
        {
            return Err(Error::DocumentKeyBad {
                reason: format!("character {:?} not allowed in key '{}'", c, key),
            });
        }
        Ok(DocumentKey(key))
    }

    /// The key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DocumentKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        DocumentKey::new(value)
    }
}

impl From<DocumentKey> for String {
    fn from(key: DocumentKey) -> Self {
        key.0
    }
}

// =============================================================================
// DocumentId
// =============================================================================

/// Document handle: `collection/key`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId {
    collection: CollectionName,
    key: DocumentKey,
}

impl DocumentId {
    /// Build a handle from its parts
    pub fn new(collection: CollectionName, key: DocumentKey) -> Self {
        DocumentId { collection, key }
    }

    /// Parse a `collection/key` handle
    pub fn parse(handle: &str) -> Result<Self> {
        let (collection, key) = handle.split_once('/').ok_or_else(|| Error::DocumentHandleBad {
            reason: format!("'{}' is not of the form collection/key", handle),
        })?;
        let collection = CollectionName::new(collection).map_err(|_| Error::DocumentHandleBad {
            reason: format!("'{}' has an illegal collection part", handle),
        })?;
        let key = DocumentKey::new(key).map_err(|_| Error::DocumentHandleBad {
            reason: format!("'{}' has an illegal key part", handle),
        })?;
        Ok(DocumentId { collection, key })
    }

    /// Collection part
    pub fn collection(&self) -> &CollectionName {
        &self.collection
    }

    /// Key part
    pub fn key(&self) -> &DocumentKey {
        &self.key
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.key)
    }
}

impl FromStr for DocumentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DocumentId::parse(s)
    }
}

impl TryFrom<String> for DocumentId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        DocumentId::parse(&value)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.to_string()
    }
}

// =============================================================================
// Revision
// =============================================================================

/// Opaque revision token (`_rev`)
///
/// Revisions are only ever compared for equality. The store issues a fresh
/// token on every successful mutation; a token is never reissued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    /// Wrap a token
    pub fn new(token: impl Into<String>) -> Self {
        Revision(token.into())
    }

    /// The token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Revision {
    fn from(s: &str) -> Self {
        Revision(s.to_string())
    }
}

impl From<String> for Revision {
    fn from(s: String) -> Self {
        Revision(s)
    }
}
