//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Numbered**: Each variant carries a stable `errorNum`
//!
//! Inside batch results a failed slot is an [`ErrorDescriptor`] instead.

use docgraph_core::error::codes;
use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants |
/// |----------|----------|
/// | Not Found | `DocumentNotFound`, `CollectionNotFound` |
/// | Conflict | `Conflict`, `UniqueConstraintViolated`, `DuplicateName` |
/// | Validation | `IllegalName`, `DocumentHandleBad`, `DocumentKeyBad`, `DocumentTypeInvalid`, `InvalidEdgeAttribute`, `DocumentTooLarge`, `InvalidInput` |
/// | System | `Serialization`, `Internal` |
///
/// # Example
///
/// ```
/// use docgraph_executor::{Command, Error, Executor};
/// use docgraph_engine::Database;
///
/// let executor = Executor::new(Database::in_memory());
/// match executor.execute(Command::Count { collection: "people".into() }) {
///     Err(Error::CollectionNotFound { collection }) => assert_eq!(collection, "people"),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Not Found ====================
    /// Document not found
    #[error("document not found: {id}")]
    DocumentNotFound { id: String },

    /// Collection not found
    #[error("collection not found: {collection}")]
    CollectionNotFound { collection: String },

    // ==================== Conflict ====================
    /// Revision precondition failed or the write kept losing races
    #[error("conflict on {id}: {reason}")]
    Conflict { id: String, reason: String },

    /// Document key already taken
    #[error("unique constraint violated: {id} already exists")]
    UniqueConstraintViolated { id: String },

    /// Collection name already taken
    #[error("duplicate collection name: {name}")]
    DuplicateName { name: String },

    // ==================== Validation ====================
    /// Malformed collection name
    #[error("illegal collection name: {name}")]
    IllegalName { name: String },

    /// Malformed or missing document handle
    #[error("illegal document handle: {reason}")]
    DocumentHandleBad { reason: String },

    /// Malformed document key
    #[error("illegal document key: {reason}")]
    DocumentKeyBad { reason: String },

    /// Body is not a JSON object
    #[error("invalid document type: {reason}")]
    DocumentTypeInvalid { reason: String },

    /// Missing, malformed or altered `_from`/`_to`
    #[error("invalid edge attribute: {reason}")]
    InvalidEdgeAttribute { reason: String },

    /// Document exceeds a configured limit
    #[error("document too large: {reason}")]
    DocumentTooLarge { reason: String },

    /// Invalid request parameter
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // ==================== System ====================
    /// Command could not be encoded or decoded
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Internal error
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl Error {
    /// Stable numeric error code
    pub fn error_num(&self) -> u32 {
        match self {
            Error::DocumentNotFound { .. } => codes::DOCUMENT_NOT_FOUND,
            Error::CollectionNotFound { .. } => codes::COLLECTION_NOT_FOUND,
            Error::Conflict { .. } => codes::CONFLICT,
            Error::UniqueConstraintViolated { .. } => codes::UNIQUE_CONSTRAINT_VIOLATED,
            Error::DuplicateName { .. } => codes::DUPLICATE_NAME,
            Error::IllegalName { .. } => codes::ILLEGAL_NAME,
            Error::DocumentHandleBad { .. } => codes::DOCUMENT_HANDLE_BAD,
            Error::DocumentKeyBad { .. } => codes::DOCUMENT_KEY_BAD,
            Error::DocumentTypeInvalid { .. } => codes::DOCUMENT_TYPE_INVALID,
            Error::InvalidEdgeAttribute { .. } => codes::INVALID_EDGE_ATTRIBUTE,
            Error::DocumentTooLarge { .. } => codes::DOCUMENT_TOO_LARGE,
            Error::InvalidInput { .. } | Error::Serialization { .. } => codes::BAD_PARAMETER,
            Error::Internal { .. } => codes::INTERNAL,
        }
    }

    /// The batch-slot form of this error
    pub fn descriptor(&self) -> ErrorDescriptor {
        ErrorDescriptor {
            error_num: self.error_num(),
            error_message: self.to_string(),
        }
    }
}

/// A failed slot in a batch result
///
/// Serialized as `{"errorNum": 1202, "errorMessage": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDescriptor {
    /// Stable numeric error code
    pub error_num: u32,
    /// Human-readable message
    pub error_message: String,
}

impl From<Error> for ErrorDescriptor {
    fn from(err: Error) -> Self {
        err.descriptor()
    }
}

/// One slot of a batch result: the item's value or its error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchItem<T> {
    /// The item succeeded
    Ok(T),
    /// The item failed
    Err(ErrorDescriptor),
}

impl<T> BatchItem<T> {
    /// True if the item succeeded
    pub fn is_ok(&self) -> bool {
        matches!(self, BatchItem::Ok(_))
    }

    /// True if the item failed
    pub fn is_err(&self) -> bool {
        matches!(self, BatchItem::Err(_))
    }

    /// The success value, if any
    pub fn ok(self) -> Option<T> {
        match self {
            BatchItem::Ok(value) => Some(value),
            BatchItem::Err(_) => None,
        }
    }

    /// The error descriptor, if any
    pub fn err(self) -> Option<ErrorDescriptor> {
        match self {
            BatchItem::Ok(_) => None,
            BatchItem::Err(descriptor) => Some(descriptor),
        }
    }
}
