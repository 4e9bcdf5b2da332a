//! Error types for docgraph
//!
//! Every failure the engine can report is a variant of [`Error`]. Each
//! variant belongs to one [`ErrorKind`] and carries a stable numeric code
//! (see [`codes`]) so that outer layers can hand callers a
//! `{errorNum, errorMessage}` pair without inspecting messages.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for docgraph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error numbers exposed to callers.
///
/// These values are part of the external contract and must not change.
pub mod codes {
    /// Internal error (bug or invariant violation)
    pub const INTERNAL: u32 = 4;
    /// Bad parameter in a request
    pub const BAD_PARAMETER: u32 = 10;
    /// Revision mismatch under strict checking
    pub const CONFLICT: u32 = 1200;
    /// Target document does not exist
    pub const DOCUMENT_NOT_FOUND: u32 = 1202;
    /// Target collection does not exist
    pub const COLLECTION_NOT_FOUND: u32 = 1203;
    /// Malformed or missing document handle
    pub const DOCUMENT_HANDLE_BAD: u32 = 1205;
    /// Collection name already taken
    pub const DUPLICATE_NAME: u32 = 1207;
    /// Malformed collection name
    pub const ILLEGAL_NAME: u32 = 1208;
    /// A document with the same key already exists
    pub const UNIQUE_CONSTRAINT_VIOLATED: u32 = 1210;
    /// Document exceeds size or nesting limits
    pub const DOCUMENT_TOO_LARGE: u32 = 1216;
    /// Malformed document key
    pub const DOCUMENT_KEY_BAD: u32 = 1221;
    /// Body is not a JSON object
    pub const DOCUMENT_TYPE_INVALID: u32 = 1227;
    /// Missing or malformed `_from`/`_to`
    pub const INVALID_EDGE_ATTRIBUTE: u32 = 1233;
}

/// Coarse classification of errors
///
/// | Kind | Meaning |
/// |------|---------|
/// | `NotFound` | The addressed document or collection is absent |
/// | `Conflict` | Optimistic concurrency check failed |
/// | `Validation` | The request or document is malformed |
/// | `Internal` | Infrastructure failure or bug |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Target absent
    NotFound,
    /// Revision mismatch or lost write race
    Conflict,
    /// Malformed input
    Validation,
    /// Infrastructure failure
    Internal,
}

/// Error types for docgraph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // ==================== Not Found ====================
    /// Document not found
    #[error("document not found: {id}")]
    DocumentNotFound {
        /// Handle of the missing document
        id: String,
    },

    /// Collection not found
    #[error("collection not found: {name}")]
    CollectionNotFound {
        /// Name of the missing collection
        name: String,
    },

    // ==================== Conflict ====================
    /// Revision mismatch
    #[error("conflict on {id}: expected revision {expected}, found {actual}")]
    Conflict {
        /// Handle of the document
        id: String,
        /// Revision supplied by the caller
        expected: String,
        /// Revision currently stored
        actual: String,
    },

    /// Every compare-and-swap attempt lost to a concurrent writer
    #[error("conflict on {id}: lost {attempts} consecutive write races")]
    WriteContention {
        /// Handle of the document
        id: String,
        /// Number of attempts made
        attempts: u32,
    },

    /// Key already taken in the collection
    #[error("unique constraint violated: {id} already exists")]
    UniqueConstraintViolated {
        /// Handle of the existing document
        id: String,
    },

    /// Collection name already taken
    #[error("duplicate collection name: {name}")]
    DuplicateName {
        /// The duplicate name
        name: String,
    },

    // ==================== Validation ====================
    /// Malformed collection name
    #[error("illegal collection name: {name}")]
    IllegalName {
        /// The offending name
        name: String,
    },

    /// Malformed or missing document handle
    #[error("illegal document handle: {reason}")]
    DocumentHandleBad {
        /// What was wrong
        reason: String,
    },

    /// Malformed document key
    #[error("illegal document key: {reason}")]
    DocumentKeyBad {
        /// What was wrong
        reason: String,
    },

    /// Body is not a JSON object
    #[error("invalid document type: {reason}")]
    DocumentTypeInvalid {
        /// What was wrong
        reason: String,
    },

    /// Missing, malformed or altered `_from`/`_to`
    #[error("invalid edge attribute: {reason}")]
    InvalidEdgeAttribute {
        /// What was wrong
        reason: String,
    },

    /// Document exceeds a configured limit
    #[error("document too large: {reason}")]
    DocumentTooLarge {
        /// Which limit was exceeded
        reason: String,
    },

    /// Invalid request parameter
    #[error("bad parameter: {reason}")]
    BadParameter {
        /// What was wrong
        reason: String,
    },

    // ==================== System ====================
    /// Internal error (bug or infrastructure failure)
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the failure
        reason: String,
    },
}

impl Error {
    /// Document not found error for a handle
    pub fn document_not_found(id: impl ToString) -> Self {
        Error::DocumentNotFound { id: id.to_string() }
    }

    /// Collection not found error
    pub fn collection_not_found(name: impl Into<String>) -> Self {
        Error::CollectionNotFound { name: name.into() }
    }

    /// Bad parameter error
    pub fn bad_parameter(reason: impl Into<String>) -> Self {
        Error::BadParameter {
            reason: reason.into(),
        }
    }

    /// Invalid edge attribute error
    pub fn invalid_edge(reason: impl Into<String>) -> Self {
        Error::InvalidEdgeAttribute {
            reason: reason.into(),
        }
    }

    /// Internal error
    pub fn internal(reason: impl Into<String>) -> Self {
        Error::Internal {
            reason: reason.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DocumentNotFound { .. } | Error::CollectionNotFound { .. } => {
                ErrorKind::NotFound
            }
            Error::Conflict { .. }
            | Error::WriteContention { .. }
            | Error::UniqueConstraintViolated { .. }
            | Error::DuplicateName { .. } => ErrorKind::Conflict,
            Error::IllegalName { .. }
            | Error::DocumentHandleBad { .. }
            | Error::DocumentKeyBad { .. }
            | Error::DocumentTypeInvalid { .. }
            | Error::InvalidEdgeAttribute { .. }
            | Error::DocumentTooLarge { .. }
            | Error::BadParameter { .. } => ErrorKind::Validation,
            Error::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Stable error number for this error
    pub fn error_num(&self) -> u32 {
        match self {
            Error::DocumentNotFound { .. } => codes::DOCUMENT_NOT_FOUND,
            Error::CollectionNotFound { .. } => codes::COLLECTION_NOT_FOUND,
            Error::Conflict { .. } | Error::WriteContention { .. } => codes::CONFLICT,
            Error::UniqueConstraintViolated { .. } => codes::UNIQUE_CONSTRAINT_VIOLATED,
            Error::DuplicateName { .. } => codes::DUPLICATE_NAME,
            Error::IllegalName { .. } => codes::ILLEGAL_NAME,
            Error::DocumentHandleBad { .. } => codes::DOCUMENT_HANDLE_BAD,
            Error::DocumentKeyBad { .. } => codes::DOCUMENT_KEY_BAD,
            Error::DocumentTypeInvalid { .. } => codes::DOCUMENT_TYPE_INVALID,
            Error::InvalidEdgeAttribute { .. } => codes::INVALID_EDGE_ATTRIBUTE,
            Error::DocumentTooLarge { .. } => codes::DOCUMENT_TOO_LARGE,
            Error::BadParameter { .. } => codes::BAD_PARAMETER,
            Error::Internal { .. } => codes::INTERNAL,
        }
    }

    /// True for not-found errors
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// True for conflict errors
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Internal {
            reason: format!("serialization: {}", e),
        }
    }
}
