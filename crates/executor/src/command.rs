//! Command enum defining all docgraph operations.
//!
//! Commands are the instruction set of the engine. Every operation that can
//! be performed on the database is a variant of this enum. Commands are
//! self-contained and serializable, so SDKs can send them as JSON.

use docgraph_core::{CollectionKind, WriteOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Commands | Output |
/// |----------|----------|--------|
/// | Collection | `CreateCollection`, `ListCollections`, `Count` | `Collection`, `Collections`, `Count` |
/// | Create | `CreateSingle`, `CreateMultiple` | `Document`, `DocumentBatch` |
/// | Read | `ReadSingle`, `ReadMultiple` | `Document`, `DocumentBatch` |
/// | Update | `UpdateSingle`, `UpdateMultiple` | `Write`, `WriteBatch` |
/// | Replace | `ReplaceSingle`, `ReplaceMultiple` | `Write`, `WriteBatch` |
///
/// `...Single` commands fail with an [`Error`](crate::Error). `...Multiple`
/// commands fail whole only for request-level problems; item failures are
/// reported in their batch slot.
///
/// # Example
///
/// ```
/// use docgraph_executor::Command;
/// use serde_json::json;
///
/// let cmd: Command = serde_json::from_value(json!({
///     "UpdateSingle": {
///         "collection": "people",
///         "patch": {"_key": "alice", "age": 31},
///         "options": {"returnNew": true}
///     }
/// }))
/// .unwrap();
/// assert_eq!(cmd.name(), "UpdateSingle");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Collections ====================
    /// Register a collection.
    /// Returns: `Output::Collection`
    CreateCollection { name: String, kind: CollectionKind },

    /// List all collections.
    /// Returns: `Output::Collections`
    ListCollections,

    /// Count the documents in a collection.
    /// Returns: `Output::Count`
    Count { collection: String },

    // ==================== Create ====================
    /// Create one document.
    /// Returns: `Output::Document`
    CreateSingle { collection: String, body: Value },

    /// Create several documents.
    /// Returns: `Output::DocumentBatch`
    CreateMultiple {
        collection: String,
        bodies: Vec<Value>,
    },

    // ==================== Read ====================
    /// Read one document by key.
    /// Returns: `Output::Document`
    ReadSingle { collection: String, key: String },

    /// Read several documents by key.
    /// Returns: `Output::DocumentBatch`
    ReadMultiple {
        collection: String,
        keys: Vec<String>,
    },

    // ==================== Update ====================
    /// Partially update one document.
    /// Returns: `Output::Write`
    UpdateSingle {
        collection: String,
        patch: Value,
        #[serde(default)]
        options: WriteOptions,
    },

    /// Partially update several documents.
    /// Returns: `Output::WriteBatch`
    UpdateMultiple {
        collection: String,
        patches: Vec<Value>,
        #[serde(default)]
        options: WriteOptions,
    },

    // ==================== Replace ====================
    /// Replace one document's body.
    /// Returns: `Output::Write`
    ReplaceSingle {
        collection: String,
        document: Value,
        #[serde(default)]
        options: WriteOptions,
    },

    /// Replace several documents' bodies.
    /// Returns: `Output::WriteBatch`
    ReplaceMultiple {
        collection: String,
        documents: Vec<Value>,
        #[serde(default)]
        options: WriteOptions,
    },
}

impl Command {
    /// Variant name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateCollection { .. } => "CreateCollection",
            Command::ListCollections => "ListCollections",
            Command::Count { .. } => "Count",
            Command::CreateSingle { .. } => "CreateSingle",
            Command::CreateMultiple { .. } => "CreateMultiple",
            Command::ReadSingle { .. } => "ReadSingle",
            Command::ReadMultiple { .. } => "ReadMultiple",
            Command::UpdateSingle { .. } => "UpdateSingle",
            Command::UpdateMultiple { .. } => "UpdateMultiple",
            Command::ReplaceSingle { .. } => "ReplaceSingle",
            Command::ReplaceMultiple { .. } => "ReplaceMultiple",
        }
    }
}
