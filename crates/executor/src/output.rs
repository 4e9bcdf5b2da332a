//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. The mapping is listed
//! on [`Command`](crate::Command).

use docgraph_core::{CollectionInfo, Document};
use docgraph_engine::WriteResult;
use serde::{Deserialize, Serialize};

use crate::error::BatchItem;

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// A registered collection
    Collection(CollectionInfo),

    /// All registered collections, sorted by name
    Collections(Vec<CollectionInfo>),

    /// Document count
    Count(u64),

    /// A stored document (create and read)
    Document(Document),

    /// Per-item documents or errors, in request order
    DocumentBatch(Vec<BatchItem<Document>>),

    /// Outcome of an update or replace
    Write(WriteResult),

    /// Per-item write outcomes or errors, in request order
    WriteBatch(Vec<BatchItem<WriteResult>>),
}
