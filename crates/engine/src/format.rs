//! Write results
//!
//! Every successful update or replace reports the document's identity, its
//! new revision and the revision it replaced. Full snapshots are attached
//! only on request.

use docgraph_core::{Document, DocumentId, DocumentKey, Revision, WritePolicy};
use serde::{Deserialize, Serialize};

/// Outcome of a successful update or replace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteResult {
    /// `_id`
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// `_key`
    #[serde(rename = "_key")]
    pub key: DocumentKey,
    /// Revision after the write
    #[serde(rename = "_rev")]
    pub rev: Revision,
    /// Revision before the write
    #[serde(rename = "_oldRev")]
    pub old_rev: Revision,
    /// Prior document, when `returnOld` was set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<Document>,
    /// New document, when `returnNew` was set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<Document>,
}

impl WriteResult {
    /// Describe the transition from `old` to `new`
    pub fn modified(old: Document, new: Document, policy: &WritePolicy) -> Self {
        WriteResult {
            id: new.id().clone(),
            key: new.key().clone(),
            rev: new.rev().clone(),
            old_rev: old.rev().clone(),
            old: policy.return_old.then_some(old),
            new: policy.return_new.then_some(new),
        }
    }
}
