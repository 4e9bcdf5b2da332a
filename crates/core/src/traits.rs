//! Storage abstraction
//!
//! The engine never touches a concrete store. It is handed an
//! `Arc<dyn DocumentStore>`, which keeps the in-memory implementation
//! swappable (tests substitute their own).

use crate::document::Document;
use crate::error::Result;
use crate::types::{CollectionName, DocumentId, Revision};

/// Outcome of a compare-and-swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CasOutcome {
    /// The stored revision matched and the new document is now current
    Swapped,
    /// Another writer got there first
    RevisionMismatch {
        /// Revision found in the store
        current: Revision,
    },
    /// The document no longer exists
    Missing,
}

/// Document storage keyed by `_id`
///
/// Thread safety: all methods may be called concurrently from multiple
/// threads. `put_if_absent` and `compare_and_swap` must be atomic with
/// respect to the addressed document.
pub trait DocumentStore: Send + Sync {
    /// Latest version of a document
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn get(&self, id: &DocumentId) -> Result<Option<Document>>;

    /// Store `document` only if its `_id` is unused
    ///
    /// Returns `false` and leaves the store untouched if the id is taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn put_if_absent(&self, document: Document) -> Result<bool>;

    /// Replace the document with `document.id()` if its stored revision
    /// equals `expected`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn compare_and_swap(&self, expected: &Revision, document: Document) -> Result<CasOutcome>;

    /// Number of documents in a collection
    fn count(&self, collection: &CollectionName) -> usize;

    /// Issue a fresh revision token, never returned before
    fn next_revision(&self) -> Revision;

    /// True if the document exists
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn contains(&self, id: &DocumentId) -> Result<bool> {
        Ok(self.get(id)?.is_some())
    }
}
