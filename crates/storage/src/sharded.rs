//! Sharded in-memory document store
//!
//! DashMap keyed by collection, FxHashMap within.
//!
//! # Design
//!
//! - DashMap: sharded by collection name, concurrent reads
//! - FxHashMap: O(1) lookups by `_key`, fast non-crypto hash
//! - Per-collection shards: writers to different collections never contend
//!
//! # Atomicity
//!
//! `put_if_absent` and `compare_and_swap` hold the write guard of the
//! collection's shard for the whole check-then-write, so no other writer
//! can interleave between the revision comparison and the store.

use dashmap::DashMap;
use docgraph_core::{
    CasOutcome, CollectionName, Document, DocumentId, DocumentKey, DocumentStore, Result, Revision,
};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::revision::RevisionClock;

/// Documents of one collection
#[derive(Debug, Default)]
struct Shard {
    data: FxHashMap<DocumentKey, Document>,
}

/// Sharded storage - DashMap by collection, HashMap within
///
/// # Example
///
/// ```
/// use docgraph_core::DocumentStore;
/// use docgraph_storage::ShardedStore;
///
/// let store = ShardedStore::new();
/// let rev = store.next_revision();
/// assert!(!rev.as_str().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ShardedStore {
    shards: DashMap<CollectionName, Shard>,
    clock: RevisionClock,
}

impl ShardedStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for ShardedStore {
    fn get(&self, id: &DocumentId) -> Result<Option<Document>> {
        Ok(self
            .shards
            .get(id.collection())
            .and_then(|shard| shard.data.get(id.key()).cloned()))
    }

    fn put_if_absent(&self, document: Document) -> Result<bool> {
        let mut shard = self
            .shards
            .entry(document.id().collection().clone())
            .or_default();
        if shard.data.contains_key(document.key()) {
            return Ok(false);
        }
        shard.data.insert(document.key().clone(), document);
        Ok(true)
    }

    fn compare_and_swap(&self, expected: &Revision, document: Document) -> Result<CasOutcome> {
        let Some(mut shard) = self.shards.get_mut(document.id().collection()) else {
            return Ok(CasOutcome::Missing);
        };
        let Some(slot) = shard.data.get_mut(document.key()) else {
            return Ok(CasOutcome::Missing);
        };
        if slot.rev() != expected {
            trace!(
                target: "docgraph::storage",
                id = %document.id(),
                expected = %expected,
                current = %slot.rev(),
                "compare-and-swap lost"
            );
            return Ok(CasOutcome::RevisionMismatch {
                current: slot.rev().clone(),
            });
        }
        *slot = document;
        Ok(CasOutcome::Swapped)
    }

    fn count(&self, collection: &CollectionName) -> usize {
        self.shards
            .get(collection)
            .map(|shard| shard.data.len())
            .unwrap_or(0)
    }

    fn next_revision(&self) -> Revision {
        self.clock.next()
    }

    fn contains(&self, id: &DocumentId) -> Result<bool> {
        Ok(self
            .shards
            .get(id.collection())
            .map(|shard| shard.data.contains_key(id.key()))
            .unwrap_or(false))
    }
}
