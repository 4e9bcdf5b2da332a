//! Collection registry
//!
//! Maps collection names to their kind. Operations resolve the target
//! collection here before touching the store, so an unknown collection
//! fails the whole request.

use docgraph_core::{CollectionInfo, CollectionKind, CollectionName, Error, Result};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Registered collections
#[derive(Debug, Default)]
pub struct CollectionRegistry {
    collections: RwLock<FxHashMap<CollectionName, CollectionKind>>,
}

impl CollectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection
    ///
    /// Fails with `DuplicateName` if the name is taken, whatever its kind.
    pub fn register(&self, name: CollectionName, kind: CollectionKind) -> Result<CollectionInfo> {
        let mut collections = self.collections.write();
        if collections.contains_key(&name) {
            return Err(Error::DuplicateName {
                name: name.to_string(),
            });
        }
        collections.insert(name.clone(), kind);
        Ok(CollectionInfo { name, kind })
    }

    /// Kind of a registered collection
    pub fn kind(&self, name: &CollectionName) -> Option<CollectionKind> {
        self.collections.read().get(name).copied()
    }

    /// Look up a collection by its raw name
    ///
    /// Malformed names cannot be registered, so they resolve to
    /// `CollectionNotFound` like any other unknown name.
    pub fn resolve(&self, name: &str) -> Result<CollectionInfo> {
        let not_found = || Error::collection_not_found(name);
        let parsed = CollectionName::new(name).map_err(|_| not_found())?;
        let kind = self.kind(&parsed).ok_or_else(not_found)?;
        Ok(CollectionInfo { name: parsed, kind })
    }

    /// All collections, sorted by name
    pub fn list(&self) -> Vec<CollectionInfo> {
        let mut all: Vec<CollectionInfo> = self
            .collections
            .read()
            .iter()
            .map(|(name, kind)| CollectionInfo {
                name: name.clone(),
                kind: *kind,
            })
            .collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Number of collections
    pub fn len(&self) -> usize {
        self.collections.read().len()
    }

    /// True if no collection is registered
    pub fn is_empty(&self) -> bool {
        self.collections.read().is_empty()
    }
}
