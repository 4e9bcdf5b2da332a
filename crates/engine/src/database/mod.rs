//! Database: the entry point for all document operations
//!
//! A `Database` owns the collection registry, the configuration and a handle
//! to the document store. Write operations live in [`crate::ops`] as further
//! `impl Database` blocks.
//!
//! # Example
//!
//! ```
//! use docgraph_core::{CollectionKind, WriteOptions};
//! use docgraph_engine::Database;
//! use serde_json::json;
//!
//! let db = Database::in_memory();
//! db.create_collection("people", CollectionKind::Vertex).unwrap();
//! db.create_single("people", json!({"_key": "alice", "age": 30})).unwrap();
//!
//! let result = db
//!     .update_single("people", json!({"_key": "alice", "age": 31}), &WriteOptions::new())
//!     .unwrap();
//! assert_ne!(result.rev, result.old_rev);
//! ```

mod builder;
pub mod config;
pub mod registry;

pub use builder::DatabaseBuilder;
pub use config::{DatabaseConfig, CONFIG_FILE_NAME};
pub use registry::CollectionRegistry;

use docgraph_core::{
    CollectionInfo, CollectionKind, CollectionName, DocumentLimits, DocumentStore, Error, Result,
};
use docgraph_storage::{KeyGenerator, ShardedStore};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Document database over a pluggable store
pub struct Database {
    pub(crate) store: Arc<dyn DocumentStore>,
    pub(crate) registry: CollectionRegistry,
    pub(crate) config: DatabaseConfig,
    pub(crate) limits: DocumentLimits,
    pub(crate) keys: KeyGenerator,
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("collections", &self.registry.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Database {
    /// Start configuring a database
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    /// In-memory database with the default configuration
    pub fn in_memory() -> Arc<Self> {
        let config = DatabaseConfig::default();
        Arc::new(Database {
            store: Arc::new(ShardedStore::new()),
            registry: CollectionRegistry::new(),
            limits: config.limits(),
            keys: KeyGenerator::default(),
            config,
        })
    }

    /// Build a database from a validated config and a store
    pub(crate) fn with_store(config: DatabaseConfig, store: Arc<dyn DocumentStore>) -> Result<Self> {
        config.validate()?;
        let keys = KeyGenerator::new(config.key_generator_kind()?);
        info!(
            target: "docgraph::db",
            key_generator = %keys.kind(),
            parallel_batch_threshold = config.parallel_batch_threshold,
            max_cas_retries = config.max_cas_retries,
            "database opened"
        );
        Ok(Database {
            store,
            registry: CollectionRegistry::new(),
            limits: config.limits(),
            keys,
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Underlying document store
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Register a new collection
    ///
    /// # Errors
    ///
    /// - `IllegalName` if `name` is malformed
    /// - `DuplicateName` if a collection of that name exists
    pub fn create_collection(&self, name: &str, kind: CollectionKind) -> Result<CollectionInfo> {
        let name = CollectionName::new(name)?;
        let info = self.registry.register(name, kind)?;
        info!(target: "docgraph::db", collection = %info.name, kind = %info.kind, "collection created");
        Ok(info)
    }

    /// All collections, sorted by name
    pub fn collections(&self) -> Vec<CollectionInfo> {
        self.registry.list()
    }

    /// Look up one collection
    pub fn collection(&self, name: &str) -> Result<CollectionInfo> {
        self.registry.resolve(name)
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: &str) -> Result<usize> {
        let info = self.registry.resolve(collection)?;
        Ok(self.store.count(&info.name))
    }

    /// Reject batches above `max_batch_size`
    pub(crate) fn check_batch_size(&self, len: usize) -> Result<()> {
        if len > self.config.max_batch_size {
            return Err(Error::bad_parameter(format!(
                "batch of {} items exceeds max_batch_size {}",
                len, self.config.max_batch_size
            )));
        }
        Ok(())
    }
}
