//! Database builder for fluent configuration

use docgraph_core::{CollectionKind, DocumentStore, Result};
use docgraph_storage::ShardedStore;
use std::path::Path;
use std::sync::Arc;

use super::{Database, DatabaseConfig};

/// Builder for Database configuration
///
/// ```
/// use docgraph_core::CollectionKind;
/// use docgraph_engine::{Database, DatabaseConfig};
///
/// let db = Database::builder()
///     .config(DatabaseConfig { max_cas_retries: 4, ..DatabaseConfig::default() })
///     .collection("people", CollectionKind::Vertex)
///     .collection("knows", CollectionKind::Edge)
///     .open()
///     .unwrap();
/// assert_eq!(db.collections().len(), 2);
/// ```
#[derive(Default)]
pub struct DatabaseBuilder {
    config: DatabaseConfig,
    store: Option<Arc<dyn DocumentStore>>,
    collections: Vec<(String, CollectionKind)>,
}

impl DatabaseBuilder {
    /// Create new builder with the default config and an in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this configuration
    pub fn config(mut self, config: DatabaseConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds invalid values.
    pub fn config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.config = DatabaseConfig::from_file(path.as_ref())?;
        Ok(self)
    }

    /// Use an existing store instead of a fresh in-memory one
    pub fn store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Register a collection on open
    pub fn collection(mut self, name: impl Into<String>, kind: CollectionKind) -> Self {
        self.collections.push((name.into(), kind));
        self
    }

    /// Open the database
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or a collection name is
    /// malformed or repeated.
    pub fn open(self) -> Result<Arc<Database>> {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(ShardedStore::new()) as Arc<dyn DocumentStore>);
        let db = Database::with_store(self.config, store)?;
        for (name, kind) in &self.collections {
            db.create_collection(name, *kind)?;
        }
        Ok(Arc::new(db))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgraph_core::Error;
    use tempfile::TempDir;

    #[test]
    fn test_open_defaults() {
        let db = DatabaseBuilder::new().open().unwrap();
        assert_eq!(db.config(), &DatabaseConfig::default());
        assert!(db.collections().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DatabaseConfig {
            key_generator: "random".to_string(),
            ..DatabaseConfig::default()
        };
        assert!(matches!(
            DatabaseBuilder::new().config(config).open(),
            Err(Error::BadParameter { .. })
        ));
    }

    #[test]
    fn test_duplicate_collection_rejected() {
        let result = DatabaseBuilder::new()
            .collection("people", CollectionKind::Vertex)
            .collection("people", CollectionKind::Edge)
            .open();
        assert!(matches!(result, Err(Error::DuplicateName { .. })));
    }

    #[test]
    fn test_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(super::super::CONFIG_FILE_NAME);
        std::fs::write(&path, "key_generator = \"uuid\"\nmax_batch_size = 5\n").unwrap();

        let db = DatabaseBuilder::new().config_file(&path).unwrap().open().unwrap();
        assert_eq!(db.config().max_batch_size, 5);
        assert_eq!(db.config().key_generator, "uuid");
    }

    #[test]
    fn test_shared_store() {
        let store: Arc<dyn DocumentStore> = Arc::new(ShardedStore::new());
        let db = DatabaseBuilder::new().store(Arc::clone(&store)).open().unwrap();
        assert!(Arc::ptr_eq(db.store(), &store));
    }
}
