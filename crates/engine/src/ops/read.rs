//! Document reads

use docgraph_core::{CollectionInfo, Document, DocumentId, DocumentKey, Error, Result};

use crate::batch::run_batch;
use crate::database::Database;

impl Database {
    /// Read one document by key
    ///
    /// # Errors
    ///
    /// - `CollectionNotFound` for an unknown collection
    /// - `DocumentKeyBad` for a malformed key
    /// - `DocumentNotFound` if no document has that key
    pub fn read_single(&self, collection: &str, key: &str) -> Result<Document> {
        let info = self.registry.resolve(collection)?;
        self.read_one(&info, key)
    }

    /// Read several documents by key, one result per key
    pub fn read_multiple(&self, collection: &str, keys: Vec<String>) -> Result<Vec<Result<Document>>> {
        let info = self.registry.resolve(collection)?;
        self.check_batch_size(keys.len())?;
        Ok(run_batch(
            "read",
            keys,
            self.config.parallel_batch_threshold,
            |key| self.read_one(&info, &key),
        ))
    }

    fn read_one(&self, info: &CollectionInfo, key: &str) -> Result<Document> {
        let id = DocumentId::new(info.name.clone(), DocumentKey::new(key)?);
        self.store
            .get(&id)?
            .ok_or_else(|| Error::document_not_found(&id))
    }
}
