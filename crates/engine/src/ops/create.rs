//! Document creation

use docgraph_core::document::{is_system_attribute, KEY};
use docgraph_core::{CollectionInfo, Document, DocumentId, EdgeEnds, Error, Result};
use serde_json::{Map, Value};
use tracing::debug;

use crate::batch::run_batch;
use crate::database::Database;
use crate::edge::new_edge_ends;
use crate::selector::{expect_object, key_from_value};

impl Database {
    /// Create one document
    ///
    /// Returns the stored document with its `_key`, `_id` and `_rev`. Without
    /// a `_key` in `body` one is generated.
    ///
    /// # Errors
    ///
    /// - `CollectionNotFound` for an unknown collection
    /// - `DocumentTypeInvalid` if `body` is not an object
    /// - `DocumentKeyBad` for a malformed `_key`
    /// - `UniqueConstraintViolated` if the key is taken
    /// - `InvalidEdgeAttribute` for bad `_from`/`_to` in an edge collection
    /// - `DocumentTooLarge` if the body exceeds the configured limits
    pub fn create_single(&self, collection: &str, body: Value) -> Result<Document> {
        let info = self.registry.resolve(collection)?;
        self.create_one(&info, body)
    }

    /// Create several documents independently
    ///
    /// The outer error is request-level (unknown collection, oversized
    /// batch). Each inner result belongs to the body at the same position.
    pub fn create_multiple(
        &self,
        collection: &str,
        bodies: Vec<Value>,
    ) -> Result<Vec<Result<Document>>> {
        let info = self.registry.resolve(collection)?;
        self.check_batch_size(bodies.len())?;
        Ok(run_batch(
            "create",
            bodies,
            self.config.parallel_batch_threshold,
            |body| self.create_one(&info, body),
        ))
    }

    fn create_one(&self, info: &CollectionInfo, body: Value) -> Result<Document> {
        let object = expect_object(body)?;
        let key = object.get(KEY).map(key_from_value).transpose()?;
        let edge = if info.kind.is_edge() {
            Some(new_edge_ends(&self.registry, self.store.as_ref(), &object)?)
        } else {
            None
        };
        let mut body = object;
        body.retain(|field, _| !is_system_attribute(field));
        self.limits.validate(&body)?;

        let document = match key {
            Some(key) => {
                let document = Document::new(
                    DocumentId::new(info.name.clone(), key),
                    self.store.next_revision(),
                    edge,
                    body,
                );
                if !self.store.put_if_absent(document.clone())? {
                    return Err(Error::UniqueConstraintViolated {
                        id: document.id().to_string(),
                    });
                }
                self.keys.track(document.key());
                document
            }
            None => self.insert_with_generated_key(info, edge, body)?,
        };

        debug!(
            target: "docgraph::write",
            id = %document.id(),
            rev = %document.rev(),
            "document created"
        );
        Ok(document)
    }

    fn insert_with_generated_key(
        &self,
        info: &CollectionInfo,
        edge: Option<EdgeEnds>,
        body: Map<String, Value>,
    ) -> Result<Document> {
        // Generated keys are distinct, so each collision is with a different
        // stored document and the loop ends once the collection is exhausted.
        let mut collisions = 0usize;
        loop {
            let key = self.keys.next_key()?;
            let document = Document::new(
                DocumentId::new(info.name.clone(), key),
                self.store.next_revision(),
                edge.clone(),
                body.clone(),
            );
            if self.store.put_if_absent(document.clone())? {
                if collisions > 0 {
                    debug!(
                        target: "docgraph::write",
                        id = %document.id(),
                        collisions,
                        "generated key skipped keys already in use"
                    );
                }
                return Ok(document);
            }
            collisions += 1;
            if collisions > self.store.count(&info.name) {
                return Err(Error::internal(format!(
                    "no free key in '{}' after {} generated keys",
                    info.name, collisions
                )));
            }
        }
    }
}
