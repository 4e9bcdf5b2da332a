//! Update and replace
//!
//! Both run the same pipeline:
//!
//! ```text
//! LOOKUP -> REVISION CHECK -> APPLY -> VALIDATE -> PERSIST (CAS) -> FORMAT
//! ```
//!
//! PERSIST swaps the document only if its revision is still the one read at
//! LOOKUP. A lost race goes back to LOOKUP, at most `max_cas_retries` times,
//! so a strict write (`ignoreRevs = false`) that lost sees the new revision
//! and fails with `Conflict`.

use docgraph_core::{
    apply_update, replace_body, CasOutcome, CollectionInfo, Document, DocumentId, Error, Result,
    WriteOptions, WritePolicy,
};
use serde_json::{Map, Value};
use std::thread;
use tracing::{debug, warn};

use crate::batch::run_batch;
use crate::database::Database;
use crate::edge::retain_edge_ends;
use crate::format::WriteResult;
use crate::revision::check_revision;
use crate::selector::{expect_object, expected_revision, select_key};

/// Whether the request is merged into or substituted for the stored body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteMode {
    /// Partial update through the merge engine
    Update,
    /// Whole-body replacement
    Replace,
}

impl WriteMode {
    fn as_str(self) -> &'static str {
        match self {
            WriteMode::Update => "update",
            WriteMode::Replace => "replace",
        }
    }

    /// Resolve caller options. A replace returns the new document unless
    /// the caller turns `returnNew` off explicitly.
    fn policy(self, options: &WriteOptions, defaults: &WritePolicy) -> WritePolicy {
        let mut policy = options.resolve(defaults);
        if self == WriteMode::Replace && options.return_new.is_none() {
            policy.return_new = true;
        }
        policy
    }

    fn new_body(self, current: &Document, object: &Map<String, Value>, policy: &WritePolicy) -> Map<String, Value> {
        match self {
            WriteMode::Update => apply_update(current.body(), object, policy.merge_policy()),
            WriteMode::Replace => replace_body(object),
        }
    }
}

impl Database {
    /// Partially update one document
    ///
    /// `patch` selects its target by `_key` (or `_id`) and may carry the
    /// expected `_rev`. Fields in the patch are merged into the stored body
    /// per `keepNull` and `mergeObjects`.
    ///
    /// # Errors
    ///
    /// - `CollectionNotFound` for an unknown collection
    /// - `DocumentNotFound` if no document has that key
    /// - `Conflict` if `ignoreRevs` is false and `_rev` does not match
    /// - `InvalidEdgeAttribute` if an edge's `_from`/`_to` would change
    pub fn update_single(
        &self,
        collection: &str,
        patch: Value,
        options: &WriteOptions,
    ) -> Result<WriteResult> {
        self.modify_single(WriteMode::Update, collection, patch, options)
    }

    /// Partially update several documents independently
    pub fn update_multiple(
        &self,
        collection: &str,
        patches: Vec<Value>,
        options: &WriteOptions,
    ) -> Result<Vec<Result<WriteResult>>> {
        self.modify_multiple(WriteMode::Update, collection, patches, options)
    }

    /// Replace one document's body
    ///
    /// The new body is exactly the user attributes of `document`. `_key`,
    /// `_id` and an edge's `_from`/`_to` are kept. The result carries the
    /// new document under `new` unless `returnNew` is explicitly false.
    /// Errors are those of [`Database::update_single`].
    pub fn replace_single(
        &self,
        collection: &str,
        document: Value,
        options: &WriteOptions,
    ) -> Result<WriteResult> {
        self.modify_single(WriteMode::Replace, collection, document, options)
    }

    /// Replace several documents independently
    pub fn replace_multiple(
        &self,
        collection: &str,
        documents: Vec<Value>,
        options: &WriteOptions,
    ) -> Result<Vec<Result<WriteResult>>> {
        self.modify_multiple(WriteMode::Replace, collection, documents, options)
    }

    fn modify_single(
        &self,
        mode: WriteMode,
        collection: &str,
        input: Value,
        options: &WriteOptions,
    ) -> Result<WriteResult> {
        let info = self.registry.resolve(collection)?;
        let policy = mode.policy(options, &self.config.defaults);
        self.modify_one(mode, &info, input, &policy)
    }

    fn modify_multiple(
        &self,
        mode: WriteMode,
        collection: &str,
        inputs: Vec<Value>,
        options: &WriteOptions,
    ) -> Result<Vec<Result<WriteResult>>> {
        let info = self.registry.resolve(collection)?;
        self.check_batch_size(inputs.len())?;
        let policy = mode.policy(options, &self.config.defaults);
        Ok(run_batch(
            mode.as_str(),
            inputs,
            self.config.parallel_batch_threshold,
            |input| self.modify_one(mode, &info, input, &policy),
        ))
    }

    fn modify_one(
        &self,
        mode: WriteMode,
        info: &CollectionInfo,
        input: Value,
        policy: &WritePolicy,
    ) -> Result<WriteResult> {
        let object = expect_object(input)?;
        let id = DocumentId::new(info.name.clone(), select_key(&info.name, &object)?);
        let expected = expected_revision(&object)?;

        let attempts = self.config.max_cas_retries.saturating_add(1);
        for attempt in 1..=attempts {
            let current = self
                .store
                .get(&id)?
                .ok_or_else(|| Error::document_not_found(&id))?;
            check_revision(&id, current.rev(), expected.as_ref(), policy.ignore_revs)?;

            let edge = current
                .edge()
                .map(|ends| retain_edge_ends(ends, &object))
                .transpose()?;
            let body = mode.new_body(&current, &object, policy);
            self.limits.validate(&body)?;

            let next = Document::new(id.clone(), self.store.next_revision(), edge, body);
            match self.store.compare_and_swap(current.rev(), next.clone())? {
                CasOutcome::Swapped => {
                    debug!(
                        target: "docgraph::write",
                        op = mode.as_str(),
                        id = %id,
                        old_rev = %current.rev(),
                        rev = %next.rev(),
                        "document written"
                    );
                    return Ok(WriteResult::modified(current, next, policy));
                }
                CasOutcome::Missing => return Err(Error::document_not_found(&id)),
                CasOutcome::RevisionMismatch { current: actual } => {
                    debug!(
                        target: "docgraph::write",
                        id = %id,
                        attempt,
                        read = %current.rev(),
                        actual = %actual,
                        "lost write race, retrying"
                    );
                    thread::yield_now();
                }
            }
        }

        warn!(
            target: "docgraph::write",
            id = %id,
            attempts,
            "giving up after repeated write races"
        );
        Err(Error::WriteContention {
            id: id.to_string(),
            attempts,
        })
    }
}
