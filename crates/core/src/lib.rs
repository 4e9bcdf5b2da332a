//! Core types and traits for docgraph
//!
//! This crate defines the foundational types used throughout the system:
//! - Identifiers: CollectionName, CollectionKind, DocumentKey, DocumentId, Revision
//! - Document: a stored document version with system attributes
//! - Merge engine: keepNull / mergeObjects patch semantics
//! - Write options: caller options and the resolved policy
//! - Limits: document size and nesting limits
//! - Error: error taxonomy with stable error numbers
//! - Traits: the DocumentStore abstraction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod limits;
pub mod merge;
pub mod options;
pub mod traits;
pub mod types;

pub use document::{Document, EdgeEnds};
pub use error::{Error, ErrorKind, Result};
pub use limits::{DocumentLimits, MAX_DOCUMENT_SIZE, MAX_NESTING_DEPTH};
pub use merge::{apply_update, replace_body, MergePolicy};
pub use options::{WriteOptions, WritePolicy};
pub use traits::{CasOutcome, DocumentStore};
pub use types::{CollectionInfo, CollectionKind, CollectionName, DocumentId, DocumentKey, Revision};
