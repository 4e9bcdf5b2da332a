//! # docgraph Executor
//!
//! The public API for docgraph, a document-update engine for vertex and
//! edge collections.
//!
//! This is the only crate users need to import. It provides:
//! - [`Executor`] - routes [`Command`]s to the engine
//! - [`Command`]/[`Output`] - the serializable command interface (for SDKs)
//! - [`Error`]/[`ErrorDescriptor`] - structured, numbered errors
//!
//! ## Quick Start
//!
//! ```
//! use docgraph_executor::{CollectionKind, Command, Database, Executor, Output, WriteOptions};
//! use serde_json::json;
//!
//! let executor = Executor::new(Database::in_memory());
//! executor.execute(Command::CreateCollection {
//!     name: "people".into(),
//!     kind: CollectionKind::Vertex,
//! })?;
//! executor.execute(Command::CreateSingle {
//!     collection: "people".into(),
//!     body: json!({"_key": "alice", "age": 30}),
//! })?;
//!
//! let output = executor.execute(Command::UpdateSingle {
//!     collection: "people".into(),
//!     patch: json!({"_key": "alice", "age": null}),
//!     options: WriteOptions::new().keep_null(false).return_new(true),
//! })?;
//! match output {
//!     Output::Write(result) => assert!(result.new.unwrap().get("age").is_none()),
//!     other => panic!("unexpected output: {:?}", other),
//! }
//! # Ok::<(), docgraph_executor::Error>(())
//! ```
//!
//! ## Single vs Multiple
//!
//! `...Single` commands return the item's error as the command error.
//! `...Multiple` commands return one [`BatchItem`] per input, in input order;
//! a failed item carries an [`ErrorDescriptor`] (`errorNum`, `errorMessage`).

#![warn(missing_docs)]

mod command;
mod convert;
mod error;
mod executor;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use convert::convert_result;
pub use error::{BatchItem, Error, ErrorDescriptor};
pub use executor::Executor;
pub use output::Output;

// Re-export engine types so users don't need the lower crates directly
pub use docgraph_core::{
    CollectionInfo, CollectionKind, Document, DocumentId, Revision, WriteOptions,
};
pub use docgraph_engine::{
    Database, DatabaseBuilder, DatabaseConfig, WriteResult, CONFIG_FILE_NAME,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
