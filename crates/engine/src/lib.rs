//! Document engine for docgraph
//!
//! This crate turns requests into store writes:
//! - Database: collections, configuration, store handle
//! - Operations: create, update, replace and read, single or batched
//! - Revision checks and per-document compare-and-swap
//! - Edge endpoint validation
//! - Batch coordination (sequential or rayon-parallel, order preserving)
//!
//! Logging goes through `tracing` under the `docgraph::db`,
//! `docgraph::write` and `docgraph::batch` targets. The engine never installs
//! a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod batch;
pub mod database;
mod edge;
pub mod format;
mod ops;
mod revision;
mod selector;

pub use database::{
    CollectionRegistry, Database, DatabaseBuilder, DatabaseConfig, CONFIG_FILE_NAME,
};
pub use format::WriteResult;
