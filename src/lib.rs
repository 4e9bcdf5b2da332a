//! docgraph - embedded document-update engine for graph collections
//!
//! Documents live in vertex or edge collections and are identified by
//! `_key`/`_id`. Every write issues a new `_rev`; updates merge a patch into
//! the stored document, replaces substitute it, and both can require the
//! caller's `_rev` to still be current.
//!
//! # Quick Start
//!
//! ```
//! use docgraph::{CollectionKind, Database, WriteOptions};
//! use serde_json::json;
//!
//! let db = Database::in_memory();
//! db.create_collection("people", CollectionKind::Vertex).unwrap();
//! let alice = db.create_single("people", json!({"name": "Alice", "tags": {"a": 1}})).unwrap();
//!
//! let mut patch = alice.to_json();
//! patch["tags"] = json!({"b": 1});
//! let result = db
//!     .update_single("people", patch, &WriteOptions::new().ignore_revs(false).return_new(true))
//!     .unwrap();
//! assert_eq!(result.new.unwrap().get("tags"), Some(&json!({"a": 1, "b": 1})));
//! ```
//!
//! # Architecture
//!
//! All operations are available on [`Database`] directly or as serializable
//! [`Command`]s through the [`Executor`].

// Re-export the public API from docgraph-executor
pub use docgraph_executor::*;
