//! Storage layer for docgraph
//!
//! This crate implements the in-memory document backend:
//! - ShardedStore: DashMap + FxHashMap, per-document compare-and-swap
//! - RevisionClock: process-wide unique `_rev` tokens
//! - KeyGenerator: `_key` assignment for documents created without one

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod keygen;
pub mod revision;
pub mod sharded;

pub use keygen::{KeyGenerator, KeyGeneratorKind};
pub use revision::{encode_tick, RevisionClock};
pub use sharded::ShardedStore;
