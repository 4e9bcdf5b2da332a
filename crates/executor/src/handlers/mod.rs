//! Command handlers organized by category.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `collection` | CreateCollection, ListCollections, Count |
//! | `document` | CreateSingle, CreateMultiple, ReadSingle, ReadMultiple |
//! | `write` | UpdateSingle, UpdateMultiple, ReplaceSingle, ReplaceMultiple |

pub mod collection;
pub mod document;
pub mod write;
