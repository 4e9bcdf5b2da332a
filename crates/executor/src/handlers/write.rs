//! Update and replace command handlers.
//!
//! Single variants surface the item's error as the command error. Multiple
//! variants embed item errors as descriptors and fail whole only on
//! request-level errors.

use std::sync::Arc;

use docgraph_core::WriteOptions;
use docgraph_engine::Database;
use serde_json::Value;

use crate::convert::{batch_items, convert_result};
use crate::{Output, Result};

/// Handle UpdateSingle command.
pub fn update_single(
    db: &Arc<Database>,
    collection: String,
    patch: Value,
    options: WriteOptions,
) -> Result<Output> {
    let result = convert_result(db.update_single(&collection, patch, &options))?;
    Ok(Output::Write(result))
}

/// Handle UpdateMultiple command.
pub fn update_multiple(
    db: &Arc<Database>,
    collection: String,
    patches: Vec<Value>,
    options: WriteOptions,
) -> Result<Output> {
    let results = convert_result(db.update_multiple(&collection, patches, &options))?;
    Ok(Output::WriteBatch(batch_items(results)))
}

/// Handle ReplaceSingle command.
pub fn replace_single(
    db: &Arc<Database>,
    collection: String,
    document: Value,
    options: WriteOptions,
) -> Result<Output> {
    let result = convert_result(db.replace_single(&collection, document, &options))?;
    Ok(Output::Write(result))
}

/// Handle ReplaceMultiple command.
pub fn replace_multiple(
    db: &Arc<Database>,
    collection: String,
    documents: Vec<Value>,
    options: WriteOptions,
) -> Result<Output> {
    let results = convert_result(db.replace_multiple(&collection, documents, &options))?;
    Ok(Output::WriteBatch(batch_items(results)))
}
