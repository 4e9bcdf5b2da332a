//! Create and read command handlers.

use std::sync::Arc;

use docgraph_engine::Database;
use serde_json::Value;

use crate::convert::{batch_items, convert_result};
use crate::{Output, Result};

/// Handle CreateSingle command.
pub fn create_single(db: &Arc<Database>, collection: String, body: Value) -> Result<Output> {
    let document = convert_result(db.create_single(&collection, body))?;
    Ok(Output::Document(document))
}

/// Handle CreateMultiple command.
pub fn create_multiple(db: &Arc<Database>, collection: String, bodies: Vec<Value>) -> Result<Output> {
    let results = convert_result(db.create_multiple(&collection, bodies))?;
    Ok(Output::DocumentBatch(batch_items(results)))
}

/// Handle ReadSingle command.
pub fn read_single(db: &Arc<Database>, collection: String, key: String) -> Result<Output> {
    let document = convert_result(db.read_single(&collection, &key))?;
    Ok(Output::Document(document))
}

/// Handle ReadMultiple command.
pub fn read_multiple(db: &Arc<Database>, collection: String, keys: Vec<String>) -> Result<Output> {
    let results = convert_result(db.read_multiple(&collection, keys))?;
    Ok(Output::DocumentBatch(batch_items(results)))
}
