//! Collection command handlers.

use std::sync::Arc;

use docgraph_core::CollectionKind;
use docgraph_engine::Database;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle CreateCollection command.
pub fn create_collection(db: &Arc<Database>, name: String, kind: CollectionKind) -> Result<Output> {
    let info = convert_result(db.create_collection(&name, kind))?;
    Ok(Output::Collection(info))
}

/// Handle ListCollections command.
pub fn list_collections(db: &Arc<Database>) -> Result<Output> {
    Ok(Output::Collections(db.collections()))
}

/// Handle Count command.
pub fn count(db: &Arc<Database>, collection: String) -> Result<Output> {
    let n = convert_result(db.count(&collection))?;
    Ok(Output::Count(n as u64))
}
