//! Edge endpoint validation
//!
//! An edge is created with `_from` and `_to` pointing at existing documents
//! in vertex collections. After that its endpoints are fixed: updates and
//! replaces may repeat them but never change them.

use docgraph_core::document::{json_type_name, FROM, TO};
use docgraph_core::{DocumentId, DocumentStore, EdgeEnds, Error, Result};
use serde_json::{Map, Value};

use crate::database::CollectionRegistry;

fn endpoint(object: &Map<String, Value>, attribute: &str) -> Result<Option<DocumentId>> {
    match object.get(attribute) {
        None => Ok(None),
        Some(Value::String(handle)) => DocumentId::parse(handle)
            .map(Some)
            .map_err(|e| Error::invalid_edge(format!("{}: {}", attribute, e))),
        Some(other) => Err(Error::invalid_edge(format!(
            "{} must be a document handle, got {}",
            attribute,
            json_type_name(other)
        ))),
    }
}

fn required_endpoint(
    registry: &CollectionRegistry,
    store: &dyn DocumentStore,
    object: &Map<String, Value>,
    attribute: &str,
) -> Result<DocumentId> {
    let id = endpoint(object, attribute)?
        .ok_or_else(|| Error::invalid_edge(format!("{} is required", attribute)))?;
    match registry.kind(id.collection()) {
        Some(kind) if !kind.is_edge() => {}
        Some(_) => {
            return Err(Error::invalid_edge(format!(
                "{} must point into a vertex collection, '{}' is an edge collection",
                attribute,
                id.collection()
            )))
        }
        None => {
            return Err(Error::invalid_edge(format!(
                "{} points into unknown collection '{}'",
                attribute,
                id.collection()
            )))
        }
    }
    if !store.contains(&id)? {
        return Err(Error::invalid_edge(format!(
            "{} points to missing document '{}'",
            attribute, id
        )));
    }
    Ok(id)
}

/// Endpoints for a new edge
pub(crate) fn new_edge_ends(
    registry: &CollectionRegistry,
    store: &dyn DocumentStore,
    object: &Map<String, Value>,
) -> Result<EdgeEnds> {
    Ok(EdgeEnds {
        from: required_endpoint(registry, store, object, FROM)?,
        to: required_endpoint(registry, store, object, TO)?,
    })
}

/// Endpoints after an update or replace: unchanged
///
/// Fails if the request names a different `_from` or `_to`.
pub(crate) fn retain_edge_ends(current: &EdgeEnds, object: &Map<String, Value>) -> Result<EdgeEnds> {
    for (attribute, existing) in [(FROM, &current.from), (TO, &current.to)] {
        if let Some(requested) = endpoint(object, attribute)? {
            if &requested != existing {
                return Err(Error::invalid_edge(format!(
                    "{} cannot change from '{}' to '{}'",
                    attribute, existing, requested
                )));
            }
        }
    }
    Ok(current.clone())
}
