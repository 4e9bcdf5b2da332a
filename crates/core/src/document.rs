//! Stored documents
//!
//! A [`Document`] is the latest version of one entry in a collection. System
//! attributes (`_key`, `_id`, `_rev`, `_from`, `_to`) are held as typed
//! fields; user attributes live in `body`, which never contains a system
//! attribute.
//!
//! On the wire a document is a single flat JSON object, system attributes
//! first:
//!
//! ```text
//! {"_key": "1", "_id": "edges/1", "_rev": "AAYV...", "_from": "v/a", "_to": "v/b", "k1": "v1"}
//! ```

use crate::error::{Error, Result};
use crate::types::{DocumentId, DocumentKey, Revision};
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// `_key` attribute
pub const KEY: &str = "_key";
/// `_id` attribute
pub const ID: &str = "_id";
/// `_rev` attribute
pub const REV: &str = "_rev";
/// `_from` attribute
pub const FROM: &str = "_from";
/// `_to` attribute
pub const TO: &str = "_to";
/// `_oldRev` attribute (result metadata only)
pub const OLD_REV: &str = "_oldRev";

const SYSTEM_ATTRIBUTES: [&str; 6] = [KEY, ID, REV, FROM, TO, OLD_REV];

/// True if `name` is a reserved top-level attribute
pub fn is_system_attribute(name: &str) -> bool {
    SYSTEM_ATTRIBUTES.contains(&name)
}

/// Copy of `object` without system attributes
pub fn user_attributes(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .filter(|(k, _)| !is_system_attribute(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Endpoints of an edge document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeEnds {
    /// `_from` handle
    pub from: DocumentId,
    /// `_to` handle
    pub to: DocumentId,
}

/// A stored document version
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: DocumentId,
    rev: Revision,
    edge: Option<EdgeEnds>,
    body: Map<String, Value>,
}

impl Document {
    /// Assemble a document. System attributes in `body` are dropped.
    pub fn new(
        id: DocumentId,
        rev: Revision,
        edge: Option<EdgeEnds>,
        mut body: Map<String, Value>,
    ) -> Self {
        body.retain(|k, _| !is_system_attribute(k));
        Document {
            id,
            rev,
            edge,
            body,
        }
    }

    /// `_id`
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// `_key`
    pub fn key(&self) -> &DocumentKey {
        self.id.key()
    }

    /// `_rev`
    pub fn rev(&self) -> &Revision {
        &self.rev
    }

    /// Edge endpoints, `None` for vertex documents
    pub fn edge(&self) -> Option<&EdgeEnds> {
        self.edge.as_ref()
    }

    /// `_from`, if this is an edge
    pub fn from(&self) -> Option<&DocumentId> {
        self.edge.as_ref().map(|e| &e.from)
    }

    /// `_to`, if this is an edge
    pub fn to(&self) -> Option<&DocumentId> {
        self.edge.as_ref().map(|e| &e.to)
    }

    /// User attributes
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// A user attribute by name
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }

    /// Flatten into a single JSON object including system attributes
    pub fn to_json(&self) -> Value {
        let mut out = Map::with_capacity(self.body.len() + 5);
        out.insert(KEY.to_string(), Value::String(self.key().to_string()));
        out.insert(ID.to_string(), Value::String(self.id.to_string()));
        out.insert(REV.to_string(), Value::String(self.rev.to_string()));
        if let Some(edge) = &self.edge {
            out.insert(FROM.to_string(), Value::String(edge.from.to_string()));
            out.insert(TO.to_string(), Value::String(edge.to.to_string()));
        }
        for (k, v) in &self.body {
            out.insert(k.clone(), v.clone());
        }
        Value::Object(out)
    }

    /// Rebuild a document from its flattened JSON form
    ///
    /// Requires `_id` and `_rev`; `_from`/`_to` must be both present or both
    /// absent.
    pub fn from_json(value: Value) -> Result<Self> {
        let object = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::DocumentTypeInvalid {
                    reason: format!("expected object, got {}", json_type_name(&other)),
                })
            }
        };
        let id = match object.get(ID) {
            Some(Value::String(s)) => DocumentId::parse(s)?,
            _ => {
                return Err(Error::DocumentHandleBad {
                    reason: "missing _id".to_string(),
                })
            }
        };
        let rev = match object.get(REV) {
            Some(Value::String(s)) => Revision::new(s.as_str()),
            _ => return Err(Error::bad_parameter("missing _rev")),
        };
        let edge = match (object.get(FROM), object.get(TO)) {
            (None, None) => None,
            (Some(Value::String(from)), Some(Value::String(to))) => Some(EdgeEnds {
                from: DocumentId::parse(from)?,
                to: DocumentId::parse(to)?,
            }),
            _ => return Err(Error::invalid_edge("_from and _to must both be handles")),
        };
        Ok(Document::new(id, rev, edge, object))
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let extra = if self.edge.is_some() { 5 } else { 3 };
        let mut map = serializer.serialize_map(Some(self.body.len() + extra))?;
        map.serialize_entry(KEY, self.key())?;
        map.serialize_entry(ID, &self.id)?;
        map.serialize_entry(REV, &self.rev)?;
        if let Some(edge) = &self.edge {
            map.serialize_entry(FROM, &edge.from)?;
            map.serialize_entry(TO, &edge.to)?;
        }
        for (k, v) in &self.body {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Document::from_json(value).map_err(D::Error::custom)
    }
}

/// Human-readable JSON type name for error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
