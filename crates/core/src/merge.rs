//! Merge engine for partial updates
//!
//! Computes a new document body from the stored body and a patch:
//!
//! | Patch value | Stored value | `keep_null` | `merge_objects` | Result |
//! |-------------|--------------|-------------|-----------------|--------|
//! | `null` | any | true | - | field set to `null` |
//! | `null` | any | false | - | field removed |
//! | object | object | - | true | recursive merge |
//! | object | object | - | false | patch object replaces stored object |
//! | anything else | any | - | - | patch value overwrites |
//!
//! Fields absent from the patch are kept. System attributes in the patch are
//! ignored at the top level; inside nested objects every attribute is user
//! data. With `keep_null = false`, nulls inside objects written from the
//! patch are stripped too; arrays and everything inside them are kept as given.
//!
//! Replacement does not merge: [`replace_body`] keeps only the patch's user
//! attributes.

use crate::document::{is_system_attribute, user_attributes};
use serde_json::{Map, Value};

/// Null-handling and object-merge policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergePolicy {
    /// Keep explicit nulls instead of removing the attribute
    pub keep_null: bool,
    /// Deep-merge nested objects instead of replacing them
    pub merge_objects: bool,
}

impl Default for MergePolicy {
    fn default() -> Self {
        MergePolicy {
            keep_null: true,
            merge_objects: true,
        }
    }
}

/// Apply `patch` to a copy of `current` and return the new body
pub fn apply_update(
    current: &Map<String, Value>,
    patch: &Map<String, Value>,
    policy: MergePolicy,
) -> Map<String, Value> {
    let mut target = current.clone();
    for (field, value) in patch {
        if is_system_attribute(field) {
            continue;
        }
        merge_field(&mut target, field, value, policy);
    }
    target
}

/// New body for a replace: the patch's user attributes, nothing else
pub fn replace_body(document: &Map<String, Value>) -> Map<String, Value> {
    user_attributes(document)
}

/// Merge `patch` into `target` field by field
pub fn merge_objects(target: &mut Map<String, Value>, patch: &Map<String, Value>, policy: MergePolicy) {
    for (field, value) in patch {
        merge_field(target, field, value, policy);
    }
}

fn merge_field(target: &mut Map<String, Value>, field: &str, value: &Value, policy: MergePolicy) {
    match value {
        Value::Null if policy.keep_null => {
            target.insert(field.to_string(), Value::Null);
        }
        Value::Null => {
            target.remove(field);
        }
        Value::Object(patch_obj) if policy.merge_objects => match target.get_mut(field) {
            Some(Value::Object(existing)) => merge_objects(existing, patch_obj, policy),
            _ => {
                target.insert(field.to_string(), written_value(value, policy));
            }
        },
        _ => {
            target.insert(field.to_string(), written_value(value, policy));
        }
    }
}

/// The value as it lands in the document, with object nulls stripped
/// when `keep_null` is off. Arrays are stored as given.
fn written_value(value: &Value, policy: MergePolicy) -> Value {
    if policy.keep_null {
        return value.clone();
    }
    strip_nulls(value)
}

fn strip_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), strip_nulls(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
