//! Write options
//!
//! [`WriteOptions`] is what a caller sends: every flag optional, camelCase on
//! the wire (`returnOld`, `returnNew`, `keepNull`, `mergeObjects`,
//! `ignoreRevs`). [`WritePolicy`] is the resolved form the engine works
//! with, produced by filling unset flags from the database defaults.

use crate::merge::MergePolicy;
use serde::{Deserialize, Serialize};

/// Caller-supplied write options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WriteOptions {
    /// Include the previous document under `old`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_old: Option<bool>,
    /// Include the new document under `new`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_new: Option<bool>,
    /// Keep explicit nulls instead of removing the attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_null: Option<bool>,
    /// Deep-merge nested objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_objects: Option<bool>,
    /// Skip the `_rev` precondition check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_revs: Option<bool>,
}

impl WriteOptions {
    /// Options with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `returnOld`
    pub fn return_old(mut self, on: bool) -> Self {
        self.return_old = Some(on);
        self
    }

    /// Set `returnNew`
    pub fn return_new(mut self, on: bool) -> Self {
        self.return_new = Some(on);
        self
    }

    /// Set `keepNull`
    pub fn keep_null(mut self, on: bool) -> Self {
        self.keep_null = Some(on);
        self
    }

    /// Set `mergeObjects`
    pub fn merge_objects(mut self, on: bool) -> Self {
        self.merge_objects = Some(on);
        self
    }

    /// Set `ignoreRevs`
    pub fn ignore_revs(mut self, on: bool) -> Self {
        self.ignore_revs = Some(on);
        self
    }

    /// Fill unset flags from `defaults`
    pub fn resolve(&self, defaults: &WritePolicy) -> WritePolicy {
        WritePolicy {
            return_old: self.return_old.unwrap_or(defaults.return_old),
            return_new: self.return_new.unwrap_or(defaults.return_new),
            keep_null: self.keep_null.unwrap_or(defaults.keep_null),
            merge_objects: self.merge_objects.unwrap_or(defaults.merge_objects),
            ignore_revs: self.ignore_revs.unwrap_or(defaults.ignore_revs),
        }
    }
}

/// Fully resolved write flags
///
/// Also the shape of the `[defaults]` table in the database config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WritePolicy {
    /// Include the previous document under `old`
    pub return_old: bool,
    /// Include the new document under `new`
    pub return_new: bool,
    /// Keep explicit nulls instead of removing the attribute
    pub keep_null: bool,
    /// Deep-merge nested objects
    pub merge_objects: bool,
    /// Skip the `_rev` precondition check
    pub ignore_revs: bool,
}

impl Default for WritePolicy {
    fn default() -> Self {
        WritePolicy {
            return_old: false,
            return_new: false,
            keep_null: true,
            merge_objects: true,
            ignore_revs: true,
        }
    }
}

impl WritePolicy {
    /// The merge-relevant part of this policy
    pub fn merge_policy(&self) -> MergePolicy {
        MergePolicy {
            keep_null: self.keep_null,
            merge_objects: self.merge_objects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = WriteOptions::new().resolve(&WritePolicy::default());
        assert!(!policy.return_old);
        assert!(!policy.return_new);
        assert!(policy.keep_null);
        assert!(policy.merge_objects);
        assert!(policy.ignore_revs);
    }

    #[test]
    fn test_explicit_options_override_defaults() {
        let policy = WriteOptions::new()
            .return_new(true)
            .keep_null(false)
            .ignore_revs(false)
            .resolve(&WritePolicy::default());
        assert!(policy.return_new);
        assert!(!policy.keep_null);
        assert!(!policy.ignore_revs);
        assert!(policy.merge_objects);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let opts: WriteOptions =
            serde_json::from_str(r#"{"returnNew": true, "ignoreRevs": false}"#).unwrap();
        assert_eq!(opts, WriteOptions::new().return_new(true).ignore_revs(false));
        assert_eq!(
            serde_json::to_string(&WriteOptions::new().keep_null(false)).unwrap(),
            r#"{"keepNull":false}"#
        );
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert!(serde_json::from_str::<WriteOptions>(r#"{"waitForSync": true}"#).is_err());
    }

    #[test]
    fn test_merge_policy_projection() {
        let policy = WritePolicy {
            keep_null: false,
            merge_objects: false,
            ..WritePolicy::default()
        };
        assert_eq!(
            policy.merge_policy(),
            MergePolicy {
                keep_null: false,
                merge_objects: false
            }
        );
    }
}
