//! Document key generators
//!
//! Used when a created document carries no `_key`.
//!
//! - `Traditional`: increasing decimal numbers (`"1"`, `"2"`, ...)
//! - `Uuid`: random UUIDv4 in simple (hyphen-free) form

use docgraph_core::{DocumentKey, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Key generator flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyGeneratorKind {
    /// Increasing decimal numbers
    #[default]
    Traditional,
    /// Random UUIDv4
    Uuid,
}

impl fmt::Display for KeyGeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyGeneratorKind::Traditional => f.write_str("traditional"),
            KeyGeneratorKind::Uuid => f.write_str("uuid"),
        }
    }
}

impl FromStr for KeyGeneratorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "traditional" => Ok(KeyGeneratorKind::Traditional),
            "uuid" => Ok(KeyGeneratorKind::Uuid),
            other => Err(Error::bad_parameter(format!(
                "unknown key generator '{}', expected \"traditional\" or \"uuid\"",
                other
            ))),
        }
    }
}

/// Generates keys for documents created without one
#[derive(Debug)]
pub struct KeyGenerator {
    kind: KeyGeneratorKind,
    counter: AtomicU64,
}

impl KeyGenerator {
    /// Create a generator of the given kind
    pub fn new(kind: KeyGeneratorKind) -> Self {
        Self {
            kind,
            counter: AtomicU64::new(0),
        }
    }

    /// Generator kind
    pub fn kind(&self) -> KeyGeneratorKind {
        self.kind
    }

    /// Record a key stored by a caller
    ///
    /// A traditional generator moves past numeric keys so later generated
    /// keys do not collide with them. Other keys are ignored.
    pub fn track(&self, key: &DocumentKey) {
        if self.kind != KeyGeneratorKind::Traditional {
            return;
        }
        if let Ok(n) = key.as_str().parse::<u64>() {
            self.counter.fetch_max(n, Ordering::Relaxed);
        }
    }

    /// Produce the next key
    ///
    /// Generated keys may still collide with keys written through another
    /// generator sharing the store; the caller must insert with
    /// `put_if_absent` and retry on collision.
    pub fn next_key(&self) -> Result<DocumentKey> {
        match self.kind {
            KeyGeneratorKind::Traditional => {
                let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
                DocumentKey::new(n.to_string())
            }
            KeyGeneratorKind::Uuid => DocumentKey::new(Uuid::new_v4().simple().to_string()),
        }
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new(KeyGeneratorKind::default())
    }
}
