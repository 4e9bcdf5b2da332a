//! Revision token generation
//!
//! Tokens come from a process-wide 64-bit tick. The tick starts at the
//! current wall-clock time in microseconds and only moves forward: each
//! call returns `max(last + 1, now)`, so tokens are unique even when the
//! clock stalls or steps backwards.
//!
//! The tick is encoded as URL-safe base64 of its big-endian bytes. Callers
//! must treat the result as opaque.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use docgraph_core::Revision;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static GLOBAL_TICK: AtomicU64 = AtomicU64::new(0);

fn now_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}

/// Revision token source
///
/// All clocks share one process-wide tick, so two stores never hand out
/// the same token either.
#[derive(Debug, Default, Clone, Copy)]
pub struct RevisionClock;

impl RevisionClock {
    /// Create a clock
    pub fn new() -> Self {
        RevisionClock
    }

    /// Advance the tick and return the new value
    pub fn tick(&self) -> u64 {
        let now = now_micros();
        let mut last = GLOBAL_TICK.load(Ordering::Acquire);
        loop {
            let next = (last + 1).max(now);
            match GLOBAL_TICK.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }

    /// Issue a fresh revision
    pub fn next(&self) -> Revision {
        encode_tick(self.tick())
    }
}

/// Encode a tick as a revision token
pub fn encode_tick(tick: u64) -> Revision {
    Revision::new(URL_SAFE_NO_PAD.encode(tick.to_be_bytes()))
}
