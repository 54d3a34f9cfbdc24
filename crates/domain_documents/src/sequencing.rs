//! Request sequencing
//!
//! Listing requests may overlap and complete out of order. Each request is
//! tagged with a monotonically increasing sequence number when it starts;
//! only the response carrying the most recent number may be applied. The
//! number must be issued together with reading the request's inputs, under
//! the same lock, so number order matches input order.

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// A value tagged with the sequence number of the request that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequenced<T> {
    pub seq: u64,
    pub value: T,
}

impl<T> Sequenced<T> {
    pub fn new(seq: u64, value: T) -> Self {
        Self { seq, value }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sequenced<U> {
        Sequenced {
            seq: self.seq,
            value: f(self.value),
        }
    }
}

/// Hands out sequence numbers and tells stale responses apart
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request and returns its sequence number (first is 1)
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Most recently issued number, 0 before any request
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        self.latest() == seq
    }

    /// Unwraps the value if no newer request was started since, else drops it
    pub fn accept<T>(&self, sequenced: Sequenced<T>) -> Option<T> {
        if self.is_latest(sequenced.seq) {
            Some(sequenced.value)
        } else {
            debug!(seq = sequenced.seq, latest = self.latest(), "Discarding stale response");
            None
        }
    }
}
