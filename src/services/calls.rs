//! Invocation counting shared by service instances.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts how many calls a service instance has handled.
///
/// Increments are atomic, so concurrent callers sharing one service observe
/// an exact total without taking a lock.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: AtomicUsize,
}

impl CallCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one invocation.
    pub fn increment(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of invocations recorded so far.
    pub fn registered_calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}
