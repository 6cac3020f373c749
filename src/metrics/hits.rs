//! In-memory request hit counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter for requests passing through the static-file path.
///
/// Every operation is a single atomic instruction; callers never hold a lock
/// across operations, and no update is lost under concurrent increments.
/// Relaxed ordering is sufficient since the counter carries no
/// synchronization obligations of its own.
#[derive(Debug, Default)]
pub struct HitCounter {
    count: AtomicU64,
}

impl HitCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
        }
    }

    /// Add one hit.
    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the current value.
    ///
    /// The value is internally consistent but may be stale the instant it
    /// returns, relative to concurrent increments.
    pub fn load(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Reset to zero, returning the previous value.
    pub fn reset(&self) -> u64 {
        self.count.swap(0, Ordering::Relaxed)
    }
}
