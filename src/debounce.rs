use std::sync::atomic::{AtomicU64, Ordering};

/// Coalesces bursts of events so only the last one takes effect.
///
/// Each event takes a ticket; when its delay elapses the handler checks
/// whether the ticket is still the newest and drops the work otherwise.
#[derive(Debug, Default)]
pub struct Debouncer {
    latest: AtomicU64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}
