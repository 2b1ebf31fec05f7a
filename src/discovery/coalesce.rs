//! Coalescing of rapid events
//!
//! Events pushed in quick succession replace each other; the latest one is
//! released once no new event arrived for the quiet period. Time is passed
//! in explicitly.

use std::time::{Duration, Instant};

/// Keeps the latest event until it has been quiet for `delay`
#[derive(Debug, Clone)]
pub struct Coalescer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Coalescer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record an event at `now`, replacing any pending one
    pub fn push(&mut self, event: T, now: Instant) {
        self.pending = Some((event, now));
    }

    /// Release the pending event if it has been quiet long enough
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let quiet = self
            .pending
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= self.delay);
        if quiet {
            self.pending.take().map(|(event, _)| event)
        } else {
            None
        }
    }

    /// Drop the pending event
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
