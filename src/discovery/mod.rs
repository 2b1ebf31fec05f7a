//! Boundary with the extraction collaborator
//!
//! The engine only ever sees entry snapshots. This module holds the snapshot
//! types, the [`ContentSource`] seam, the bounded polling used while an
//! authoring environment is still materializing entries, and the coalescing
//! of content-change notifications into full rebuilds.

pub mod coalesce;
pub mod error;
pub mod retry;
pub mod snapshot;
pub mod traits;

pub use coalesce::Coalescer;
pub use error::SnapshotError;
pub use retry::{RetryOutcome, RetryPolicy};
pub use snapshot::{RawEntry, decode_snapshot, entries_from_raw};
pub use traits::ContentSource;

use std::time::{Duration, Instant};
use tracing::debug;

/// Poll a source until its entry count settles
///
/// The first snapshot is read immediately. Every retry re-reads the source
/// and keeps the newer snapshot when it holds more entries. Once
/// `settle_after` polls have passed, an unchanged count ends the loop.
/// Running out of attempts keeps whatever was found.
pub fn settle_snapshot<S, W>(
    source: &mut S,
    policy: &RetryPolicy,
    settle_after: u32,
    sleep: W,
) -> (Vec<RawEntry>, RetryOutcome)
where
    S: ContentSource + ?Sized,
    W: FnMut(Duration),
{
    let mut current = source.snapshot();
    let outcome = policy.retry(
        |attempt| {
            let updated = source.snapshot();
            let stable = updated.len() == current.len();
            if updated.len() > current.len() {
                current = updated;
            }
            attempt >= settle_after && stable
        },
        sleep,
    );

    debug!(
        entries = current.len(),
        attempts = outcome.attempts_used,
        settled = outcome.succeeded,
        "content snapshot settled"
    );
    (current, outcome)
}

/// Notification from the authoring integration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    /// Host content changed; carries the new snapshot
    Changed(Vec<RawEntry>),
}

/// Coalesces content-change events into rebuild requests
///
/// Only the latest snapshot of a burst is released, once the burst has been
/// quiet for the configured delay.
#[derive(Debug, Clone)]
pub struct ContentWatcher {
    pending: Coalescer<Vec<RawEntry>>,
}

impl ContentWatcher {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            pending: Coalescer::new(delay),
        }
    }

    /// Record a content event
    pub fn notify(&mut self, event: ContentEvent, now: Instant) {
        let ContentEvent::Changed(snapshot) = event;
        self.pending.push(snapshot, now);
    }

    /// Snapshot to rebuild from, once the burst has settled
    pub fn poll(&mut self, now: Instant) -> Option<Vec<RawEntry>> {
        self.pending.poll(now)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }
}
