//! Debounced suggestion trigger for the search box

use crate::discovery::Coalescer;
use std::time::{Duration, Instant};

/// Immediate reaction to a keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Query became empty: show every entry and hide suggestions
    Reset,
    /// Query recorded; suggestions follow once it is stable
    Pending,
}

/// Reaction once the query has been stable for the debounce interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Compute and show suggestions for this query
    Suggest(String),
    /// Query too short: hide the suggestion list
    Hide,
}

/// Computes suggestions only for stable queries of a minimum length
#[derive(Debug, Clone)]
pub struct SuggestionTrigger {
    pending: Coalescer<String>,
    min_length: usize,
}

impl SuggestionTrigger {
    #[must_use]
    pub const fn new(debounce: Duration, min_length: usize) -> Self {
        Self {
            pending: Coalescer::new(debounce),
            min_length,
        }
    }

    /// Record the search box text at `now`
    pub fn input(&mut self, query: &str, now: Instant) -> InputAction {
        let query = query.trim();
        if query.is_empty() {
            self.pending.cancel();
            return InputAction::Reset;
        }
        self.pending.push(query.to_string(), now);
        InputAction::Pending
    }

    /// Decide what to do once the query has been quiet long enough
    pub fn poll(&mut self, now: Instant) -> Option<TriggerEvent> {
        self.pending.poll(now).map(|query| {
            if query.chars().count() >= self.min_length {
                TriggerEvent::Suggest(query)
            } else {
                TriggerEvent::Hide
            }
        })
    }

    /// Forget a pending query
    pub fn cancel(&mut self) {
        self.pending.cancel();
    }
}
