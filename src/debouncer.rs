//! Debounce gate for search input.
//!
//! One pending timer per input field: every keystroke replaces the pending
//! query and restarts the delay, so only the last keystroke within the delay
//! window reaches the search pipeline. The host drives the clock by polling
//! [`DebouncedQuery::take_ready`].

use std::time::{Duration, Instant};

/// Tracks the latest query typed into one input field and when it should be
/// released to the pipeline.
#[derive(Debug, Clone)]
pub struct DebouncedQuery {
    delay: Duration,
    last_keystroke: Option<Instant>,
    pending: Option<String>,
}

impl DebouncedQuery {
    /// Create a debouncer with the delay in milliseconds.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_keystroke: None,
            pending: None,
        }
    }

    /// Record a keystroke. Any previously pending query is replaced and the
    /// delay restarts.
    pub fn push(&mut self, query: impl Into<String>) {
        self.pending = Some(query.into());
        self.last_keystroke = Some(Instant::now());
    }

    /// Take the pending query if the delay has elapsed since the last
    /// keystroke. Returns `None` while still inside the delay window or when
    /// nothing is pending.
    pub fn take_ready(&mut self) -> Option<String> {
        let last = self.last_keystroke?;
        if last.elapsed() >= self.delay {
            self.last_keystroke = None;
            self.pending.take()
        } else {
            None
        }
    }

    /// Cancel the pending query without releasing it.
    pub fn cancel(&mut self) {
        self.last_keystroke = None;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending query is released, `None` when nothing
    /// is pending.
    pub fn time_remaining(&self) -> Option<Duration> {
        let last = self.last_keystroke?;
        self.pending.as_ref()?;
        Some(self.delay.saturating_sub(last.elapsed()))
    }
}
