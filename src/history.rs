//! Bounded newest-first signal history
//!
//! Cross-cycle retention lives here and only here: each cycle's signals are
//! prepended (keeping their intra-cycle order) and the feed is truncated to
//! the most recent entries. The consumer owns an instance; there is no
//! process-wide state.

use std::collections::VecDeque;

use crate::types::Signal;

/// Default number of signals to keep
pub const DEFAULT_CAPACITY: usize = 10;

/// Rolling signal feed, newest first
#[derive(Debug, Clone)]
pub struct SignalHistory {
    signals: VecDeque<Signal>,
    capacity: usize,
}

impl Default for SignalHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SignalHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            signals: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend one cycle's signals and truncate to capacity.
    ///
    /// Signals keep the order they were emitted in, ahead of everything
    /// already held.
    pub fn record(&mut self, cycle_signals: Vec<Signal>) {
        for signal in cycle_signals.into_iter().rev() {
            self.signals.push_front(signal);
        }
        self.signals.truncate(self.capacity);
    }

    /// Newest-first iteration over the retained feed
    pub fn iter(&self) -> impl Iterator<Item = &Signal> {
        self.signals.iter()
    }

    /// Most recent signal, if any
    pub fn latest(&self) -> Option<&Signal> {
        self.signals.front()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
