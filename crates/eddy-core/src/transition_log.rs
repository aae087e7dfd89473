//! Change-only logging of values

use std::fmt::Debug;

/// Logs a value only when it differs from the value logged last
///
/// Ignored ticks and stale results leave the model as it was; those
/// repeats are not logged again.
#[derive(Debug, Clone)]
pub struct TransitionLog<T> {
    target: &'static str,
    last: Option<T>,
    recorded: u64,
}

impl<T: Clone + PartialEq + Debug> TransitionLog<T> {
    /// Create a log labelled with `target`
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            last: None,
            recorded: 0,
        }
    }

    /// Log `value` if it changed, returning whether it was logged
    pub fn record(&mut self, value: &T) -> bool {
        if self.last.as_ref() == Some(value) {
            return false;
        }

        tracing::debug!(unit = self.target, value = ?value, "transition");
        self.last = Some(value.clone());
        self.recorded += 1;
        true
    }

    /// The last value logged
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Number of values logged so far
    pub fn recorded(&self) -> u64 {
        self.recorded
    }
}
