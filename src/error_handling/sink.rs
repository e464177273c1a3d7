//! Run-scoped error accumulator.

use log::error;

/// Append-only list of failure messages for one run.
///
/// Every recorded message is also logged at error level at the moment it is
/// recorded. No deduplication: recording the same message twice keeps both.
///
/// A sink is an owned value. Entries are checked with their own sink, which
/// the runner then merges into the run's sink with [`ErrorSink::absorb`] so the
/// final list follows source and entry order.
#[derive(Debug, Default, Clone)]
pub struct ErrorSink {
    errors: Vec<String>,
}

impl ErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs `message` at error level and appends it.
    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("{message}");
        self.errors.push(message);
    }

    /// Appends everything `other` recorded, without logging it again.
    pub fn absorb(&mut self, other: ErrorSink) {
        self.errors.extend(other.errors);
    }

    /// All recorded messages in recording order.
    pub fn all(&self) -> &[String] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the sink, returning the recorded messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}
