//! Consecutive transport failure tracking.
//!
//! # State Transitions
//! ```text
//! any successful fetch        → count = 0
//! transport/status failure    → count += 1
//! count >= max_consecutive    → monitor terminates
//! ```

/// Counts consecutive fetch failures. Owned by the monitor loop alone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FailureCounter {
    consecutive: u32,
}

impl FailureCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current number of consecutive failures.
    pub fn count(&self) -> u32 {
        self.consecutive
    }

    /// Report a failed fetch. Returns the new count.
    pub fn record_failure(&mut self) -> u32 {
        self.consecutive = self.consecutive.saturating_add(1);
        self.consecutive
    }

    /// Report a successful fetch. Returns true if a failure streak was cleared.
    pub fn reset(&mut self) -> bool {
        let had_failures = self.consecutive > 0;
        self.consecutive = 0;
        had_failures
    }

    /// True once the streak has reached `max_consecutive`.
    pub fn is_exhausted(&self, max_consecutive: u32) -> bool {
        self.consecutive >= max_consecutive
    }
}
