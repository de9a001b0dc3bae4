//! Cycle results and error definitions.

use thiserror::Error;

use crate::fetch::FetchError;
use crate::monitor::evaluator::Warning;

/// Printed once when the consecutive transport failure budget runs out.
pub const FATAL_MESSAGE: &str = "Unable to fetch server statistic.";

/// Printed when the body does not split into the expected field count.
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid data format received.";

/// Why a polling cycle produced no sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CycleError {
    /// Connection failure or non-200 status. Counted toward the abort budget.
    #[error("fetch failed: {0}")]
    Transport(FetchError),

    /// Headers arrived but the body could not be read. Not counted.
    #[error("error reading response body: {0}")]
    Read(String),

    /// Body did not contain exactly seven fields. Not counted.
    #[error("expected 7 fields, got {fields}")]
    Format { fields: usize },
}

impl CycleError {
    /// True only for the class that feeds the failure counter.
    pub fn counts_toward_abort(&self) -> bool {
        matches!(self, CycleError::Transport(_))
    }
}

/// Result of a single polling cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// A sample was evaluated; the warnings (possibly none) were printed.
    Evaluated(Vec<Warning>),
    /// The cycle failed but the monitor keeps polling.
    Skipped(CycleError),
    /// The failure budget is spent and the fatal message was printed.
    Exhausted,
}

/// Why the monitor loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorExit {
    FetchBudgetExhausted,
    Shutdown,
}
