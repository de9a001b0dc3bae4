//! The polling loop.
//!
//! # Responsibilities
//! - Fetch the statistics line on a fixed interval
//! - Track consecutive transport failures and stop once the budget is spent
//! - Hand good bodies to the evaluator and print its warnings
//!
//! # Design Decisions
//! - Strictly sequential: one cycle finishes before the next wait starts
//! - Any successful fetch clears the failure streak, even if the body is unusable
//! - Read and format failures are reported but never counted

use tokio::sync::broadcast;

use crate::config::MonitorConfig;
use crate::fetch::{FetchError, Fetcher};
use crate::monitor::evaluator::evaluate_body;
use crate::monitor::sink::OutputSink;
use crate::monitor::state::FailureCounter;
use crate::monitor::timer::Sleeper;
use crate::monitor::types::{
    CycleError, CycleOutcome, MonitorExit, FATAL_MESSAGE, INVALID_FORMAT_MESSAGE,
};

/// Polls one statistics endpoint until the failure budget runs out or shutdown.
pub struct Monitor<F, S, O> {
    config: MonitorConfig,
    fetcher: F,
    sleeper: S,
    sink: O,
    failures: FailureCounter,
}

impl<F, S, O> Monitor<F, S, O>
where
    F: Fetcher,
    S: Sleeper,
    O: OutputSink,
{
    pub fn new(config: MonitorConfig, fetcher: F, sleeper: S, sink: O) -> Self {
        Self {
            config,
            fetcher,
            sleeper,
            sink,
            failures: FailureCounter::new(),
        }
    }

    /// Current consecutive transport failure count.
    pub fn failures(&self) -> u32 {
        self.failures.count()
    }

    pub fn sink(&self) -> &O {
        &self.sink
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Run cycles until the failure budget is spent or a shutdown arrives.
    ///
    /// Shutdown is observed only while waiting between cycles. A closed
    /// shutdown channel counts as a shutdown.
    pub async fn run(&mut self, mut shutdown: broadcast::Receiver<()>) -> MonitorExit {
        tracing::info!(
            url = %self.config.server_url,
            interval_secs = self.config.poll_interval_secs,
            max_consecutive_errors = self.config.max_consecutive_errors,
            "Stats monitor starting"
        );

        let interval = self.config.poll_interval();

        loop {
            if self.cycle().await == CycleOutcome::Exhausted {
                return MonitorExit::FetchBudgetExhausted;
            }

            tokio::select! {
                biased;
                _ = shutdown.recv() => {
                    tracing::info!("Stats monitor received shutdown signal, exiting loop");
                    return MonitorExit::Shutdown;
                }
                _ = self.sleeper.sleep(interval) => {}
            }
        }
    }

    /// Perform one fetch → evaluate → print pass, without the trailing wait.
    pub async fn cycle(&mut self) -> CycleOutcome {
        let body = match self.fetcher.fetch(&self.config.server_url).await {
            Ok(body) => {
                self.clear_failures();
                body
            }
            Err(e) if e.counts_toward_abort() => return self.fetch_failed(e),
            Err(e) => {
                // Status was 200, so the streak still ends here.
                self.clear_failures();
                tracing::warn!(error = %e, "Failed to read response body");
                self.sink.line(&format!("Error reading response body: {}", e));
                return CycleOutcome::Skipped(CycleError::Read(e.to_string()));
            }
        };

        match evaluate_body(&body, &self.config.thresholds) {
            Ok(warnings) => {
                tracing::debug!(warnings = warnings.len(), "Sample evaluated");
                for warning in &warnings {
                    self.sink.line(&warning.to_string());
                }
                CycleOutcome::Evaluated(warnings)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected statistics line");
                self.sink.line(INVALID_FORMAT_MESSAGE);
                CycleOutcome::Skipped(e)
            }
        }
    }

    fn fetch_failed(&mut self, error: FetchError) -> CycleOutcome {
        let failures = self.failures.record_failure();
        let max = self.config.max_consecutive_errors;

        if self.failures.is_exhausted(max) {
            tracing::error!(failures, error = %error, "Fetch failure budget exhausted, stopping");
            self.sink.line(FATAL_MESSAGE);
            return CycleOutcome::Exhausted;
        }

        tracing::warn!(failures, max, error = %error, "Failed to fetch server statistics");
        CycleOutcome::Skipped(CycleError::Transport(error))
    }

    fn clear_failures(&mut self) {
        if self.failures.reset() {
            tracing::info!("Statistics endpoint reachable again, failure count reset");
        }
    }
}
