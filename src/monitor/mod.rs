//! Statistics monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! runner.rs (Monitor loop)
//!     → Fetcher::fetch
//!         → failure → state.rs (count; stop at budget)
//!         → success → state.rs (reset)
//!                   → evaluator.rs (parse 7 fields, check thresholds)
//!                   → sink.rs (one line per warning)
//!     → timer.rs (wait one interval, cancellable)
//!     → repeat
//! ```
//!
//! # Design Decisions
//! - Evaluation is pure and independent of I/O
//! - Fetcher, Sleeper and OutputSink are injected so cycles run without a network or a clock
//! - Only transport failures feed the abort counter

pub mod evaluator;
pub mod runner;
pub mod sink;
pub mod state;
pub mod timer;
pub mod types;

pub use evaluator::{evaluate, evaluate_body, parse_body, RawSample, Warning};
pub use runner::Monitor;
pub use sink::{MemorySink, OutputSink, StdoutSink};
pub use state::FailureCounter;
pub use timer::{NoopSleeper, Sleeper, TokioSleeper};
pub use types::{CycleError, CycleOutcome, MonitorExit, FATAL_MESSAGE, INVALID_FORMAT_MESSAGE};
