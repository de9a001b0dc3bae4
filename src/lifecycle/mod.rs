//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve config (file or built-in) → Validate → hand to monitor
//!
//! Shutdown (shutdown.rs):
//!     Trigger → monitor observes it during its next wait → Exit
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl-C) → Trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bad configuration stops the process before the first fetch
//! - Shutdown never interrupts a cycle in progress

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
