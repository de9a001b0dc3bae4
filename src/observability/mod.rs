//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config, fetch, monitor, lifecycle
//!     → tracing events (fields: url, failures, error, ...)
//!     → logging.rs subscriber
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Diagnostics stay on stderr; stdout carries only warnings and monitor messages
//! - Log level comes from `RUST_LOG`, defaulting to info for this crate

pub mod logging;
