//! Statistics fetch subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor loop
//!     → Fetcher::fetch(url)
//!     → HttpFetcher: GET url (fixed timeout)
//!         → 200 + readable body → Ok(body)
//!         → connect error / timeout → FetchError::Transport
//!         → any other status → FetchError::Status
//!         → body read error → FetchError::Body
//! ```
//!
//! # Design Decisions
//! - The monitor only sees the `Fetcher` trait; tests inject scripted fetchers
//! - Transport and status failures count toward the abort budget, body failures do not
//! - The request timeout is a constant, not configuration

pub mod client;

pub use client::{FetchError, Fetcher, HttpFetcher, FETCH_TIMEOUT};
