//! Periodic server statistics monitor library.

pub mod config;
pub mod fetch;
pub mod lifecycle;
pub mod monitor;
pub mod observability;

pub use config::schema::MonitorConfig;
pub use fetch::HttpFetcher;
pub use lifecycle::Shutdown;
pub use monitor::Monitor;
