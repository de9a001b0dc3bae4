//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! MonitorConfig::default() (built-in polling constants)
//!     or config file (TOML)
//!         → loader.rs (parse & deserialize)
//!         → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → passed by value into the monitor loop
//! ```
//!
//! # Design Decisions
//! - Config is constructed once at startup and never mutated
//! - All fields have defaults; an empty file equals the built-in constants
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::MonitorConfig;
pub use schema::ThresholdConfig;
pub use validation::{validate_config, ValidationError};
