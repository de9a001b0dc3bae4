//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the endpoint is an absolute http(s) URL
//! - Validate value ranges (interval > 0, error budget >= 1, sane thresholds)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MonitorConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::MonitorConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("server_url '{url}' is invalid: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("poll_interval_secs must be greater than 0")]
    ZeroInterval,

    #[error("max_consecutive_errors must be at least 1")]
    ZeroErrorBudget,

    #[error("threshold '{name}' must be a finite non-negative number, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.server_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidUrl {
            url: config.server_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidUrl {
            url: config.server_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.poll_interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    if config.max_consecutive_errors == 0 {
        errors.push(ValidationError::ZeroErrorBudget);
    }

    let t = &config.thresholds;
    for (name, value) in [
        ("max_load_average", t.max_load_average),
        ("memory_usage", t.memory_usage),
        ("disk_usage", t.disk_usage),
        ("network_usage", t.network_usage),
    ] {
        if !value.is_finite() || value < 0.0 {
            errors.push(ValidationError::InvalidThreshold { name, value });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
