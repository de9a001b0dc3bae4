//! Startup configuration resolution.

use std::path::Path;

use crate::config::{load_config, validate_config, ConfigError, MonitorConfig};

/// Resolve the configuration for this run.
///
/// With no path the built-in defaults are used. Either way the result is
/// validated before it is returned.
pub fn resolve_config(path: Option<&Path>) -> Result<MonitorConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let config = load_config(path)?;
            tracing::info!(path = %path.display(), "Configuration loaded from file");
            config
        }
        None => {
            let config = MonitorConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            config
        }
    };

    tracing::info!(
        server_url = %config.server_url,
        poll_interval_secs = config.poll_interval_secs,
        max_consecutive_errors = config.max_consecutive_errors,
        "Configuration resolved"
    );

    Ok(config)
}
