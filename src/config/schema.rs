//! Configuration schema definitions.
//!
//! The defaults below are the monitor's built-in constants. A process
//! started without a config file uses them unchanged.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the stats monitor.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MonitorConfig {
    /// Endpoint returning the comma-delimited statistics line.
    pub server_url: String,

    /// Seconds to wait between polling cycles.
    pub poll_interval_secs: u64,

    /// Consecutive transport failures that terminate the monitor.
    pub max_consecutive_errors: u32,

    /// Warning thresholds.
    pub thresholds: ThresholdConfig,
}

impl MonitorConfig {
    /// Polling interval as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            server_url: "http://srv.msk01.gigacorp.local/_stats".to_string(),
            poll_interval_secs: 10,
            max_consecutive_errors: 3,
            thresholds: ThresholdConfig::default(),
        }
    }
}

/// Threshold configuration. Every comparison is strictly greater-than.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Load average above which a warning is emitted.
    pub max_load_average: f64,

    /// Used/total memory ratio (0.0 - 1.0).
    pub memory_usage: f64,

    /// Used/total disk ratio (0.0 - 1.0).
    pub disk_usage: f64,

    /// Used/total network bandwidth ratio (0.0 - 1.0).
    pub network_usage: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            max_load_average: 30.0,
            memory_usage: 0.8,
            disk_usage: 0.9,
            network_usage: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MonitorConfig::default();
        assert_eq!(config.server_url, "http://srv.msk01.gigacorp.local/_stats");
        assert_eq!(config.poll_interval(), Duration::from_secs(10));
        assert_eq!(config.max_consecutive_errors, 3);
        assert_eq!(config.thresholds.max_load_average, 30.0);
        assert_eq!(config.thresholds.memory_usage, 0.8);
        assert_eq!(config.thresholds.disk_usage, 0.9);
        assert_eq!(config.thresholds.network_usage, 0.9);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: MonitorConfig = toml::from_str(
            r#"
            poll_interval_secs = 2

            [thresholds]
            memory_usage = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.poll_interval_secs, 2);
        assert_eq!(config.max_consecutive_errors, 3);
        assert_eq!(config.thresholds.memory_usage, 0.5);
        assert_eq!(config.thresholds.disk_usage, 0.9);
    }
}
