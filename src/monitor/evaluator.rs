//! Statistics line parsing and threshold evaluation.
//!
//! # Responsibilities
//! - Split a raw body into the seven positional fields
//! - Convert fields to numbers (unparsable fields read as 0.0)
//! - Compare each ratio against its threshold and build warnings
//!
//! # Design Decisions
//! - Pure functions only; printing belongs to the runner
//! - Thresholds are exclusive: equal values never warn
//! - Zero totals are not special-cased; NaN/inf flow into the messages

use std::fmt;

use crate::config::ThresholdConfig;
use crate::monitor::types::CycleError;

/// Number of comma-separated fields in a statistics line.
pub const FIELD_COUNT: usize = 7;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One parsed statistics line, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawSample {
    pub load_average: f64,
    pub total_memory: f64,
    pub used_memory: f64,
    pub total_disk: f64,
    pub used_disk: f64,
    pub total_network: f64,
    pub used_network: f64,
}

impl RawSample {
    /// Build a sample from textual fields. A field that is not a number reads as 0.0.
    pub fn from_fields(fields: &[&str; FIELD_COUNT]) -> Self {
        let [load_average, total_memory, used_memory, total_disk, used_disk, total_network, used_network] =
            fields.map(parse_field);

        Self {
            load_average,
            total_memory,
            used_memory,
            total_disk,
            used_disk,
            total_network,
            used_network,
        }
    }

    pub fn memory_usage(&self) -> f64 {
        self.used_memory / self.total_memory
    }

    pub fn disk_usage(&self) -> f64 {
        self.used_disk / self.total_disk
    }

    pub fn network_usage(&self) -> f64 {
        self.used_network / self.total_network
    }
}

/// Renders the sample back into its wire form.
impl fmt::Display for RawSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{}",
            self.load_average,
            self.total_memory,
            self.used_memory,
            self.total_disk,
            self.used_disk,
            self.total_network,
            self.used_network
        )
    }
}

fn parse_field(raw: &str) -> f64 {
    raw.parse().unwrap_or(0.0)
}

/// A single threshold breach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    Load { load_average: f64 },
    /// `usage` is the used/total ratio.
    Memory { usage: f64 },
    /// `free_mb` is total minus used, in megabytes.
    Disk { free_mb: f64 },
    /// `used_mbits` is the used bandwidth in Mbit/s. The message calls it "available".
    Network { used_mbits: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Load { load_average } => {
                write!(f, "Load Average is too high: {:.0}", load_average)
            }
            Warning::Memory { usage } => {
                write!(f, "Memory usage too high: {:.0}%", usage * 100.0)
            }
            Warning::Disk { free_mb } => {
                write!(f, "Free disk space is too low: {:.0} Mb left", free_mb)
            }
            Warning::Network { used_mbits } => {
                write!(f, "Network bandwidth usage high: {:.0} Mbit/s available", used_mbits)
            }
        }
    }
}

/// Split a response body into a sample.
pub fn parse_body(body: &str) -> Result<RawSample, CycleError> {
    let fields: Vec<&str> = body.trim().split(',').collect();
    let fields: [&str; FIELD_COUNT] = fields
        .try_into()
        .map_err(|fields: Vec<&str>| CycleError::Format { fields: fields.len() })?;

    Ok(RawSample::from_fields(&fields))
}

/// Evaluate a sample. Warnings come back in load, memory, disk, network order.
pub fn evaluate(sample: &RawSample, thresholds: &ThresholdConfig) -> Vec<Warning> {
    let mut warnings = Vec::with_capacity(4);

    if sample.load_average > thresholds.max_load_average {
        warnings.push(Warning::Load {
            load_average: sample.load_average,
        });
    }

    let memory_usage = sample.memory_usage();
    if memory_usage > thresholds.memory_usage {
        warnings.push(Warning::Memory {
            usage: memory_usage,
        });
    }

    if sample.disk_usage() > thresholds.disk_usage {
        warnings.push(Warning::Disk {
            free_mb: (sample.total_disk - sample.used_disk) / BYTES_PER_MB,
        });
    }

    if sample.network_usage() > thresholds.network_usage {
        warnings.push(Warning::Network {
            used_mbits: sample.used_network / 8.0 / BYTES_PER_MB,
        });
    }

    warnings
}

/// Parse and evaluate a raw body in one step.
pub fn evaluate_body(body: &str, thresholds: &ThresholdConfig) -> Result<Vec<Warning>, CycleError> {
    parse_body(body).map(|sample| evaluate(&sample, thresholds))
}
