//! Monitoring thresholds and the fixed settings the monitor runs with.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Filesystem whose usage is checked on every tick
pub const DEFAULT_FILESYSTEM: &str = "/";

/// Directory holding the dated log files
pub const DEFAULT_LOG_DIR: &str = "/tmp";

/// File name prefix of the dated log files
pub const LOG_FILE_PREFIX: &str = "system_monitor_popup";

/// How long CPU usage is averaged over on each tick
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Desktop notification program
pub const NOTIFY_PROGRAM: &str = "notify-send";

/// Reasons a value typed at the configuration prompt is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("{0} threshold must be between 0 and 100.")]
    PercentOutOfRange(String),

    #[error("Interval must be a positive number.")]
    IntervalNotPositive,
}

/// Thresholds and check interval, fixed for the lifetime of the process.
///
/// Only constructible through [`ThresholdConfig::new`], so every value in
/// circulation has percentages in `[0, 100]` and a positive interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdConfig {
    cpu_percent: f64,
    ram_percent: f64,
    disk_percent: f64,
    interval_seconds: u64,
}

impl ThresholdConfig {
    pub fn new(
        cpu_percent: f64,
        ram_percent: f64,
        disk_percent: f64,
        interval_seconds: u64,
    ) -> Result<Self, ValidationError> {
        if interval_seconds == 0 {
            return Err(ValidationError::IntervalNotPositive);
        }

        Ok(Self {
            cpu_percent: check_percent(cpu_percent, "CPU")?,
            ram_percent: check_percent(ram_percent, "RAM")?,
            disk_percent: check_percent(disk_percent, "Disk")?,
            interval_seconds,
        })
    }

    pub fn cpu_percent(&self) -> f64 {
        self.cpu_percent
    }

    pub fn ram_percent(&self) -> f64 {
        self.ram_percent
    }

    pub fn disk_percent(&self) -> f64 {
        self.disk_percent
    }

    pub fn interval_seconds(&self) -> u64 {
        self.interval_seconds
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

impl fmt::Display for ThresholdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU > {}%, RAM > {}%, Disk ('{}') > {}%",
            Percent(self.cpu_percent),
            Percent(self.ram_percent),
            DEFAULT_FILESYSTEM,
            Percent(self.disk_percent)
        )
    }
}

/// Threshold as typed back to the user: whole numbers keep one decimal (`80.0`)
struct Percent(f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn check_percent(value: f64, label: &str) -> Result<f64, ValidationError> {
    // NaN fails the range check as well
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::PercentOutOfRange(label.to_string()))
    }
}

/// Parse a threshold typed by the user, e.g. `"80.5"`
pub fn parse_percent(input: &str, label: &str) -> Result<f64, ValidationError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;
    check_percent(value, label)
}

/// Parse an interval in whole seconds typed by the user
pub fn parse_interval(input: &str) -> Result<u64, ValidationError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;
    if value > 0 {
        Ok(value as u64)
    } else {
        Err(ValidationError::IntervalNotPositive)
    }
}
