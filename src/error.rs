use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::config::ValidationError;

/// Custom error type for the popmon library
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ValidationError),

    #[error("Filesystem error for '{}': {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),

    #[error("Input closed before the configuration was complete")]
    InputClosed,

    #[error("Interrupted by user")]
    Interrupted,

    #[error("Failed to set Ctrl+C handler: {0}")]
    Signal(String),
}

/// Result type alias for popmon
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Create a filesystem error for `path`
    pub fn filesystem<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        MonitorError::Filesystem {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        MonitorError::MetricCollection(msg.into())
    }

    pub fn signal<S: Into<String>>(msg: S) -> Self {
        MonitorError::Signal(msg.into())
    }

    /// True when the error came from a user interrupt rather than a failure
    pub fn is_interrupt(&self) -> bool {
        matches!(self, MonitorError::Interrupted)
    }
}
