use chrono::{DateTime, Local};
use std::fmt;

use crate::core::notifier::{NotifyOutcome, Urgency};

/// One of the three monitored resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricKind {
    Cpu,
    Ram,
    Disk(String), // Mount path
}

impl MetricKind {
    /// Short label used in alert text, e.g. `"CPU"`
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Cpu => "CPU",
            MetricKind::Ram => "RAM",
            MetricKind::Disk(_) => "Disk",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricKind::Disk(path) => write!(f, "Disk Usage for '{}'", path),
            other => write!(f, "{} Usage", other.label()),
        }
    }
}

/// A single metric value taken during a tick
#[derive(Debug, Clone)]
pub struct SampleReading {
    pub metric: MetricKind,
    pub current_percent: f64,
    pub threshold_percent: f64,
    pub timestamp: DateTime<Local>,
}

impl SampleReading {
    pub fn new(metric: MetricKind, current_percent: f64, threshold_percent: f64) -> Self {
        Self {
            metric,
            current_percent,
            threshold_percent,
            timestamp: Local::now(),
        }
    }

    /// Inclusive: a reading equal to its threshold is alert-worthy
    pub fn exceeds_threshold(&self) -> bool {
        self.current_percent >= self.threshold_percent
    }

    /// Line written to the event log for this reading
    pub fn log_message(&self) -> String {
        format!("Current {}: {:.2}%", self.metric, self.current_percent)
    }
}

/// Alert derived from a reading over its threshold
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEvent {
    pub hostname: String,
    pub metric: MetricKind,
    pub current_percent: f64,
    pub threshold_percent: f64,
    pub urgency: Urgency,
}

impl AlertEvent {
    pub fn summary(&self) -> String {
        match &self.metric {
            MetricKind::Disk(path) => {
                format!("ALERT: High Disk Usage on {} ({})", self.hostname, path)
            }
            other => format!("ALERT: High {} Usage on {}", other.label(), self.hostname),
        }
    }

    pub fn body(&self) -> String {
        let subject = match &self.metric {
            MetricKind::Disk(path) => format!("Disk usage for '{}'", path),
            other => format!("{} usage", other.label()),
        };
        format!(
            "{} is at {:.2}%, exceeding threshold of {:.2}%.",
            subject, self.current_percent, self.threshold_percent
        )
    }
}

/// Result of checking one metric during a tick
#[derive(Debug, Clone)]
pub struct MetricCheck {
    pub reading: SampleReading,
    /// `None` when the reading stayed under its threshold
    pub notification: Option<NotifyOutcome>,
}

impl MetricCheck {
    pub fn alerted(&self) -> bool {
        self.notification.is_some()
    }
}

/// Everything one tick observed, in CPU, RAM, Disk order
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub checks: Vec<MetricCheck>,
}

impl TickReport {
    pub fn alert_count(&self) -> usize {
        self.checks.iter().filter(|c| c.alerted()).count()
    }

    pub fn check_for(&self, label: &str) -> Option<&MetricCheck> {
        self.checks.iter().find(|c| c.reading.metric.label() == label)
    }
}
