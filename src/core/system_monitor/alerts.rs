//! Threshold evaluation.
//!
//! A reading at or above its threshold produces a critical alert. There is no
//! hysteresis: a metric that stays high alerts again on every tick.

use super::metrics::{AlertEvent, SampleReading};
use crate::core::notifier::Urgency;

/// Build the alert for `reading`, if it is at or above its threshold
pub fn evaluate(reading: &SampleReading, hostname: &str) -> Option<AlertEvent> {
    if !reading.exceeds_threshold() {
        return None;
    }

    Some(AlertEvent {
        hostname: hostname.to_string(),
        metric: reading.metric.clone(),
        current_percent: reading.current_percent,
        threshold_percent: reading.threshold_percent,
        urgency: Urgency::Critical,
    })
}
