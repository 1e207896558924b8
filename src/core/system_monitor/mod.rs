//! System monitoring core functionality.
//!
//! This module samples CPU, memory and disk usage, compares each value with
//! its threshold and raises desktop alerts for the ones that are exceeded.

pub mod alerts;
mod collector;
mod metrics;
mod monitor;

pub use alerts::evaluate;
pub use collector::{MetricsProvider, SysinfoProvider};
pub use metrics::{AlertEvent, MetricCheck, MetricKind, SampleReading, TickReport};
pub use monitor::Monitor;
