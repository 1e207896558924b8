//! One monitoring pass over CPU, RAM and disk.

use std::path::PathBuf;
use std::time::Duration;

use super::alerts::evaluate;
use super::collector::MetricsProvider;
use super::metrics::{MetricCheck, MetricKind, SampleReading, TickReport};
use crate::core::config::{ThresholdConfig, CPU_SAMPLE_WINDOW, DEFAULT_FILESYSTEM};
use crate::core::event_log::EventLogger;
use crate::core::notifier::Notifier;
use crate::error::Result;

/// Samples the three metrics, logs them and dispatches alerts.
///
/// Holds no state between ticks besides its collaborators.
pub struct Monitor<P, N> {
    provider: P,
    notifier: N,
    logger: EventLogger,
    hostname: String,
    disk_path: PathBuf,
    sample_window: Duration,
}

impl<P: MetricsProvider, N: Notifier> Monitor<P, N> {
    pub fn new(provider: P, notifier: N, logger: EventLogger) -> Self {
        let hostname = provider.hostname();
        Self {
            provider,
            notifier,
            logger,
            hostname,
            disk_path: PathBuf::from(DEFAULT_FILESYSTEM),
            sample_window: CPU_SAMPLE_WINDOW,
        }
    }

    pub fn with_hostname<S: Into<String>>(mut self, hostname: S) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_disk_path<T: Into<PathBuf>>(mut self, path: T) -> Self {
        self.disk_path = path.into();
        self
    }

    pub fn with_sample_window(mut self, window: Duration) -> Self {
        self.sample_window = window;
        self
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run one tick in CPU, RAM, Disk order.
    ///
    /// A failed notification does not stop the tick. A disk read failure is
    /// returned after CPU and RAM have already been handled.
    pub fn run_tick(&mut self, config: &ThresholdConfig) -> Result<TickReport> {
        let mut report = TickReport::default();

        let cpu = self.provider.cpu_percent(self.sample_window);
        report
            .checks
            .push(self.check(MetricKind::Cpu, cpu, config.cpu_percent()));

        let ram = self.provider.memory_percent();
        report
            .checks
            .push(self.check(MetricKind::Ram, ram, config.ram_percent()));

        let disk = self.provider.disk_percent(&self.disk_path)?;
        let disk_kind = MetricKind::Disk(self.disk_path.display().to_string());
        report
            .checks
            .push(self.check(disk_kind, disk, config.disk_percent()));

        Ok(report)
    }

    fn check(&self, metric: MetricKind, current: f64, threshold: f64) -> MetricCheck {
        let reading = SampleReading::new(metric, current, threshold);
        self.logger.log(reading.log_message());

        let notification = evaluate(&reading, &self.hostname).map(|alert| {
            self.notifier
                .notify(&alert.summary(), &alert.body(), alert.urgency)
        });

        MetricCheck {
            reading,
            notification,
        }
    }
}
