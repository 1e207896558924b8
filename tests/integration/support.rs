// Test doubles shared by the integration tests

use popmon::core::event_log::EventLogger;
use popmon::core::notifier::{Notifier, NotifyOutcome, Urgency};
use popmon::core::shutdown::ShutdownSignal;
use popmon::core::system_monitor::MetricsProvider;
use popmon::error::{MonitorError, Result};
use std::cell::RefCell;
use std::io::{self, Read};
use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::time::Duration;

/// Provider returning fixed readings
pub struct FakeProvider {
    pub cpu: f64,
    pub ram: f64,
    /// `None` makes the disk read fail like an unmounted path
    pub disk: Option<f64>,
    /// Fire this signal during the CPU read of the given tick (1-based)
    pub interrupt_on_tick: Option<(usize, ShutdownSignal)>,
    pub ticks: usize,
}

impl FakeProvider {
    pub fn new(cpu: f64, ram: f64, disk: Option<f64>) -> Self {
        Self {
            cpu,
            ram,
            disk,
            interrupt_on_tick: None,
            ticks: 0,
        }
    }

    pub fn interrupt_on(mut self, tick: usize, signal: ShutdownSignal) -> Self {
        self.interrupt_on_tick = Some((tick, signal));
        self
    }
}

impl MetricsProvider for FakeProvider {
    fn hostname(&self) -> String {
        "fakehost".to_string()
    }

    fn cpu_percent(&mut self, _sample_window: Duration) -> f64 {
        self.ticks += 1;
        if let Some((tick, signal)) = &self.interrupt_on_tick {
            if *tick == self.ticks {
                signal.trigger();
            }
        }
        self.cpu
    }

    fn memory_percent(&mut self) -> f64 {
        self.ram
    }

    fn disk_percent(&mut self, path: &Path) -> Result<f64> {
        self.disk
            .ok_or_else(|| MonitorError::filesystem(path, "not a mounted filesystem"))
    }
}

/// Notifier recording every call and answering with a fixed outcome
pub struct RecordingNotifier {
    pub calls: RefCell<Vec<(String, String, Urgency)>>,
    pub outcome: NotifyOutcome,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::answering(NotifyOutcome::Sent)
    }

    pub fn answering(outcome: NotifyOutcome) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            outcome,
        }
    }

    pub fn summaries(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(s, _, _)| s.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, summary: &str, body: &str, urgency: Urgency) -> NotifyOutcome {
        self.calls
            .borrow_mut()
            .push((summary.to_string(), body.to_string(), urgency));
        self.outcome.clone()
    }
}

/// Input that never produces a line, like a terminal nobody types into.
///
/// Reads block until the returned sender is dropped, then report end of input.
pub struct StalledInput(mpsc::Receiver<()>);

impl Read for StalledInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        let _ = self.0.recv();
        Ok(0)
    }
}

pub fn stalled_input() -> (Sender<()>, StalledInput) {
    let (sender, receiver) = mpsc::channel();
    (sender, StalledInput(receiver))
}

/// Contents of today's log file, or an empty string if nothing was written
pub fn read_log(logger: &EventLogger) -> String {
    let path = logger.path_for(chrono::Local::now().date_naive());
    std::fs::read_to_string(path).unwrap_or_default()
}

/// Messages of today's log file with the timestamps stripped
pub fn log_messages(logger: &EventLogger) -> Vec<String> {
    read_log(logger)
        .lines()
        .map(|line| {
            line.split_once(" - ")
                .map(|(_, message)| message.to_string())
                .unwrap_or_default()
        })
        .collect()
}
