//! Ctrl+C handling and the guaranteed shutdown log line.

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::time::Duration;

use super::event_log::EventLogger;
use crate::error::{MonitorError, Result};

/// Shared interrupt flag with an interruptible sleep.
///
/// Cloning is cheap; all clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signal triggered by Ctrl+C. Can only be installed once per process.
    pub fn install() -> Result<Self> {
        let signal = Self::new();
        let handler_signal = signal.clone();

        ctrlc::set_handler(move || {
            handler_signal.trigger();
        })
        .map_err(|e| MonitorError::signal(e.to_string()))?;

        Ok(signal)
    }

    pub fn trigger(&self) {
        let (lock, cvar) = &*self.inner;
        *lock.lock() = true;
        cvar.notify_all();
    }

    pub fn is_triggered(&self) -> bool {
        *self.inner.0.lock()
    }

    /// `Err(Interrupted)` once the signal has fired
    pub fn check(&self) -> Result<()> {
        if self.is_triggered() {
            Err(MonitorError::Interrupted)
        } else {
            Ok(())
        }
    }

    /// Sleep for `timeout` or until triggered, whichever comes first.
    ///
    /// Returns `true` when woken by the signal.
    pub fn wait(&self, timeout: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut triggered = lock.lock();
        if !*triggered {
            cvar.wait_while_for(&mut triggered, |t| !*t, timeout);
        }
        *triggered
    }
}

/// Logs the shutdown message when dropped, on every exit path.
pub struct ShutdownGuard<'a> {
    logger: &'a EventLogger,
}

impl<'a> ShutdownGuard<'a> {
    pub fn new(logger: &'a EventLogger) -> Self {
        Self { logger }
    }
}

impl Drop for ShutdownGuard<'_> {
    fn drop(&mut self) {
        self.logger.log("System Monitor shutting down.");
    }
}
