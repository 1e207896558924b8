//! Startup, the tick/sleep loop and the top-level error handler.

use std::io::Write;

use super::config::ThresholdConfig;
use super::event_log::EventLogger;
use super::notifier::Notifier;
use super::shutdown::{ShutdownGuard, ShutdownSignal};
use super::system_monitor::{MetricsProvider, Monitor};
use crate::error::{MonitorError, Result};
use crate::ui::prompts::ConfigPrompt;

/// How a monitoring session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Interrupted,
    Failed(String),
}

/// Run a full session: prompt for thresholds, then monitor until stopped.
///
/// Errors never escape; they are logged and turned into the returned
/// [`SessionEnd`]. The shutdown line is logged on every path.
pub fn run_session<W, P, N>(
    prompt: &mut ConfigPrompt<W>,
    monitor: &mut Monitor<P, N>,
    logger: &EventLogger,
    signal: &ShutdownSignal,
) -> SessionEnd
where
    W: Write,
    P: MetricsProvider,
    N: Notifier,
{
    let _guard = ShutdownGuard::new(logger);

    let result = prompt.collect().and_then(|config| {
        log_banner(logger, &config);
        run_until_stopped(monitor, &config, logger, signal)
    });

    match result {
        Err(MonitorError::Interrupted) | Ok(()) => {
            logger.log("System Monitor stopped by user.");
            SessionEnd::Interrupted
        }
        Err(e) => {
            logger.log(format!("An unexpected error occurred in the main loop: {}", e));
            SessionEnd::Failed(e.to_string())
        }
    }
}

/// Tick, then sleep for the configured interval, until interrupted or a tick fails.
pub fn run_until_stopped<P: MetricsProvider, N: Notifier>(
    monitor: &mut Monitor<P, N>,
    config: &ThresholdConfig,
    logger: &EventLogger,
    signal: &ShutdownSignal,
) -> Result<()> {
    loop {
        signal.check()?;

        let report = monitor.run_tick(config)?;
        log::debug!("tick finished with {} alert(s)", report.alert_count());

        logger.log(format!(
            "Waiting for {} seconds before next check...",
            config.interval_seconds()
        ));
        if signal.wait(config.interval()) {
            return Err(MonitorError::Interrupted);
        }
    }
}

fn log_banner(logger: &EventLogger, config: &ThresholdConfig) {
    logger.log("System Monitor Started (Pop-up Alerts).");
    logger.log(format!("Monitoring: {}", config));
    logger.log(format!("Check interval: {} seconds.", config.interval_seconds()));
    logger.log(format!("Log files will be in {}", logger.path_pattern()));
}
