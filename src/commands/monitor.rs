//! Pop-up monitor command handler.
//!
//! Wires the real host collaborators together and runs one session.

use anyhow::{Context, Result};

use crate::core::event_log::EventLogger;
use crate::core::notifier::DesktopNotifier;
use crate::core::session::{run_session, SessionEnd};
use crate::core::shutdown::ShutdownSignal;
use crate::core::system_monitor::{Monitor, SysinfoProvider};
use crate::ui::prompts::ConfigPrompt;

/// Execute the monitor until interrupted or a metric read fails
pub fn execute() -> Result<()> {
    let signal = ShutdownSignal::install().context("Failed to install interrupt handler")?;

    let logger = EventLogger::default();
    let notifier = DesktopNotifier::new(logger.clone());
    let mut monitor = Monitor::new(SysinfoProvider::new(), notifier, logger.clone());
    let mut prompt = ConfigPrompt::stdio().with_signal(signal.clone());

    match run_session(&mut prompt, &mut monitor, &logger, &signal) {
        SessionEnd::Interrupted => log::debug!("session ended by interrupt"),
        SessionEnd::Failed(reason) => log::debug!("session ended with error: {}", reason),
    }

    Ok(())
}
