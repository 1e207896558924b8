// Core business logic module

pub mod config;
pub mod event_log;
pub mod notifier;
pub mod session;
pub mod shutdown;
pub mod system_monitor;

// Re-export commonly used items
pub use config::ThresholdConfig;
pub use event_log::{EventLogger, LogOutcome};
pub use notifier::{DesktopNotifier, Notifier, NotifyOutcome, Urgency};
pub use session::{run_session, SessionEnd};
pub use shutdown::{ShutdownGuard, ShutdownSignal};
