use popmon::core::event_log::EventLogger;
use popmon::core::notifier::{DesktopNotifier, Notifier, NotifyOutcome, Urgency};
use tempfile::TempDir;

use super::support::{log_messages, read_log};

#[test]
fn test_default_program_is_notify_send() {
    let notifier = DesktopNotifier::new(EventLogger::default());
    assert_eq!(notifier.program(), "notify-send");
}

#[test]
fn test_missing_program_returns_normally() {
    let temp_dir = TempDir::new().unwrap();
    let logger = EventLogger::new(temp_dir.path());
    let notifier = DesktopNotifier::with_program("popmon-absent-binary", logger.clone());

    let outcome = notifier.notify("ALERT", "body", Urgency::Critical);

    assert_eq!(outcome, NotifyOutcome::MechanismMissing);
    assert_eq!(log_messages(&logger).len(), 1);
}

#[cfg(unix)]
#[test]
fn test_success_is_logged_with_summary() {
    let temp_dir = TempDir::new().unwrap();
    let logger = EventLogger::new(temp_dir.path());
    let notifier = DesktopNotifier::with_program("true", logger.clone());

    let outcome = notifier.notify("ALERT: High RAM Usage on box", "body", Urgency::Normal);

    assert_eq!(outcome, NotifyOutcome::Sent);
    assert_eq!(
        log_messages(&logger),
        vec!["Pop-up alert sent: Summary='ALERT: High RAM Usage on box'"]
    );
}

#[cfg(unix)]
#[test]
fn test_non_zero_exit_is_logged_with_code() {
    let temp_dir = TempDir::new().unwrap();
    let logger = EventLogger::new(temp_dir.path());
    let notifier = DesktopNotifier::with_program("false", logger.clone());

    let outcome = notifier.notify("ALERT", "body", Urgency::Critical);

    assert!(matches!(outcome, NotifyOutcome::Failed { code: Some(1), .. }));
    let content = read_log(&logger);
    assert!(content.contains("Failed to send pop-up alert"));
    assert!(content.contains("exited with status 1"));
    assert!(content.contains("Stderr:"));
}
