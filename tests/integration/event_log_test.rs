use chrono::NaiveDateTime;
use popmon::core::event_log::{EventLogger, LogOutcome};
use tempfile::TempDir;

use super::support::read_log;

#[test]
fn test_same_message_twice_gives_two_lines() {
    let temp_dir = TempDir::new().unwrap();
    let logger = EventLogger::new(temp_dir.path());

    assert!(logger.log("Disk check").is_written());
    assert!(logger.log("Disk check").is_written());

    let content = read_log(&logger);
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.ends_with(" - Disk check")));
}

#[test]
fn test_line_format() {
    let temp_dir = TempDir::new().unwrap();
    let logger = EventLogger::new(temp_dir.path());

    logger.log("System Monitor Started (Pop-up Alerts).");

    let content = read_log(&logger);
    let (timestamp, message) = content.trim_end().split_once(" - ").unwrap();
    assert!(NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").is_ok());
    assert_eq!(message, "System Monitor Started (Pop-up Alerts).");
    assert!(content.ends_with('\n'));
}

#[test]
fn test_file_name_uses_todays_date() {
    let temp_dir = TempDir::new().unwrap();
    let logger = EventLogger::new(temp_dir.path());

    let LogOutcome::Written(path) = logger.log("x") else {
        panic!("log write failed");
    };

    let expected = format!(
        "system_monitor_popup_{}.log",
        chrono::Local::now().format("%Y-%m-%d")
    );
    assert_eq!(path.file_name().unwrap().to_string_lossy(), expected);
}

#[test]
fn test_existing_file_is_appended() {
    let temp_dir = TempDir::new().unwrap();
    let logger = EventLogger::new(temp_dir.path());
    let path = logger.path_for(chrono::Local::now().date_naive());
    std::fs::write(&path, "earlier line\n").unwrap();

    logger.log("later line");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("earlier line\n"));
    assert!(content.trim_end().ends_with(" - later line"));
}

#[test]
fn test_unwritable_directory_does_not_panic() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let logger = EventLogger::new(&blocker);

    match logger.log("goes nowhere") {
        LogOutcome::Failed { path, reason } => {
            assert!(path.starts_with(&blocker));
            assert!(!reason.is_empty());
        }
        other => panic!("expected failure, got {:?}", other),
    }
}
