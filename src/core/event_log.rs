//! Dated, append-only event log mirrored to the console.
//!
//! Every call opens `<dir>/system_monitor_popup_<YYYY-MM-DD>.log`, appends one
//! `"<timestamp> - <message>"` line and closes the file again, so the log
//! rotates on its own when the calendar date changes.

use chrono::{Local, NaiveDate};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::config::{DEFAULT_LOG_DIR, LOG_FILE_PREFIX};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of a single [`EventLogger::log`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutcome {
    Written(PathBuf),
    Failed { path: PathBuf, reason: String },
}

impl LogOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, LogOutcome::Written(_))
    }
}

#[derive(Debug, Clone)]
pub struct EventLogger {
    directory: PathBuf,
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_DIR)
    }
}

impl EventLogger {
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Log file used for entries written on `date`
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.directory.join(format!(
            "{}_{}.log",
            LOG_FILE_PREFIX,
            date.format(DATE_FORMAT)
        ))
    }

    /// Human readable pattern of the log file names, used in the startup banner
    pub fn path_pattern(&self) -> String {
        self.directory
            .join(format!("{}_YYYY-MM-DD.log", LOG_FILE_PREFIX))
            .display()
            .to_string()
    }

    /// Append `message` to today's log file and echo it to stdout.
    ///
    /// Never fails: a file that cannot be written is reported on stdout and in
    /// the returned outcome.
    pub fn log<S: AsRef<str>>(&self, message: S) -> LogOutcome {
        let now = Local::now();
        let line = format!("{} - {}", now.format(TIMESTAMP_FORMAT), message.as_ref());
        let path = self.path_for(now.date_naive());

        println!("{}", line);

        match append_line(&path, &line) {
            Ok(()) => LogOutcome::Written(path),
            Err(e) => {
                println!("Could not write to log file {}: {}", path.display(), e);
                log::warn!("event log write failed for {:?}: {}", path, e);
                LogOutcome::Failed {
                    path,
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}
