//! Desktop pop-up notifications through `notify-send`.

use std::fmt;
use std::io;
use std::process::Command;
use std::str::FromStr;

use super::config::NOTIFY_PROGRAM;
use super::event_log::EventLogger;

/// Urgency level handed to the notification daemon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Urgency {
    Low,
    Normal,
    #[default]
    Critical,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::Critical => "critical",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Urgency::Low),
            "normal" => Ok(Urgency::Normal),
            "critical" => Ok(Urgency::Critical),
            other => Err(format!("unknown urgency level: {}", other)),
        }
    }
}

/// What happened to a notification attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    /// The notification program is not installed
    MechanismMissing,
    /// The program ran but exited unsuccessfully
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    /// Spawning the program failed for another reason
    Errored(String),
}

impl NotifyOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, NotifyOutcome::Sent)
    }
}

pub trait Notifier {
    /// Attempt one notification. Failures are reported in the outcome, never raised.
    fn notify(&self, summary: &str, body: &str, urgency: Urgency) -> NotifyOutcome;
}

/// Sends notifications by running `notify-send -u <urgency> <summary> <body>`
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    program: String,
    logger: EventLogger,
}

impl DesktopNotifier {
    pub fn new(logger: EventLogger) -> Self {
        Self::with_program(NOTIFY_PROGRAM, logger)
    }

    pub fn with_program<S: Into<String>>(program: S, logger: EventLogger) -> Self {
        Self {
            program: program.into(),
            logger,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn args<'a>(&self, summary: &'a str, body: &'a str, urgency: Urgency) -> [&'a str; 4] {
        ["-u", urgency.as_str(), summary, body]
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, summary: &str, body: &str, urgency: Urgency) -> NotifyOutcome {
        let args = self.args(summary, body, urgency);
        log::debug!("running {} {:?}", self.program, args);

        let outcome = match Command::new(&self.program).args(args).output() {
            Ok(output) if output.status.success() => NotifyOutcome::Sent,
            Ok(output) => NotifyOutcome::Failed {
                command: format!("{} {:?}", self.program, args),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => NotifyOutcome::MechanismMissing,
            Err(e) => NotifyOutcome::Errored(e.to_string()),
        };

        let message = match &outcome {
            NotifyOutcome::Sent => format!("Pop-up alert sent: Summary='{}'", summary),
            NotifyOutcome::MechanismMissing => format!(
                "Error: '{}' command not found. Please install libnotify-bin or equivalent.",
                self.program
            ),
            NotifyOutcome::Failed {
                command,
                code,
                stderr,
            } => format!(
                "Failed to send pop-up alert. Command '{}' exited with status {}.\nStderr: {}",
                command,
                code.map_or_else(|| "unknown (killed by signal)".to_string(), |c| c.to_string()),
                stderr
            ),
            NotifyOutcome::Errored(reason) => format!(
                "An unexpected error occurred while sending pop-up alert: {}",
                reason
            ),
        };
        self.logger.log(message);

        outcome
    }
}
