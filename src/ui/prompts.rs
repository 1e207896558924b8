// UI prompts and user interaction module

use colored::Colorize;
use std::io::{self, BufRead, Stdout, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::core::config::{
    parse_interval, parse_percent, ThresholdConfig, ValidationError, DEFAULT_FILESYSTEM,
};
use crate::core::shutdown::ShutdownSignal;
use crate::error::{MonitorError, Result};

/// How often a waiting prompt looks at the shutdown signal
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Collects the four monitoring values from a line-oriented input.
///
/// Each value is asked for until it parses and is in range; invalid input is
/// answered with an error message and the same question again.
///
/// Lines are read on a background thread so a pending question can be
/// abandoned when the shutdown signal fires.
pub struct ConfigPrompt<W> {
    lines: Receiver<io::Result<String>>,
    output: W,
    signal: Option<ShutdownSignal>,
}

impl ConfigPrompt<Stdout> {
    /// Prompt on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self {
            lines: spawn_reader(|| io::stdin().lock()),
            output: io::stdout(),
            signal: None,
        }
    }
}

impl<W: Write> ConfigPrompt<W> {
    pub fn new<R>(input: R, output: W) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self {
            lines: spawn_reader(move || input),
            output,
            signal: None,
        }
    }

    /// Abort with `Interrupted` if `signal` fires while waiting for input
    pub fn with_signal(mut self, signal: ShutdownSignal) -> Self {
        self.signal = Some(signal);
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for CPU, RAM and disk thresholds and the check interval
    pub fn collect(&mut self) -> Result<ThresholdConfig> {
        writeln!(
            self.output,
            "{}",
            "--- System Monitor Configuration (Pop-up Alerts) ---"
                .white()
                .bold()
        )?;

        let cpu = self.ask("Enter CPU threshold (e.g., 80.0 for 80%): ", |s| {
            parse_percent(s, "CPU")
        })?;
        let ram = self.ask("Enter RAM threshold (e.g., 85.0 for 85%): ", |s| {
            parse_percent(s, "RAM")
        })?;
        let disk_prompt = format!(
            "Enter Disk threshold for '{}' (e.g., 90.0 for 90%): ",
            DEFAULT_FILESYSTEM
        );
        let disk = self.ask(&disk_prompt, |s| parse_percent(s, "Disk"))?;
        let interval = self.ask("Enter check interval in seconds (e.g., 60): ", parse_interval)?;

        Ok(ThresholdConfig::new(cpu, ram, disk, interval)?)
    }

    fn ask<T, F>(&mut self, prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, ValidationError>,
    {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let line = match self.read_line() {
                Err(MonitorError::Interrupted) => {
                    writeln!(self.output)?;
                    return Err(MonitorError::Interrupted);
                }
                other => other?,
            };

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", e.to_string().red())?,
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let received = match &self.signal {
            None => self.lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
            Some(signal) => loop {
                signal.check()?;
                match self.lines.recv_timeout(INPUT_POLL_INTERVAL) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    other => break other,
                }
            },
        };

        match received {
            Ok(line) => Ok(line?),
            Err(_) => {
                writeln!(self.output)?;
                Err(MonitorError::InputClosed)
            }
        }
    }
}

/// Read lines from the input produced by `open` on a detached thread.
///
/// The channel disconnects at end of input; a read error is forwarded once
/// and ends the thread.
fn spawn_reader<R, F>(open: F) -> Receiver<io::Result<String>>
where
    R: BufRead,
    F: FnOnce() -> R + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let mut input = open();
        loop {
            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if sender.send(Ok(line)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = sender.send(Err(e));
                    break;
                }
            }
        }
    });

    receiver
}
