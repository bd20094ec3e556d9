//! The interactive timer session.
//!
//! Commands arrive one per input line. Stdin is read on a helper thread
//! feeding an mpsc channel; the host loop waits on the channel with a
//! one-second timeout and redraws the live status line on each timeout
//! while the timer is running. The refresh therefore exists only while
//! the loop runs and stops redrawing the moment the timer leaves the
//! running state.

use std::io::Write;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local, Utc};

use stint_core::{
    SessionEntry, Stopwatch, TimerStatus, format_clock_time, format_duration,
};
use stint_log::SessionLog;

use crate::Config;
use crate::sound;

/// Display refresh interval while the timer is running.
const TICK: Duration = Duration::from_secs(1);

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Start,
    Pause,
    Stop { annotation: Option<String> },
    Now,
    Status,
    Quit,
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Parses an input line; `None` for blank lines.
fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .map_or((trimmed, ""), |(w, r)| (w, r.trim()));

    let command = match word {
        "start" => Command::Start,
        "pause" => Command::Pause,
        "stop" => Command::Stop {
            annotation: (!rest.is_empty()).then(|| rest.to_string()),
        },
        "now" => Command::Now,
        "status" => Command::Status,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    };
    Some(command)
}

/// Owns the timer and the log for the lifetime of one session.
struct Host {
    config: Config,
    stopwatch: Stopwatch,
    log: SessionLog,
    /// True while the live status line is on screen and must be cleared
    /// before the next message.
    ticking: bool,
}

impl Host {
    fn new(config: Config) -> Self {
        let log = SessionLog::open(&config.log_path);
        Self {
            config,
            stopwatch: Stopwatch::new(),
            log,
            ticking: false,
        }
    }

    fn handle<W: Write>(
        &mut self,
        command: Command,
        now: DateTime<Utc>,
        out: &mut W,
    ) -> Result<Flow> {
        self.clear_status_line(out)?;
        match command {
            Command::Start => {
                let resuming = self.stopwatch.status() == TimerStatus::Paused;
                match self.stopwatch.start(now) {
                    Ok(()) if resuming => writeln!(out, "Timer resumed.")?,
                    Ok(()) => writeln!(out, "Timer started.")?,
                    Err(error) => writeln!(out, "{error}.")?,
                }
            }
            Command::Pause => match self.stopwatch.pause(now) {
                Ok(()) => writeln!(
                    out,
                    "Timer paused at {}.",
                    format_duration(self.stopwatch.elapsed(now))
                )?,
                Err(error) => writeln!(out, "{error}.")?,
            },
            Command::Stop { annotation } => self.stop(annotation.as_deref(), now, out)?,
            Command::Now => writeln!(out, "{}", format_clock_time(&Local::now().time()))?,
            Command::Status => writeln!(
                out,
                "{}: {}",
                self.stopwatch.status(),
                format_duration(self.stopwatch.elapsed(now))
            )?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(word) => writeln!(
                out,
                "Unknown command: {word} (commands: start, pause, stop, now, status, quit)"
            )?,
        }
        Ok(Flow::Continue)
    }

    /// Stop sequence: transition the timer first, then build and record
    /// the entry. A storage failure loses only the durable record; the
    /// total has already been reported.
    fn stop<W: Write>(
        &mut self,
        annotation: Option<&str>,
        now: DateTime<Utc>,
        out: &mut W,
    ) -> Result<()> {
        let elapsed = match self.stopwatch.stop(now) {
            Ok(elapsed) => elapsed,
            Err(error) => {
                writeln!(out, "{error}.")?;
                return Ok(());
            }
        };

        let annotation = annotation.filter(|_| self.config.capture_annotation);
        // The log records when the session ended, not when it started.
        let entry = SessionEntry::new(Local::now().date_naive(), elapsed, annotation);
        writeln!(out, "Session complete: {}.", entry.duration)?;

        if let Err(error) = self.log.append(&entry) {
            let error = anyhow::Error::new(error);
            writeln!(out, "Could not record the session: {error:#}")?;
        }
        sound::play_stop_sound(&self.config);
        Ok(())
    }

    /// Redraws the live status line. Only the running state renders;
    /// pausing or stopping leaves the line to be cleared by the next
    /// message.
    fn tick<W: Write>(&mut self, now: DateTime<Utc>, out: &mut W) -> Result<()> {
        if self.stopwatch.status() == TimerStatus::Running {
            write!(
                out,
                "\r[running] {} ",
                format_duration(self.stopwatch.elapsed(now))
            )?;
            out.flush()?;
            self.ticking = true;
        }
        Ok(())
    }

    fn clear_status_line<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.ticking {
            write!(out, "\r{:32}\r", "")?;
            self.ticking = false;
        }
        Ok(())
    }
}

/// Runs the interactive session until `quit` or end of input.
pub fn run(config: &Config) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        use std::io::BufRead;
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                // Host loop ended; stop reading.
                break;
            }
        }
    });

    let mut host = Host::new(config.clone());
    let mut out = std::io::stdout();
    writeln!(
        out,
        "stint session (commands: start, pause, stop [annotation], now, status, quit)"
    )?;

    loop {
        match rx.recv_timeout(TICK) {
            Ok(line) => {
                let Some(command) = parse_command(&line) else {
                    continue;
                };
                if host.handle(command, Utc::now(), &mut out)? == Flow::Quit {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => host.tick(Utc::now(), &mut out)?,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    host.clear_status_line(&mut out)?;
    Ok(())
}
