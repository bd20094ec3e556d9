//! The single-session timer state machine.
//!
//! State is carried in the enum variants, so the bookkeeping invariants
//! (no accumulated time while idle, no start instant while paused) are
//! unrepresentable rather than checked. Every operation takes `now`
//! explicitly, which keeps the machine pure and lets tests drive the
//! clock by hand.

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// A requested transition the current state forbids. Never fatal: the
/// machine is unchanged when one of these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    #[error("timer is already running")]
    AlreadyRunning,
    #[error("timer is not running")]
    NotRunning,
}

/// Coarse status, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
}

impl TimerStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

impl std::fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One process-wide session timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stopwatch {
    #[default]
    Idle,
    Running {
        /// Instant the current run segment began. After a resume this is
        /// a virtual instant shifted into the past by the time already
        /// banked, so elapsed time stays a single subtraction.
        started_at: DateTime<Utc>,
    },
    Paused {
        /// Frozen elapsed time across all prior run segments.
        accumulated: TimeDelta,
    },
}

impl Stopwatch {
    #[must_use]
    pub const fn new() -> Self {
        Self::Idle
    }

    #[must_use]
    pub const fn status(&self) -> TimerStatus {
        match self {
            Self::Idle => TimerStatus::Idle,
            Self::Running { .. } => TimerStatus::Running,
            Self::Paused { .. } => TimerStatus::Paused,
        }
    }

    /// Starts a fresh session, or resumes a paused one.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), TimerError> {
        match *self {
            Self::Idle => {
                *self = Self::Running { started_at: now };
                Ok(())
            }
            Self::Paused { accumulated } => {
                // Resume arithmetic: reconstruct a start instant that
                // already accounts for the banked time.
                *self = Self::Running {
                    started_at: now - accumulated,
                };
                Ok(())
            }
            Self::Running { .. } => Err(TimerError::AlreadyRunning),
        }
    }

    /// Freezes the timer, banking the elapsed time so far.
    pub fn pause(&mut self, now: DateTime<Utc>) -> Result<(), TimerError> {
        match *self {
            Self::Running { started_at } => {
                *self = Self::Paused {
                    accumulated: now - started_at,
                };
                Ok(())
            }
            Self::Idle | Self::Paused { .. } => Err(TimerError::NotRunning),
        }
    }

    /// Ends the session, returning the total elapsed time and resetting
    /// to [`Stopwatch::Idle`].
    pub fn stop(&mut self, now: DateTime<Utc>) -> Result<TimeDelta, TimerError> {
        let elapsed = match *self {
            Self::Running { started_at } => now - started_at,
            Self::Paused { accumulated } => accumulated,
            Self::Idle => return Err(TimerError::NotRunning),
        };
        *self = Self::Idle;
        Ok(elapsed)
    }

    /// Elapsed time of the session in progress; zero when idle.
    /// Pure read, used by the display refresh.
    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> TimeDelta {
        match *self {
            Self::Running { started_at } => now - started_at,
            Self::Paused { accumulated } => accumulated,
            Self::Idle => TimeDelta::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_start_from_idle_runs() {
        let mut sw = Stopwatch::new();
        sw.start(at(0)).unwrap();
        assert_eq!(sw.status(), TimerStatus::Running);
        assert_eq!(sw.elapsed(at(5)), TimeDelta::seconds(5));
    }

    #[test]
    fn test_start_while_running_is_rejected_without_mutation() {
        let mut sw = Stopwatch::new();
        sw.start(at(0)).unwrap();
        let before = sw;
        assert_eq!(sw.start(at(10)), Err(TimerError::AlreadyRunning));
        assert_eq!(sw, before);
        assert_eq!(sw.elapsed(at(10)), TimeDelta::seconds(10));
    }

    #[test]
    fn test_pause_freezes_elapsed() {
        let mut sw = Stopwatch::new();
        sw.start(at(0)).unwrap();
        sw.pause(at(7)).unwrap();
        assert_eq!(sw.status(), TimerStatus::Paused);
        // Time passing while paused contributes nothing.
        assert_eq!(sw.elapsed(at(100)), TimeDelta::seconds(7));
    }

    #[test]
    fn test_resume_preserves_elapsed_exactly() {
        let mut sw = Stopwatch::new();
        sw.start(at(0)).unwrap();
        let before_pause = sw.elapsed(at(30));
        sw.pause(at(30)).unwrap();
        sw.start(at(900)).unwrap();
        assert_eq!(sw.elapsed(at(900)), before_pause);
        assert_eq!(sw.elapsed(at(905)), TimeDelta::seconds(35));
    }

    #[test]
    fn test_repeated_pause_resume_does_not_drift() {
        let mut sw = Stopwatch::new();
        let mut t = 0;
        sw.start(at(t)).unwrap();
        for _ in 0..10 {
            t += 3;
            sw.pause(at(t)).unwrap();
            t += 60; // paused interval, must not count
            sw.start(at(t)).unwrap();
        }
        t += 3;
        let total = sw.stop(at(t)).unwrap();
        assert_eq!(total, TimeDelta::seconds(33));
    }

    #[test]
    fn test_stop_from_running_returns_elapsed_and_resets() {
        let mut sw = Stopwatch::new();
        sw.start(at(0)).unwrap();
        assert_eq!(sw.stop(at(42)).unwrap(), TimeDelta::seconds(42));
        assert_eq!(sw, Stopwatch::Idle);
        assert_eq!(sw.elapsed(at(50)), TimeDelta::zero());
    }

    #[test]
    fn test_stop_from_paused_returns_accumulated() {
        let mut sw = Stopwatch::new();
        sw.start(at(0)).unwrap();
        sw.pause(at(12)).unwrap();
        assert_eq!(sw.stop(at(1000)).unwrap(), TimeDelta::seconds(12));
        assert_eq!(sw, Stopwatch::Idle);
    }

    #[test]
    fn test_stop_while_idle_is_rejected() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.stop(at(0)), Err(TimerError::NotRunning));
        assert_eq!(sw, Stopwatch::Idle);
    }

    #[test]
    fn test_pause_while_idle_or_paused_is_rejected() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.pause(at(0)), Err(TimerError::NotRunning));

        sw.start(at(0)).unwrap();
        sw.pause(at(5)).unwrap();
        let before = sw;
        assert_eq!(sw.pause(at(6)), Err(TimerError::NotRunning));
        assert_eq!(sw, before);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(TimerStatus::Idle.to_string(), "idle");
        assert_eq!(TimerStatus::Running.to_string(), "running");
        assert_eq!(TimerStatus::Paused.to_string(), "paused");
    }
}
