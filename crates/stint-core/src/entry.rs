//! Session log entries.
//!
//! A [`SessionEntry`] is built once per stop event, formatted to a single
//! markdown list line, and discarded; the appended line is its only
//! durable trace.

use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

use crate::annotation::Annotation;
use crate::format::format_duration;

/// One completed timer session, ready to be formatted for the log.
///
/// The date is the day the session *ended*, not the day it started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionEntry {
    /// ISO 8601 calendar date.
    pub date: NaiveDate,
    /// English weekday name for `date`.
    pub weekday: String,
    /// Pre-formatted elapsed time (`"{H}h {M}m {S}s"`).
    pub duration: String,
    pub task: Option<String>,
    pub references: Vec<String>,
    pub tags: Vec<String>,
}

impl SessionEntry {
    /// Builds an entry for a session that ended on `date` after `elapsed`.
    ///
    /// `annotation` is the raw line captured at stop time, if any.
    #[must_use]
    pub fn new(date: NaiveDate, elapsed: TimeDelta, annotation: Option<&str>) -> Self {
        let parsed = annotation.map(Annotation::parse).unwrap_or_default();
        Self {
            date,
            weekday: date.format("%A").to_string(),
            duration: format_duration(elapsed),
            task: parsed.task,
            references: parsed.references,
            tags: parsed.tags,
        }
    }

    /// Formats the single log line for this entry.
    ///
    /// Optional fields are omitted entirely when empty, never emitted
    /// with empty content.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "- Date: {} | Day: {} | Duration: {}",
            self.date, self.weekday, self.duration
        );
        if let Some(task) = &self.task {
            line.push_str(" | Task: ");
            line.push_str(task);
        }
        if !self.references.is_empty() {
            line.push_str(" | Project: ");
            line.push_str(&self.references.join(", "));
        }
        if !self.tags.is_empty() {
            line.push_str(" | Tags: ");
            line.push_str(&self.tags.join(", "));
        }
        line
    }
}
