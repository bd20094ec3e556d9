//! Core domain logic for the stint session timer.
//!
//! This crate contains the fundamental types and logic for:
//! - Timer state machine: start/pause/stop with exact resume arithmetic
//! - Formatting: elapsed durations and 12-hour clock times
//! - Annotation parsing: extracting `[[reference]]` and `#tag` tokens

pub mod annotation;
pub mod entry;
pub mod format;
pub mod timer;

pub use annotation::Annotation;
pub use entry::SessionEntry;
pub use format::{format_clock_time, format_duration};
pub use timer::{Stopwatch, TimerError, TimerStatus};
