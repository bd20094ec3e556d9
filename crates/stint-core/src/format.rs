//! Elapsed-duration and clock-time formatting.
//!
//! Both formats are shared by the live status display, the `now` command
//! and the session log, so they live here rather than in the CLI.

use chrono::{TimeDelta, Timelike};

/// Formats an elapsed duration as `"{H}h {M}m {S}s"`.
///
/// Floors to whole seconds and never rounds up; negative durations clamp
/// to zero. Hours are unbounded (no day rollover).
#[must_use]
pub fn format_duration(elapsed: TimeDelta) -> String {
    let total_secs = elapsed.num_seconds().max(0);
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours}h {minutes}m {seconds}s")
}

/// Formats a time of day as `"h:mm AM/PM"`: 12-hour clock, zero-padded
/// minutes, no leading zero on the hour.
#[must_use]
pub fn format_clock_time<T: Timelike>(time: &T) -> String {
    let (is_pm, hour) = time.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!("{hour}:{:02} {meridiem}", time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hm(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(TimeDelta::zero()), "0h 0m 0s");
    }

    #[test]
    fn test_format_duration_minute_boundary() {
        assert_eq!(format_duration(TimeDelta::milliseconds(61_000)), "0h 1m 1s");
    }

    #[test]
    fn test_format_duration_hour_boundary() {
        assert_eq!(
            format_duration(TimeDelta::milliseconds(3_661_000)),
            "1h 1m 1s"
        );
    }

    #[test]
    fn test_format_duration_floors_partial_seconds() {
        assert_eq!(format_duration(TimeDelta::milliseconds(3_999)), "0h 0m 3s");
    }

    #[test]
    fn test_format_duration_negative_clamps_to_zero() {
        assert_eq!(format_duration(TimeDelta::seconds(-5)), "0h 0m 0s");
    }

    #[test]
    fn test_format_duration_long_session() {
        assert_eq!(
            format_duration(TimeDelta::seconds(26 * 3600 + 59 * 60 + 59)),
            "26h 59m 59s"
        );
    }

    #[test]
    fn test_format_clock_time_midnight() {
        assert_eq!(format_clock_time(&hm(0, 0)), "12:00 AM");
    }

    #[test]
    fn test_format_clock_time_afternoon() {
        assert_eq!(format_clock_time(&hm(13, 5)), "1:05 PM");
    }

    #[test]
    fn test_format_clock_time_end_of_day() {
        assert_eq!(format_clock_time(&hm(23, 59)), "11:59 PM");
    }

    #[test]
    fn test_format_clock_time_noon() {
        assert_eq!(format_clock_time(&hm(12, 0)), "12:00 PM");
    }
}
