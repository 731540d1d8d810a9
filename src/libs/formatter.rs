//! Time duration formatting utilities for the report output.
//!
//! Toggl reports durations as whole milliseconds. Everything the report prints
//! goes through [`format_duration`], so group totals, per-task durations and the
//! grand total all share one representation.
//!
//! ## Format Specifications
//!
//! All durations follow the "HH:MM:SS" pattern:
//! - The value is rounded to the nearest whole second first (500 ms rounds up)
//! - Hours are zero-padded to at least 2 digits and never wrap at 24
//! - Minutes and seconds are zero-padded to exactly 2 digits
//! - Negative values keep their sign in front of the absolute value
//!
//! ### Examples
//! - 3 661 000 ms → "01:01:01"
//! - 90 000 ms → "00:01:30"
//! - 500 ms → "00:00:01"
//! - 360 000 000 ms → "100:00:00"
//!
//! ```rust
//! use toggl_reporter::libs::formatter::format_duration;
//!
//! assert_eq!(format_duration(3_661_000), "01:01:01");
//! assert_eq!(format_duration(0), "00:00:00");
//! ```

const MILLIS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;

/// Rounds a millisecond value to whole seconds, half away from zero.
///
/// `499` → `0`, `500` → `1`, `-500` → `-1`.
pub fn round_to_seconds(millis: i64) -> i64 {
    let half = MILLIS_PER_SECOND / 2;
    if millis >= 0 {
        millis.saturating_add(half) / MILLIS_PER_SECOND
    } else {
        millis.saturating_sub(half) / MILLIS_PER_SECOND
    }
}

/// Formats a millisecond duration as "HH:MM:SS".
///
/// # Examples
///
/// ```rust
/// use toggl_reporter::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(60_000 + 30_000), "00:01:30");
/// assert_eq!(format_duration(1_499), "00:00:01");
/// assert_eq!(format_duration(1_500), "00:00:02");
/// ```
///
/// Durations of 100 hours or more simply widen the hour field:
///
/// ```rust
/// use toggl_reporter::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(100 * 3_600_000), "100:00:00");
/// ```
pub fn format_duration(millis: i64) -> String {
    let total_seconds = round_to_seconds(millis);
    let sign = if total_seconds < 0 { "-" } else { "" };
    let total_seconds = total_seconds.unsigned_abs();

    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;

    format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
}
