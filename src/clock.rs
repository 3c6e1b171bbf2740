//! Wall-clock timestamp formatting.

use chrono::{Local, NaiveDateTime};

/// `YYYY/MM/DD HH:MM:SS`, 24-hour, zero-padded.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Format a local date-time for display.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// The current local time, formatted for display.
pub fn current_timestamp() -> String {
    format_timestamp(&Local::now().naive_local())
}
