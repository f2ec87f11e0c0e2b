//! Time-of-day helpers
//!
//! Slot times carry no date. For display they are pinned to a calendar day
//! (normally today) and rendered on a 12-hour clock, e.g. `14:30` → `2:30 PM`.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Shown when a slot time cannot be read as a time of day
pub const INVALID_TIME: &str = "Invalid time";

/// Accepted slot time layouts, tried in order
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M:%S %p"];

/// 获取本地日期
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a stored slot time (`"18:30"`, `"18:30:00"`, `"6:30 PM"`)
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}

/// Canonical `HH:MM:SS` form of any accepted slot time
pub fn normalize_time_of_day(value: &str) -> Option<String> {
    parse_time_of_day(value).map(|time| time.format("%H:%M:%S").to_string())
}

/// Combine a slot time with a calendar day
pub fn at_day(value: &str, day: NaiveDate) -> Option<NaiveDateTime> {
    parse_time_of_day(value).map(|time| day.and_time(time))
}

/// Format a slot time as a local 12-hour clock time on the given day.
///
/// Returns [`INVALID_TIME`] when the value is not a time of day.
pub fn format_time_of_day(value: &str, day: NaiveDate) -> String {
    let Some(naive) = at_day(value, day) else {
        return INVALID_TIME.to_string();
    };
    // A wall-clock time skipped by a DST jump has no local instant; the
    // naive value still reads correctly.
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.format("%-I:%M %p").to_string(),
        None => naive.format("%-I:%M %p").to_string(),
    }
}
