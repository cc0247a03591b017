//! Datetime formatting for the timetable's timezone.
//!
//! Every timestamp the calendar sees is pinned to UTC+05:30 ("Asia/Kolkata");
//! the timetable has no notion of any other zone. Values are built as RFC3339
//! strings directly rather than going through a timezone-aware type.

use chrono::{FixedOffset, NaiveDate, NaiveTime, Utc};

use crate::error::{ClasscalError, ClasscalResult};

/// IANA timezone name sent alongside every event time.
pub const TIME_ZONE: &str = "Asia/Kolkata";

/// Offset suffix for every formatted timestamp.
pub const UTC_OFFSET: &str = "+05:30";

const OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Combine a date and a wall-clock "HH:MM" string into an RFC3339 timestamp
/// in the timetable's timezone: `YYYY-MM-DDTHH:MM:00+05:30`.
///
/// Accepts a missing leading zero ("9:30" becomes "09:30").
pub fn format_datetime(date: NaiveDate, time: &str) -> ClasscalResult<String> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ClasscalError::InvalidTime(time.to_string()))?;

    Ok(format!(
        "{}T{}:00{}",
        date.format("%Y-%m-%d"),
        parsed.format("%H:%M"),
        UTC_OFFSET
    ))
}

/// The listing window covering a single day: 00:00 to 23:59 local.
pub fn day_bounds(date: NaiveDate) -> (String, String) {
    let date = date.format("%Y-%m-%d");
    (
        format!("{}T00:00:00{}", date, UTC_OFFSET),
        format!("{}T23:59:00{}", date, UTC_OFFSET),
    )
}

/// Today's date in the timetable's timezone, regardless of where the
/// process runs.
pub fn today() -> NaiveDate {
    let offset = FixedOffset::east_opt(OFFSET_SECS).unwrap();
    Utc::now().with_timezone(&offset).date_naive()
}
