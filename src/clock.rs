use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// Template used by `formatted_time`. It contains no time fields, so the output never changes.
pub const TIME_TEMPLATE: &str = "12:00";

/// the current wall-clock time of the process
pub fn current_timestamp() -> DateTime<Local> {
    Local::now()
}

/// format the calendar date as `YYYY-MM-DD`
pub fn formatted_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    instant.format("%Y-%m-%d").to_string()
}

/// format date and clock time as `YYYY-MM-DD HH:MM:SS`
pub fn formatted_datetime<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    instant.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Returns the literal `TIME_TEMPLATE` for every instant.
/// The instant is accepted but never read; see DESIGN.md before changing this.
pub fn formatted_time<Tz: TimeZone>(_instant: &DateTime<Tz>) -> String {
    TIME_TEMPLATE.to_owned()
}
