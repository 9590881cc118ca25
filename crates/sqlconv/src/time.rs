//! Fixed-layout date and time parsing.
//!
//! SQL DATE/TIME/DATETIME columns travel as text in a handful of fixed
//! layouts; these helpers parse them into chrono's naive types. Values are
//! wall-clock readings with no timezone attached, which is how the columns
//! store them.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};

/// Layout for DATE columns.
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Layout for TIME columns.
pub const TIME_LAYOUT: &str = "%H:%M:%S";

/// Layout for DATETIME columns.
pub const DATETIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a DATE column value, e.g. `2026-08-07`.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_LAYOUT).map_err(|source| Error::ParseTime {
        input: s.to_string(),
        source,
    })
}

/// Parse a TIME column value, e.g. `13:45:00`.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_LAYOUT).map_err(|source| Error::ParseTime {
        input: s.to_string(),
        source,
    })
}

/// Parse a DATETIME column value, e.g. `2026-08-07 13:45:00`.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    parse_datetime_with_layout(s, DATETIME_LAYOUT)
}

/// Parse a date-time string with an explicit chrono layout.
pub fn parse_datetime_with_layout(s: &str, layout: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, layout).map_err(|source| Error::ParseTime {
        input: s.to_string(),
        source,
    })
}
