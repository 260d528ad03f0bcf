//! Date/time parsing for CLI and prompt input.

use crate::errors::{AppError, AppResult};
use crate::models::shift::DT_FORMAT;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `HH:MM:SS`, or `HH:MM` with seconds set to zero.
pub fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

/// `YYYY-MM-DD HH:MM[:SS]`, a `T` separator is accepted too.
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let normalized = s.trim().replacen('T', " ", 1);
    let (date, time) = normalized.split_once(' ')?;
    Some(parse_date(date)?.and_time(parse_clock_time(time)?))
}

pub fn require_date_time(s: &str) -> AppResult<NaiveDateTime> {
    parse_date_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn format_dt(dt: &NaiveDateTime) -> String {
    dt.format(DT_FORMAT).to_string()
}
