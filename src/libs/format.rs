//! Date, time, and duration formatting for the attendance history.
//!
//! This module is the single owner of the format strings used across the
//! crate. Values headed for the remote service always use the ISO
//! `YYYY-MM-DD` form; values headed for a screen use the display forms.
//! Keeping the selection here means no other module ever hardcodes a
//! chrono format string.
//!
//! ## Format Specifications
//!
//! - **API date**: `2025-01-15` (query parameters, payload fields)
//! - **Display date**: `15 January 2025` (record rows)
//! - **Short date**: `15/01/2025` (filter summaries, validation messages)
//! - **Display time**: `18:30` (24-hour)
//! - **Month and year**: `January 2025` (section headers)
//! - **Duration**: `1h 30min`, `2h`, `45min`; zero or negative minutes
//!   render as `0min`
//!
//! ## Parsing
//!
//! The parsers are lenient on purpose: payload fields pass through them
//! during record mapping, and a malformed value must yield `None` so the
//! mapper can skip that record instead of failing the batch.
//!
//! ## Examples
//!
//! ```rust
//! use fitlog::libs::format::{format_duration_minutes, parse_api_date};
//!
//! assert_eq!(format_duration_minutes(150), "2h 30min");
//! assert!(parse_api_date("2025-01-15").is_some());
//! assert!(parse_api_date("15/01/2025").is_none());
//! ```

use chrono::{Datelike, NaiveDate, NaiveTime};

/// ISO date form used on the wire.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Long date form used in record rows.
pub const DISPLAY_DATE_FORMAT: &str = "%-d %B %Y";

/// Compact date form used in filter summaries and validation messages.
pub const SHORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// 24-hour clock form used in record rows.
pub const DISPLAY_TIME_FORMAT: &str = "%H:%M";

/// Month header form.
pub const MONTH_YEAR_FORMAT: &str = "%B %Y";

/// Parses an ISO `YYYY-MM-DD` payload date, returning `None` when the
/// value does not parse.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), API_DATE_FORMAT).ok()
}

/// Parses a payload time of day.
///
/// Accepts `HH:MM:SS` and `HH:MM`; anything else returns `None`.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// Formats a date for the remote service.
pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Formats a date for record rows, e.g. `15 January 2025`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Formats a date for filter summaries, e.g. `15/01/2025`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}

/// Formats a time of day for record rows, e.g. `18:30`.
pub fn format_display_time(time: NaiveTime) -> String {
    time.format(DISPLAY_TIME_FORMAT).to_string()
}

/// Formats a month header, e.g. `January 2025`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format(MONTH_YEAR_FORMAT).to_string()
}

/// Formats a class duration given in minutes.
///
/// Whole hours drop the minute part (`2h`), sub-hour durations drop the
/// hour part (`45min`), and anything at or below zero renders as `0min`.
///
/// # Examples
///
/// ```rust
/// use fitlog::libs::format::format_duration_minutes;
///
/// assert_eq!(format_duration_minutes(0), "0min");
/// assert_eq!(format_duration_minutes(60), "1h");
/// assert_eq!(format_duration_minutes(61), "1h 1min");
/// assert_eq!(format_duration_minutes(150), "2h 30min");
/// ```
pub fn format_duration_minutes(minutes: i32) -> String {
    if minutes <= 0 {
        return "0min".to_string();
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, m) => format!("{}min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}min", h, m),
    }
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// First calendar day of the month containing `date`.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last calendar day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}
