//! Date range value type for filtering attendance history.
//!
//! A `DateRange` is an immutable pair of optional calendar-date bounds.
//! A missing bound leaves that side of the range open, so `from`-only and
//! `to`-only filters fall out naturally. Ranges are replaced wholesale on
//! every filter change; nothing mutates a bound in place.
//!
//! Ordering of the bounds is a validation concern: `is_ordered` reports it,
//! the validator in [`crate::libs::validation`] enforces it before a range
//! is ever adopted by the controller.

use crate::libs::format;
use crate::libs::messages::Message;
use chrono::{Duration, Local, NaiveDate};
use std::fmt;

/// Inclusive calendar-date range with optional bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound; `None` leaves the start open.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound; `None` leaves the end open.
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Range with no bounds at all; contains every date.
    pub fn empty() -> Self {
        Self { from: None, to: None }
    }

    /// First through last day of the month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        Self {
            from: Some(format::first_day_of_month(date)),
            to: Some(format::last_day_of_month(date)),
        }
    }

    /// First of the current month through today.
    ///
    /// This is the default filter a history screen starts with. The upper
    /// bound is today rather than the end of the month so the default
    /// always passes the future-date validation rule; attendance can only
    /// exist in the past anyway.
    pub fn current_month() -> Self {
        let today = Local::now().date_naive();
        Self {
            from: Some(format::first_day_of_month(today)),
            to: Some(today),
        }
    }

    /// First through last day of the given month, or `None` for an
    /// invalid year/month combination.
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::month_of)
    }

    /// The trailing `days` days ending today, both bounds inclusive.
    ///
    /// Today counts as one of the `days`, so `last_n_days(1)` is just
    /// today.
    pub fn last_n_days(days: i64) -> Self {
        let today = Local::now().date_naive();
        Self {
            from: Some(today - Duration::days(days - 1)),
            to: Some(today),
        }
    }

    /// True when at least one bound is set.
    pub fn has_filter(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// True when both bounds are set.
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// True unless both bounds are set with `from` after `to`.
    pub fn is_ordered(&self) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }

    /// Inclusive containment check; a missing bound never excludes.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Lower bound in the wire format, when set.
    pub fn from_api(&self) -> Option<String> {
        self.from.map(format::format_api_date)
    }

    /// Upper bound in the wire format, when set.
    pub fn to_api(&self) -> Option<String> {
        self.to.map(format::format_api_date)
    }

    /// Human summary of the active filter for display above the list.
    ///
    /// The default monthly range reads as "Current month"; other shapes
    /// spell out their bounds with short dates.
    pub fn description(&self) -> String {
        if *self == Self::current_month() {
            return Message::FilterCurrentMonth.to_string();
        }
        match (self.from, self.to) {
            (Some(from), Some(to)) => Message::FilterBetween(format::format_short_date(from), format::format_short_date(to)),
            (Some(from), None) => Message::FilterFrom(format::format_short_date(from)),
            (None, Some(to)) => Message::FilterUntil(format::format_short_date(to)),
            (None, None) => Message::FilterNone,
        }
        .to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (Some(from), Some(to)) => write!(f, "{}..{}", format::format_api_date(from), format::format_api_date(to)),
            (Some(from), None) => write!(f, "{}..", format::format_api_date(from)),
            (None, Some(to)) => write!(f, "..{}", format::format_api_date(to)),
            (None, None) => write!(f, "open"),
        }
    }
}
