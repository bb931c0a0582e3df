//! Date range validation rules for history queries.
//!
//! Validation is pure: given the range, the caller's notion of today, and a
//! [`RangePolicy`], the outcome is fully deterministic. The rules run in a
//! fixed order and the first violation wins:
//!
//! 1. both bounds set with `from` after `to`
//! 2. a bound in the future
//! 3. a bound before the earliest queryable date
//! 4. a complete range wider than the policy allows
//!
//! A rejected candidate range is never adopted anywhere; callers surface
//! [`ValidationError::message`] and keep whatever range was active before.

use crate::libs::date_range::DateRange;
use crate::libs::format;
use crate::libs::messages::Message;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which bound of a range a rule rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    From,
    To,
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::From => write!(f, "from"),
            RangeBound::To => write!(f, "to"),
        }
    }
}

/// A rejected date range, with the rule that rejected it.
///
/// The `#[error]` strings are log-facing; the sentence shown to a member
/// comes from [`ValidationError::message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("range start {from} is after range end {to}")]
    FromAfterTo { from: NaiveDate, to: NaiveDate },

    #[error("{bound} bound {date} is in the future")]
    InFuture { bound: RangeBound, date: NaiveDate },

    #[error("{bound} bound {date} is before the earliest queryable date {min}")]
    TooOld {
        bound: RangeBound,
        date: NaiveDate,
        min: NaiveDate,
    },

    #[error("range spans {days} days, over the allowed {max_days}")]
    SpanTooWide { days: i64, max_days: i64 },
}

impl ValidationError {
    /// User-facing sentence for this rejection.
    pub fn message(&self) -> Message {
        match self {
            ValidationError::FromAfterTo { .. } => Message::FilterFromAfterTo,
            ValidationError::InFuture { bound, .. } => Message::FilterDateInFuture(bound.to_string()),
            ValidationError::TooOld { bound, min, .. } => {
                Message::FilterDateTooOld(bound.to_string(), format::format_short_date(*min))
            }
            ValidationError::SpanTooWide { max_days, .. } => Message::FilterRangeTooWide(span_label(*max_days)),
        }
    }
}

/// Limits applied to history queries.
///
/// Hosts can load this from their configuration file next to
/// [`crate::api::studio::StudioConfig`]; the defaults match the service
/// limits of two years of span and five years of lookback.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RangePolicy {
    /// Widest allowed distance between the bounds of a complete range.
    #[serde(default = "default_max_span_days")]
    pub max_span_days: i64,
    /// How far back from today a bound may reach.
    #[serde(default = "default_max_lookback_years")]
    pub max_lookback_years: i32,
}

fn default_max_span_days() -> i64 {
    730
}

fn default_max_lookback_years() -> i32 {
    5
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self {
            max_span_days: default_max_span_days(),
            max_lookback_years: default_max_lookback_years(),
        }
    }
}

impl RangePolicy {
    /// Earliest date a query bound may carry, relative to `today`.
    pub fn min_date(&self, today: NaiveDate) -> NaiveDate {
        let target_year = today.year() - self.max_lookback_years;
        // Feb 29 clamps to Feb 28 when the target year is not a leap year.
        today
            .with_year(target_year)
            .or_else(|| today.pred_opt().and_then(|day| day.with_year(target_year)))
            .unwrap_or(today)
    }
}

/// Checks `range` against the rules, first violation first.
///
/// `today` is injected rather than read from the clock so the rules stay
/// deterministic under test and across midnight.
pub fn validate(range: &DateRange, today: NaiveDate, policy: &RangePolicy) -> Result<(), ValidationError> {
    if let (Some(from), Some(to)) = (range.from, range.to) {
        if from > to {
            return Err(ValidationError::FromAfterTo { from, to });
        }
    }

    for (bound, date) in bounds(range) {
        if date > today {
            return Err(ValidationError::InFuture { bound, date });
        }
    }

    let min = policy.min_date(today);
    for (bound, date) in bounds(range) {
        if date < min {
            return Err(ValidationError::TooOld { bound, date, min });
        }
    }

    if let (Some(from), Some(to)) = (range.from, range.to) {
        let days = format::days_between(from, to);
        if days > policy.max_span_days {
            return Err(ValidationError::SpanTooWide {
                days,
                max_days: policy.max_span_days,
            });
        }
    }

    Ok(())
}

fn bounds(range: &DateRange) -> impl Iterator<Item = (RangeBound, NaiveDate)> {
    range
        .from
        .map(|date| (RangeBound::From, date))
        .into_iter()
        .chain(range.to.map(|date| (RangeBound::To, date)))
}

fn span_label(max_days: i64) -> String {
    if max_days > 0 && max_days % 365 == 0 {
        let years = max_days / 365;
        if years == 1 {
            "1 year".to_string()
        } else {
            format!("{} years", years)
        }
    } else {
        format!("{} days", max_days)
    }
}
