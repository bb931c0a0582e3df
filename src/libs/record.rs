//! Attendance record entity and raw-payload mapping.

use crate::api::RawAttendance;
use crate::libs::format;
use chrono::{NaiveDate, NaiveTime};
use std::hash::{Hash, Hasher};

/// One attended class, ready for display.
///
/// Identity is the server id alone: two records with the same id compare
/// equal and hash together even when other fields differ, which is what
/// list diffing needs when the server re-sends updated entries.
#[derive(Debug, Clone)]
pub struct AttendanceRecord {
    pub id: String,
    pub class_name: String,
    pub venue: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: i32,
}

impl AttendanceRecord {
    /// Builds a record from a raw payload entry.
    ///
    /// Returns `None` for entries that cannot be displayed: a missing or
    /// blank id, or a date or time that does not parse. A missing class
    /// name or venue becomes an empty string and a missing duration
    /// becomes zero, both of which render fine.
    pub fn from_raw(raw: RawAttendance) -> Option<Self> {
        let id = raw.id.filter(|id| !id.trim().is_empty())?;
        let date = raw.date.as_deref().and_then(format::parse_api_date)?;
        let time = raw.time.as_deref().and_then(format::parse_time)?;
        Some(Self {
            id,
            class_name: raw.class_name.unwrap_or_default(),
            venue: raw.venue.unwrap_or_default(),
            date,
            time,
            duration_minutes: raw.duration_minutes.unwrap_or(0),
        })
    }

    /// Class date in the long display form, e.g. `15 January 2025`.
    pub fn formatted_date(&self) -> String {
        format::format_display_date(self.date)
    }

    /// Class start time, e.g. `18:30`.
    pub fn formatted_time(&self) -> String {
        format::format_display_time(self.time)
    }

    /// Class length, e.g. `1h 30min`.
    pub fn formatted_duration(&self) -> String {
        format::format_duration_minutes(self.duration_minutes)
    }

    /// Class date in the wire format.
    pub fn api_date(&self) -> String {
        format::format_api_date(self.date)
    }

    /// Inclusive containment between two optional bounds.
    pub fn is_within(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        from.is_none_or(|from| self.date >= from) && to.is_none_or(|to| self.date <= to)
    }
}

impl PartialEq for AttendanceRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AttendanceRecord {}

impl Hash for AttendanceRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
