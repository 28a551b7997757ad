use core::fmt;

use serde::{Deserialize, Serialize};

use crate::schedule::WeekDaySet;
use crate::time::{Date, TimeSpan, TimeStamp};

/// The opening schedule of an institution, one row of the backend's
/// `horario` table.
///
/// The interpreter only ever reads a schedule. Edits go through
/// [`ScheduleDraft`](crate::schedule::ScheduleDraft) and produce new values,
/// the row itself is never mutated in place.
///
/// `start_time < end_time` is deliberately not enforced, see
/// [`TimeSpan::is_inverted`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Schedule {
    #[serde(rename = "horainicio")]
    start_time: TimeStamp,
    #[serde(rename = "horafin")]
    end_time: TimeStamp,
    /// Comma-joined day names, e.g. `"Lunes,Martes,Miércoles"`.
    #[serde(rename = "semana", default)]
    working_days_text: String,
}

impl Schedule {
    #[must_use]
    pub fn new(start_time: TimeStamp, end_time: TimeStamp, working_days: WeekDaySet) -> Self {
        Self {
            start_time,
            end_time,
            working_days_text: working_days.to_list_string(),
        }
    }

    #[must_use]
    pub const fn start_time(&self) -> TimeStamp {
        self.start_time
    }

    #[must_use]
    pub const fn end_time(&self) -> TimeStamp {
        self.end_time
    }

    /// The day names exactly as stored, before any parsing.
    #[must_use]
    pub fn working_days_text(&self) -> &str {
        &self.working_days_text
    }

    /// The parsed day set. Empty or mangled text parses to a reduced but
    /// valid set, never an error.
    #[must_use]
    pub fn working_days(&self) -> WeekDaySet {
        WeekDaySet::parse(&self.working_days_text)
    }

    /// Whether `date` falls on one of the configured working days.
    #[must_use]
    pub fn is_working_day(&self, date: Date) -> bool {
        self.working_days().contains(date.week_day())
    }

    #[must_use]
    pub const fn hours(&self) -> TimeSpan {
        TimeSpan::new(self.start_time, self.end_time)
    }

    /// The opening hours as the view renders them, e.g. `"08:00 - 18:00"`.
    /// Seconds of the stored value were already truncated at parse time.
    #[must_use]
    pub fn format_hours(&self) -> String {
        self.hours().to_string()
    }

    /// Rewrites the day text in canonical week order with duplicates
    /// collapsed, so equivalent schedules serialize identically.
    #[must_use]
    pub fn canonicalized(&self) -> Self {
        Self::new(self.start_time, self.end_time, self.working_days())
    }

    #[must_use]
    pub fn with_days(&self, working_days: WeekDaySet) -> Self {
        Self::new(self.start_time, self.end_time, working_days)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hours(), self.working_days())
    }
}
