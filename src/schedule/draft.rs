use thiserror::Error;

use crate::schedule::{Schedule, WeekDaySet};
use crate::time::{TimeStamp, WeekDay};
use crate::time_stamp;

/// The transient state of a schedule edit session.
///
/// This is plain caller-held state, nothing here touches a persisted
/// schedule until [`ScheduleDraft::validate`] produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    start_time: Option<TimeStamp>,
    end_time: Option<TimeStamp>,
    selection: WeekDaySet,
}

/// Rejections of [`ScheduleDraft::validate`], surfaced verbatim to the
/// editing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Debe seleccionar al menos un día")]
    NoDaysSelected,
    #[error("Debe especificar hora de inicio y fin")]
    MissingTime,
}

impl ScheduleDraft {
    #[must_use]
    pub fn new(
        start_time: Option<TimeStamp>,
        end_time: Option<TimeStamp>,
        selection: WeekDaySet,
    ) -> Self {
        Self {
            start_time,
            end_time,
            selection,
        }
    }

    /// Prefills the edit session from an existing schedule row.
    #[must_use]
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            start_time: Some(schedule.start_time()),
            end_time: Some(schedule.end_time()),
            selection: schedule.working_days(),
        }
    }

    #[must_use]
    pub const fn start_time(&self) -> Option<TimeStamp> {
        self.start_time
    }

    #[must_use]
    pub const fn end_time(&self) -> Option<TimeStamp> {
        self.end_time
    }

    #[must_use]
    pub const fn selection(&self) -> WeekDaySet {
        self.selection
    }

    pub fn set_start_time(&mut self, start_time: Option<TimeStamp>) {
        self.start_time = start_time;
    }

    pub fn set_end_time(&mut self, end_time: Option<TimeStamp>) {
        self.end_time = end_time;
    }

    /// Adds the day to the selection when absent, removes it when present.
    /// Toggling twice restores the original selection.
    pub fn toggle_day(&mut self, day: WeekDay) {
        self.selection.toggle(day);
    }

    #[must_use]
    pub const fn is_selected(&self, day: WeekDay) -> bool {
        self.selection.contains(day)
    }

    /// Checks the draft the way the edit modal does: the day selection
    /// first, then the time bounds. A successful validation yields a
    /// schedule whose day text is already canonical.
    ///
    /// `start < end` is deliberately not checked.
    pub fn validate(&self) -> Result<Schedule, ValidationError> {
        if self.selection.is_empty() {
            return Err(ValidationError::NoDaysSelected);
        }

        let (Some(start_time), Some(end_time)) = (self.start_time, self.end_time) else {
            return Err(ValidationError::MissingTime);
        };

        Ok(Schedule::new(start_time, end_time, self.selection))
    }
}

impl Default for ScheduleDraft {
    /// The prefill for a brand new schedule: office hours on week days.
    fn default() -> Self {
        Self {
            start_time: Some(time_stamp!(08:00)),
            end_time: Some(time_stamp!(18:00)),
            selection: WeekDaySet::weekdays(),
        }
    }
}
