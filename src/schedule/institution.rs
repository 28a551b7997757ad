use serde::{Deserialize, Serialize};

use crate::schedule::{self, Schedule};
use crate::time::Date;

/// An institution and the schedule attached to it, if any.
///
/// A schedule belongs to at most one institution; an institution without a
/// schedule has no hours configured and reads as closed every day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Institution {
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "horario", default, skip_serializing_if = "Option::is_none")]
    schedule: Option<Schedule>,
}

impl Institution {
    #[must_use]
    pub fn new(name: impl Into<String>, schedule: Option<Schedule>) -> Self {
        Self {
            name: name.into(),
            schedule,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Gates the reservation actions of the availability view.
    #[must_use]
    pub fn is_open_on(&self, date: Date) -> bool {
        schedule::is_working_day(self.schedule.as_ref(), date)
    }
}
