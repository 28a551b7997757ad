use crate::time::Date;

mod week_day_set;
pub use week_day_set::*;
#[allow(clippy::module_inception)]
mod schedule;
pub use schedule::*;
mod institution;
pub use institution::*;
mod draft;
pub use draft::*;

/// Whether the schedule marks `date` as a working day.
///
/// A missing schedule means no hours are configured, which reads as closed
/// every day. Callers use this to gate reservation and availability UI.
#[must_use]
pub fn is_working_day(schedule: Option<&Schedule>, date: Date) -> bool {
    schedule.map_or(false, |schedule| schedule.is_working_day(date))
}
