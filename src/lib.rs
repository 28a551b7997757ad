//! Core availability logic of the SpaceBook reservation app: the month
//! grid the calendar view renders and the interpretation of an
//! institution's opening schedule against calendar dates.
//!
//! Everything in here is a pure function of its arguments. There is no
//! clock, no network and no shared mutable state, so the host application
//! can call into this crate from any thread or reactive wrapper it likes.

mod utils;

pub mod calendar;
pub mod schedule;
pub mod time;

use log::debug;

use crate::calendar::{CalendarCell, MonthGrid};
use crate::schedule::Schedule;
use crate::time::Date;

/// Pairs every cell of the month containing `reference` with whether the
/// schedule marks that day as a working day.
///
/// A missing schedule yields an all-closed month, which is what the
/// reservation UI uses to disable booking.
#[must_use]
pub fn month_availability(
    schedule: Option<&Schedule>,
    reference: Date,
) -> Vec<(CalendarCell, bool)> {
    let grid = MonthGrid::new(reference);
    debug!(
        "computing availability for {} ({} working days configured)",
        grid.title(),
        schedule.map_or(0, |schedule| schedule.working_days().len()),
    );

    grid.into_cells()
        .into_iter()
        .map(|cell| (cell, schedule::is_working_day(schedule, cell.date())))
        .collect()
}
