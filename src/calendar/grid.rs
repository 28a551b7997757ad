use log::debug;
use serde::Serialize;

use crate::time::{Date, Month, WeekDay, Year};

/// One rendered day of the month view.
///
/// Cells are rebuilt from scratch on every grid computation, they are value
/// objects with no identity beyond their date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    day: usize,
    month: Month,
    year: Year,
    is_current_month: bool,
    date: Date,
}

impl CalendarCell {
    fn new(year: Year, month: Month, day: usize, is_current_month: bool) -> Self {
        Self {
            day,
            month,
            year,
            is_current_month,
            date: Date::new(year, month, day).expect("grid days are taken from month lengths"),
        }
    }

    #[must_use]
    pub const fn day(&self) -> usize {
        self.day
    }

    /// The month this cell's date actually belongs to, which differs from
    /// the grid's nominal month for filler cells.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub const fn is_current_month(&self) -> bool {
        self.is_current_month
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}

/// The month view of the availability calendar: the trailing days of the
/// previous month, every day of the nominal month and the leading days of
/// the next month, in rows of seven starting on Sunday.
///
/// Building a grid is a pure function of the nominal month, it never reads
/// a clock. "Jump to today" is the caller rebuilding the grid with its own
/// current date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year: Year,
    month: Month,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Builds the grid of the month containing `reference`. The day of
    /// month is ignored.
    #[must_use]
    pub fn new(reference: Date) -> Self {
        Self::of(reference.year(), reference.month())
    }

    #[must_use]
    pub fn of(year: Year, month: Month) -> Self {
        let first = Date::first_day(year, month);
        let last = Date::last_day(year, month);

        let mut cells = Vec::with_capacity(42);

        // trailing days of the previous month, ascending; January wraps to
        // December of the prior year
        let leading = first.week_day().index();
        let (prev_year, prev_month) = match month {
            Month::January => (year.prev(), Month::December),
            _ => (year, month.prev()),
        };
        let days_in_prev = prev_year.number_of_days_in_month(prev_month);
        for day in (days_in_prev - leading + 1)..=days_in_prev {
            cells.push(CalendarCell::new(prev_year, prev_month, day, false));
        }

        for day in 1..=last.day() {
            cells.push(CalendarCell::new(year, month, day, true));
        }

        // first days of the next month, filling the final row; December
        // wraps to January of the following year
        let trailing = WeekDay::Saturday.index() - last.week_day().index();
        let (next_year, next_month) = match month {
            Month::December => (year.next(), Month::January),
            _ => (year, month.next()),
        };
        for day in 1..=trailing {
            cells.push(CalendarCell::new(next_year, next_month, day, false));
        }

        debug_assert!(cells.len() % 7 == 0);
        debug!(
            "built a {}-cell grid for {} {}",
            cells.len(),
            month.name(),
            year
        );

        Self { year, month, cells }
    }

    /// The nominal year of the grid.
    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    /// The nominal month of the grid.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    #[must_use]
    pub fn into_cells(self) -> Vec<CalendarCell> {
        self.cells
    }

    /// The rows the view renders, seven cells each.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks_exact(7)
    }

    /// The grid of the month before the nominal one.
    #[must_use]
    pub fn prev(&self) -> Self {
        match self.month {
            Month::January => Self::of(self.year.prev(), Month::December),
            _ => Self::of(self.year, self.month.prev()),
        }
    }

    /// The grid of the month after the nominal one.
    #[must_use]
    pub fn next(&self) -> Self {
        match self.month {
            Month::December => Self::of(self.year.next(), Month::January),
            _ => Self::of(self.year, self.month.next()),
        }
    }

    /// The header label of the view, e.g. `"Enero 2024"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }
}
