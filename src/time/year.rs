use std::ops::{Add, AddAssign};

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::time::{Month, WeekDay};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(from = "usize")]
#[serde(into = "usize")]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    /// The weekday of 0000-01-01, the base date for all weekday math.
    const BASE_WEEK_DAY: WeekDay = WeekDay::Saturday;

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added
    /// to February, so it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        !self.is_common_year() && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    /// The length of the month in this year. February follows the leap
    /// rule, so the "last day of the month" never needs a lookup table
    /// elsewhere.
    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        // days elapsed since the base date
        let mut days = day - 1;

        let mut current_month = 1;
        while current_month < month.as_usize() {
            days += self.number_of_days_in_month(Month::new(current_month));
            current_month += 1;
        }

        let mut year = 0;
        while year < self.as_usize() {
            days += Year::new(year).days();
            year += 1;
        }

        Self::BASE_WEEK_DAY.add_const(days)
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn prev(&self) -> Self {
        Self(self.0 - 1)
    }
}

impl Add<usize> for Year {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.as_usize() + rhs)
    }
}

impl AddAssign<usize> for Year {
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Year> for usize {
    fn from(value: Year) -> Self {
        value.as_usize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_leap_year() {
        macro_rules! assert_leap_years {
            ( $( $year:expr ),* $(,)? ) => {
                $(
                    assert!(
                        Year::new($year).is_leap_year(),
                        concat!(stringify!($year), " should be a leap year")
                    );
                )*
            };
        }

        macro_rules! assert_not_leap_years {
            ( $( $year:expr ),* $(,)? ) => {
                $(
                    assert!(
                        !Year::new($year).is_leap_year(),
                        concat!(stringify!($year), " should not be a leap year")
                    );
                )*
            };
        }

        assert_leap_years![
            1904, 1908, 1912, 1916, 1920, 1924, 1928, 1932, 1936, 1940, 1944, 1948, 1952, 1956,
            1960, 1964, 1968, 1972, 1976, 1980, 1984, 1988, 1992, 1996, 2000, 2004, 2008, 2012,
            2016, 2020, 2024, 2028, 2032, 2036, 2040, 2044, 2048, 2052, 2056, 2060, 2064, 2068,
            2072, 2076, 2080, 2084, 2088, 2092, 2096
        ];

        assert_not_leap_years![
            1900, 1901, 1902, 1903, 1905, 1906, 1907, 1909, 1910, 1911, 1913, 1914, 1915, 1917,
            1918, 1919, 1921, 1922, 1923, 1925, 1926, 1927, 1929, 1930, 1931, 2100, 2200, 2300,
            2500, 2600, 2700, 2900, 3000
        ];
    }

    #[test]
    fn test_days() {
        // this test runs under the assumption that year.is_leap_year works correctly
        for year in (1904..=3000).map(Year::new) {
            if year.is_leap_year() {
                assert_eq!(year.days(), 366, "{} should have 366 days", year.as_usize());
            } else {
                assert_eq!(year.days(), 365, "{} should have 365 days", year.as_usize());
            }
        }
    }

    #[test]
    fn test_number_of_days_in_month() {
        assert_eq!(Year::new(2024).number_of_days_in_month(Month::February), 29);
        assert_eq!(Year::new(2023).number_of_days_in_month(Month::February), 28);
        assert_eq!(Year::new(2100).number_of_days_in_month(Month::February), 28);
        assert_eq!(Year::new(2000).number_of_days_in_month(Month::February), 29);

        let year = Year::new(2022);
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, days) in Month::months().into_iter().zip(expected) {
            assert_eq!(year.number_of_days_in_month(month), days);
        }
    }

    #[test]
    fn test_week_day() {
        assert_eq!(Year::new(2000).week_day(Month::January, 1), WeekDay::Saturday);
        assert_eq!(Year::new(2000).week_day(Month::January, 2), WeekDay::Sunday);
        assert_eq!(Year::new(2000).week_day(Month::January, 3), WeekDay::Monday);

        assert_eq!(Year::new(2001).week_day(Month::January, 15), WeekDay::Monday);
        assert_eq!(Year::new(2002).week_day(Month::March, 10), WeekDay::Sunday);
        assert_eq!(
            Year::new(2021).week_day(Month::December, 24),
            WeekDay::Friday
        );

        // leap day handling
        assert_eq!(
            Year::new(2024).week_day(Month::February, 1),
            WeekDay::Thursday
        );
        assert_eq!(
            Year::new(2024).week_day(Month::February, 29),
            WeekDay::Thursday
        );
        assert_eq!(Year::new(2024).week_day(Month::March, 1), WeekDay::Friday);
    }

    #[test]
    fn test_week_days_are_consecutive() {
        let mut expected = Year::new(2019).week_day(Month::January, 1);

        for year in (2019..=2026).map(Year::new) {
            for month in Month::months() {
                for day in 1..=year.number_of_days_in_month(month) {
                    assert_eq!(
                        year.week_day(month, day),
                        expected,
                        "weekday of {:04}-{:02}-{:02}",
                        year,
                        month,
                        day
                    );
                    expected = expected.add_const(1);
                }
            }
        }
    }
}
