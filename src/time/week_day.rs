use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A day of the week, in the order the calendar renders its columns
/// (Sunday first).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum WeekDay {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl WeekDay {
    #[must_use]
    pub const fn week() -> [Self; 7] {
        [
            Self::Sunday,
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
        ]
    }

    /// The column index in a sunday-first week row (0 = Sunday, ..., 6 = Saturday).
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// The canonical name, as it is stored in the `semana` column.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sunday => "Domingo",
            Self::Monday => "Lunes",
            Self::Tuesday => "Martes",
            Self::Wednesday => "Miércoles",
            Self::Thursday => "Jueves",
            Self::Friday => "Viernes",
            Self::Saturday => "Sábado",
        }
    }

    /// The abbreviated column header of the calendar view.
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Sunday => "Dom",
            Self::Monday => "Lun",
            Self::Tuesday => "Mar",
            Self::Wednesday => "Mié",
            Self::Thursday => "Jue",
            Self::Friday => "Vie",
            Self::Saturday => "Sáb",
        }
    }

    // some rows were entered without the accents, they should parse to the
    // same day
    const fn unaccented_name(&self) -> &'static str {
        match self {
            Self::Wednesday => "Miercoles",
            Self::Saturday => "Sabado",
            _ => self.name(),
        }
    }

    /// Looks up a day by its stored name, ignoring surrounding whitespace,
    /// ascii case and missing accents. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();

        Self::week().into_iter().find(|day| {
            day.name().eq_ignore_ascii_case(name)
                || day.unaccented_name().eq_ignore_ascii_case(name)
        })
    }

    #[must_use]
    pub(crate) const fn add_const(self, days: usize) -> Self {
        Self::week()[(self.index() + days % 7) % 7]
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{0}\" is not a known day name")]
pub struct InvalidWeekDayName(String);

impl FromStr for WeekDay {
    type Err = InvalidWeekDayName;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::from_name(string).ok_or_else(|| InvalidWeekDayName(string.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWeekDayNumber;

impl TryFrom<usize> for WeekDay {
    type Error = InvalidWeekDayNumber;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            _ => Err(InvalidWeekDayNumber),
        }
    }
}
