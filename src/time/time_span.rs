use derive_more::Display;

use crate::time::TimeStamp;

/// The opening hours of a day, rendered as `"08:00 - 18:00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[display("{start} - {end}")]
pub struct TimeSpan {
    start: TimeStamp,
    end: TimeStamp,
}

impl TimeSpan {
    #[must_use]
    pub const fn new(start: TimeStamp, end: TimeStamp) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> TimeStamp {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> TimeStamp {
        self.end
    }

    /// An inverted span is a configuration error of the stored schedule,
    /// the caller decides how to surface it. The span itself stays
    /// renderable.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::time_stamp;

    #[test]
    fn test_display() {
        assert_eq!(
            TimeSpan::new(time_stamp!(08:00), time_stamp!(18:00)).to_string(),
            "08:00 - 18:00"
        );
        assert_eq!(
            TimeSpan::new(time_stamp!(00:00), time_stamp!(23:59)).to_string(),
            "00:00 - 23:59"
        );
    }

    #[test]
    fn test_is_inverted() {
        assert!(!TimeSpan::new(time_stamp!(08:00), time_stamp!(18:00)).is_inverted());
        assert!(!TimeSpan::new(time_stamp!(12:00), time_stamp!(12:00)).is_inverted());
        assert!(TimeSpan::new(time_stamp!(18:00), time_stamp!(08:00)).is_inverted());
    }
}
