use core::fmt;

use log::trace;

use crate::time::WeekDay;

/// The set of week days an institution is open on.
///
/// Internally a bitmask over the fixed 7-day enumeration; the comma-joined
/// day-name text of the `semana` column only exists at the persistence
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekDaySet(u8);

impl WeekDaySet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn full() -> Self {
        Self(0b0111_1111)
    }

    /// Monday through Friday.
    #[must_use]
    pub const fn weekdays() -> Self {
        Self(
            Self::mask(WeekDay::Monday)
                | Self::mask(WeekDay::Tuesday)
                | Self::mask(WeekDay::Wednesday)
                | Self::mask(WeekDay::Thursday)
                | Self::mask(WeekDay::Friday),
        )
    }

    const fn mask(day: WeekDay) -> u8 {
        1 << day.index()
    }

    #[must_use]
    pub const fn contains(&self, day: WeekDay) -> bool {
        self.0 & Self::mask(day) != 0
    }

    pub fn insert(&mut self, day: WeekDay) {
        self.0 |= Self::mask(day);
    }

    pub fn remove(&mut self, day: WeekDay) {
        self.0 &= !Self::mask(day);
    }

    /// Adds the day when it is absent and removes it when it is present,
    /// so a double toggle restores the original set.
    pub fn toggle(&mut self, day: WeekDay) {
        self.0 ^= Self::mask(day);
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the members in canonical week order (Sunday first),
    /// regardless of the order they were inserted in.
    pub fn iter(&self) -> impl Iterator<Item = WeekDay> {
        let set = *self;
        WeekDay::week().into_iter().filter(move |day| set.contains(*day))
    }

    /// Parses the comma-joined `semana` text.
    ///
    /// Surrounding whitespace is trimmed, empty elements (trailing commas,
    /// doubled separators) are skipped and unknown tokens are dropped
    /// instead of failing, so a mangled row still renders a calendar.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut result = Self::empty();

        for token in text.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            match WeekDay::from_name(token) {
                Some(day) => result.insert(day),
                None => trace!("ignoring unknown day name {:?} in schedule", token),
            }
        }

        result
    }

    /// Joins the member names in canonical week order.
    ///
    /// This is the inverse of [`WeekDaySet::parse`]: re-parsing the result
    /// yields an identical set, with duplicates collapsed.
    #[must_use]
    pub fn to_list_string(&self) -> String {
        self.iter().map(|day| day.name()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for WeekDaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_list_string())
    }
}

impl FromIterator<WeekDay> for WeekDaySet {
    fn from_iter<I: IntoIterator<Item = WeekDay>>(iter: I) -> Self {
        let mut result = Self::empty();
        for day in iter {
            result.insert(day);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn set(days: &[WeekDay]) -> WeekDaySet {
        days.iter().copied().collect()
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            WeekDaySet::parse("Lunes,Martes,Miércoles"),
            set(&[WeekDay::Monday, WeekDay::Tuesday, WeekDay::Wednesday])
        );
        assert_eq!(
            WeekDaySet::parse("Domingo, Sábado"),
            set(&[WeekDay::Sunday, WeekDay::Saturday])
        );
        assert_eq!(WeekDaySet::parse(""), WeekDaySet::empty());
    }

    #[test]
    fn test_parse_discards_garbage() {
        // empty tokens from trailing commas and doubled separators
        assert_eq!(
            WeekDaySet::parse("Lunes, Martes,, Miércoles"),
            set(&[WeekDay::Monday, WeekDay::Tuesday, WeekDay::Wednesday])
        );
        assert_eq!(
            WeekDaySet::parse("Lunes,"),
            set(&[WeekDay::Monday])
        );
        assert_eq!(WeekDaySet::parse(",,, "), WeekDaySet::empty());

        // unknown tokens are filtered, never an error
        assert_eq!(
            WeekDaySet::parse("Lunes,Funday,Martes"),
            set(&[WeekDay::Monday, WeekDay::Tuesday])
        );
        assert_eq!(WeekDaySet::parse("Weekend"), WeekDaySet::empty());

        // duplicates collapse
        assert_eq!(
            WeekDaySet::parse("Viernes,Viernes,Viernes"),
            set(&[WeekDay::Friday])
        );
    }

    #[test]
    fn test_round_trip() {
        // every one of the 128 possible selections survives the text form
        for bits in 0..128 {
            let mut days = WeekDaySet::empty();
            for day in WeekDay::week() {
                if bits & (1 << day.index()) != 0 {
                    days.insert(day);
                }
            }

            assert_eq!(
                WeekDaySet::parse(&days.to_list_string()),
                days,
                "round trip of {:?}",
                days.to_list_string()
            );
        }
    }

    #[test]
    fn test_canonical_order() {
        // insertion order does not matter for the joined text
        let days = set(&[WeekDay::Friday, WeekDay::Monday, WeekDay::Sunday]);
        assert_eq!(days.to_list_string(), "Domingo, Lunes, Viernes");

        assert_eq!(
            WeekDaySet::parse("Viernes,Lunes,Domingo").to_list_string(),
            "Domingo, Lunes, Viernes"
        );
    }

    #[test]
    fn test_toggle() {
        let mut days = WeekDaySet::empty();

        days.toggle(WeekDay::Monday);
        assert!(days.contains(WeekDay::Monday));

        days.toggle(WeekDay::Monday);
        assert!(!days.contains(WeekDay::Monday));
        assert_eq!(days, WeekDaySet::empty());
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(
            WeekDaySet::weekdays().to_list_string(),
            "Lunes, Martes, Miércoles, Jueves, Viernes"
        );
        assert_eq!(WeekDaySet::weekdays().len(), 5);
        assert!(!WeekDaySet::weekdays().contains(WeekDay::Sunday));
        assert!(!WeekDaySet::weekdays().contains(WeekDay::Saturday));
    }

    #[test]
    fn test_len_and_is_empty() {
        assert!(WeekDaySet::empty().is_empty());
        assert_eq!(WeekDaySet::empty().len(), 0);
        assert_eq!(WeekDaySet::full().len(), 7);

        let mut days = WeekDaySet::empty();
        days.insert(WeekDay::Tuesday);
        days.insert(WeekDay::Tuesday);
        assert_eq!(days.len(), 1);

        days.remove(WeekDay::Tuesday);
        assert!(days.is_empty());
    }
}
