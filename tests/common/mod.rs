use spacebook_availability::schedule::Schedule;
use spacebook_availability::time::WeekDay;

/// A schedule open 08:00 - 18:00 on the given days.
pub fn office_hours(days: &[WeekDay]) -> Schedule {
    Schedule::new(
        "08:00".parse().unwrap(),
        "18:00".parse().unwrap(),
        days.iter().copied().collect(),
    )
}
