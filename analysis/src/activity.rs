use chrono::Datelike;

pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DayActivity {
    pub day: &'static str,
    pub count: usize,
}

/// Rounds bucketed by weekday of their timestamp. The output always contains
/// exactly 7 entries, Sunday first, zero-filled.
pub fn analyse(rounds: &[common::Round]) -> Vec<DayActivity> {
    let mut counts = [0usize; 7];

    for round in rounds {
        counts[round.timestamp.weekday().num_days_from_sunday() as usize] += 1;
    }

    WEEKDAYS
        .into_iter()
        .zip(counts)
        .map(|(day, count)| DayActivity { day, count })
        .collect()
}
