// ABOUTME: Activity fixtures for integration tests
// ABOUTME: Builders for runs and rides on fixed UTC dates

use chrono::{DateTime, TimeZone, Utc};
use runyear_core::models::{Activity, SportType};

/// Midday UTC on the given date
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// A run with an id derived from its date
pub fn run(year: i32, month: u32, day: u32, meters: f64, seconds: u64) -> Activity {
    Activity::new(
        format!("run-{year}-{month:02}-{day:02}"),
        "Run",
        SportType::Run,
        meters,
        seconds,
        at(year, month, day),
    )
}

/// A ride with an id derived from its date
pub fn ride(year: i32, month: u32, day: u32, meters: f64, seconds: u64) -> Activity {
    Activity::new(
        format!("ride-{year}-{month:02}-{day:02}"),
        "Ride",
        SportType::Ride,
        meters,
        seconds,
        at(year, month, day),
    )
}

/// Weekly 5 km runs at 5:00/km through the first `weeks` weeks of `year`
pub fn weekly_runs(year: i32, weeks: u32) -> Vec<Activity> {
    (0..weeks)
        .map(|week| {
            let start = at(year, 1, 1) + chrono::Duration::weeks(i64::from(week));
            Activity::new(
                format!("weekly-{year}-{week}"),
                "Weekly Run",
                SportType::Run,
                5_000.0,
                1_500,
                start,
            )
        })
        .collect()
}
