// ABOUTME: Daily cumulative progress series and monthly progress versus target
// ABOUTME: Also filters activities down to realistic paces for trend analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors
#![allow(clippy::cast_precision_loss)] // Safe: day indexes are below 400

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use runyear_core::constants::calendar::MONTHS_PER_YEAR;
use runyear_core::constants::units::SECONDS_PER_MINUTE;
use runyear_core::models::Activity;
use serde::{Deserialize, Serialize};

use crate::config::PacingConfig;
use crate::units::meters_to_miles;

/// Cumulative distance against the even-pace line on one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Zero-based day index (0 on January 1st)
    pub day_of_year: u32,
    /// Distance covered up to and including this day
    pub actual: f64,
    /// Distance an even pace would have covered by this day
    pub target: f64,
    /// `actual - target`
    pub difference: f64,
}

/// Distance covered in one month against an even monthly split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthProgress {
    /// Month number, 1 to 12
    pub month: u32,
    /// Distance covered in the month
    pub distance: f64,
    /// Goal divided by twelve
    pub target: f64,
    /// `distance - target`
    pub difference: f64,
}

/// Build one progress point per day from January 1st through `today`.
///
/// The series stops early once the day index reaches `days_per_year`.
/// Activities from other years are ignored.
#[must_use]
pub fn build_progress_series(
    activities: &[Activity],
    yearly_goal: f64,
    today: NaiveDate,
    config: &PacingConfig,
) -> Vec<ProgressPoint> {
    let Some(jan1) = NaiveDate::from_ymd_opt(today.year(), 1, 1) else {
        return Vec::new();
    };
    let today_index = today.ordinal0();

    let mut daily: BTreeMap<u32, f64> = BTreeMap::new();
    for activity in activities {
        let day = activity.start_date.date_naive();
        if day.year() == today.year() && day <= today {
            *daily.entry(day.ordinal0()).or_insert(0.0) += activity.distance_meters;
        }
    }

    let mut series = Vec::new();
    let mut cumulative = 0.0;
    for index in 0..=today_index {
        if f64::from(index) > config.days_per_year {
            break;
        }
        cumulative += daily.get(&index).copied().unwrap_or(0.0);
        let Some(date) = jan1.checked_add_days(Days::new(u64::from(index))) else {
            break;
        };
        let target = f64::from(index) / config.days_per_year * yearly_goal;
        series.push(ProgressPoint {
            date,
            day_of_year: index,
            actual: cumulative,
            target,
            difference: cumulative - target,
        });
    }
    series
}

/// Distance per calendar month (1 to 12); months without activities are absent
#[must_use]
pub fn monthly_distance(activities: &[Activity]) -> BTreeMap<u32, f64> {
    activities.iter().fold(BTreeMap::new(), |mut acc, activity| {
        *acc.entry(activity.start_date.month()).or_insert(0.0) += activity.distance_meters;
        acc
    })
}

/// Progress for all twelve months against `yearly_goal / 12`
#[must_use]
pub fn monthly_progress(activities: &[Activity], yearly_goal: f64) -> Vec<MonthProgress> {
    let totals = monthly_distance(activities);
    let target = yearly_goal / f64::from(MONTHS_PER_YEAR);
    (1..=MONTHS_PER_YEAR)
        .map(|month| {
            let distance = totals.get(&month).copied().unwrap_or(0.0);
            MonthProgress {
                month,
                distance,
                target,
                difference: distance - target,
            }
        })
        .collect()
}

/// Minutes per mile for one activity, 0 without distance or time
#[must_use]
pub fn minutes_per_mile(activity: &Activity) -> f64 {
    let miles = meters_to_miles(activity.distance_meters);
    if miles <= 0.0 || activity.moving_time_seconds == 0 {
        return 0.0;
    }
    activity.moving_time_seconds as f64 / SECONDS_PER_MINUTE / miles
}

/// Keep activities whose pace is strictly between 0 and `max_minutes_per_mile`
#[must_use]
pub fn filter_realistic_paces(activities: &[Activity], max_minutes_per_mile: f64) -> Vec<Activity> {
    let kept: Vec<Activity> = activities
        .iter()
        .filter(|activity| {
            let pace = minutes_per_mile(activity);
            pace > 0.0 && pace < max_minutes_per_mile
        })
        .cloned()
        .collect();

    if kept.len() < activities.len() {
        tracing::debug!(
            dropped = activities.len() - kept.len(),
            "Filtered activities with unrealistic paces"
        );
    }
    kept
}
