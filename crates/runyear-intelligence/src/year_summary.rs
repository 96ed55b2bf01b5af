// ABOUTME: Per-year totals and distance-range breakdowns for one sport
// ABOUTME: Average pace is total time over total distance, never a mean of paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use std::collections::BTreeMap;

use runyear_core::models::Activity;
use serde::{Deserialize, Serialize};

use crate::sport_profile::SportProfile;

/// Distance bracket an activity falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistanceRange {
    /// Under 5 km for runs
    Short,
    /// 5 km up to 10 km for runs
    Medium,
    /// 10 km up to a half marathon for runs
    Long,
    /// Half marathon and beyond for runs
    UltraLong,
}

impl DistanceRange {
    /// All ranges, shortest first
    pub const ALL: [Self; 4] = [Self::Short, Self::Medium, Self::Long, Self::UltraLong];
}

/// Totals for one distance range
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeStats {
    /// Activities in the range
    pub count: usize,
    /// Seconds per meter across the range, 0 when empty
    pub average_pace: f64,
    /// Meters covered in the range
    pub total_distance: f64,
}

/// One calendar year of a single sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    /// Calendar year
    pub year: i32,
    /// Number of activities
    pub total_runs: usize,
    /// Meters
    pub total_distance: f64,
    /// Moving seconds
    pub total_time: u64,
    /// Seconds per meter, 0 when no distance was covered
    pub average_pace: f64,
    /// Breakdown by distance range; every range is present
    pub range_analysis: BTreeMap<DistanceRange, RangeStats>,
}

#[derive(Default)]
struct Totals {
    count: usize,
    distance: f64,
    time: u64,
}

impl Totals {
    fn add(&mut self, activity: &Activity) {
        self.count += 1;
        self.distance += activity.distance_meters;
        self.time += activity.moving_time_seconds;
    }

    #[allow(clippy::cast_precision_loss)] // Safe: moving seconds stay far below 2^52
    fn pace(&self) -> f64 {
        if self.distance > 0.0 {
            self.time as f64 / self.distance
        } else {
            0.0
        }
    }
}

impl YearSummary {
    /// Summary for a year with no data, or whose fetch failed
    #[must_use]
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            total_runs: 0,
            total_distance: 0.0,
            total_time: 0,
            average_pace: 0.0,
            range_analysis: DistanceRange::ALL
                .into_iter()
                .map(|range| (range, RangeStats::default()))
                .collect(),
        }
    }

    /// Summarize `activities`, which the caller has already filtered to one sport and year
    #[must_use]
    pub fn from_activities(year: i32, activities: &[Activity], profile: &SportProfile) -> Self {
        let mut overall = Totals::default();
        let mut by_range: BTreeMap<DistanceRange, Totals> = DistanceRange::ALL
            .into_iter()
            .map(|range| (range, Totals::default()))
            .collect();

        for activity in activities {
            overall.add(activity);
            by_range
                .entry(profile.range_for(activity.distance_meters))
                .or_default()
                .add(activity);
        }

        let range_analysis = by_range
            .into_iter()
            .map(|(range, totals)| {
                (
                    range,
                    RangeStats {
                        count: totals.count,
                        average_pace: totals.pace(),
                        total_distance: totals.distance,
                    },
                )
            })
            .collect();

        Self {
            year,
            total_runs: overall.count,
            total_distance: overall.distance,
            total_time: overall.time,
            average_pace: overall.pace(),
            range_analysis,
        }
    }

    /// Whether the year holds any activities
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.total_runs > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use runyear_core::models::SportType;

    fn run(id: &str, meters: f64, seconds: u64) -> Activity {
        Activity::new(
            id,
            "Run",
            SportType::Run,
            meters,
            seconds,
            Utc.with_ymd_and_hms(2023, 6, 1, 7, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_average_pace_is_time_over_distance() {
        let summary = YearSummary::from_activities(
            2023,
            &[run("a", 5_000.0, 1_500), run("b", 15_000.0, 5_500)],
            &SportProfile::run(),
        );
        assert_eq!(summary.total_runs, 2);
        assert_eq!(summary.total_time, 7_000);
        assert!((summary.average_pace - 0.35).abs() < 1e-12);
        assert_eq!(summary.range_analysis[&DistanceRange::Medium].count, 1);
        assert_eq!(summary.range_analysis[&DistanceRange::Long].count, 1);
        assert_eq!(summary.range_analysis[&DistanceRange::Short].count, 0);
    }

    #[test]
    fn test_empty_year_has_all_ranges_zeroed() {
        let summary = YearSummary::empty(2020);
        assert!(!summary.has_data());
        assert_eq!(summary.range_analysis.len(), 4);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["rangeAnalysis"]["ultraLong"].is_object());
    }
}
