// ABOUTME: Groups activities into weekly, monthly, or quarterly buckets
// ABOUTME: Each bucket carries an unweighted average pace, count, distance, and member ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors
#![allow(clippy::cast_precision_loss)] // Safe: bucket sizes are small

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use runyear_core::models::Activity;
use serde::{Deserialize, Serialize};

/// Bucket width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodGranularity {
    /// ISO weeks, Monday-anchored
    Weekly,
    /// Calendar months
    #[default]
    Monthly,
    /// Calendar quarters
    Quarterly,
}

impl PeriodGranularity {
    /// Bucket key for `date`: `2024-W03`, `2024-01`, or `2024-Q1`
    #[must_use]
    pub fn period_key(self, date: &DateTime<Utc>) -> String {
        match self {
            Self::Weekly => {
                let week = date.iso_week();
                format!("{}-W{:02}", week.year(), week.week())
            }
            Self::Monthly => format!("{}-{:02}", date.year(), date.month()),
            Self::Quarterly => format!("{}-Q{}", date.year(), date.month0() / 3 + 1),
        }
    }
}

/// Activities sharing one period key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodBucket {
    /// Period key
    pub period: String,
    /// Start date of the earliest member
    pub date: DateTime<Utc>,
    /// Year of the earliest member
    pub year: i32,
    /// Mean of the members' values (seconds per meter unless aggregated with a custom value)
    pub average_pace: f64,
    /// Number of members
    pub activity_count: usize,
    /// Sum of member distances in meters
    pub total_distance_meters: f64,
    /// Member activity ids in chronological order
    pub activity_ids: Vec<String>,
}

struct Accumulator {
    date: DateTime<Utc>,
    value_sum: f64,
    total_distance_meters: f64,
    activity_ids: Vec<String>,
}

/// Bucket activities by period and average their pace (seconds per meter)
#[must_use]
pub fn aggregate_by_period(
    activities: &[Activity],
    granularity: PeriodGranularity,
) -> Vec<PeriodBucket> {
    aggregate_with(activities, granularity, Activity::pace_seconds_per_meter)
}

/// Bucket activities by period and average `value_fn` over each bucket.
///
/// Input is sorted chronologically (stable) first, so bucket membership and
/// each bucket's `date` do not depend on input order. Output is sorted by
/// `date` ascending.
#[must_use]
pub fn aggregate_with<F>(
    activities: &[Activity],
    granularity: PeriodGranularity,
    value_fn: F,
) -> Vec<PeriodBucket>
where
    F: Fn(&Activity) -> f64,
{
    let mut sorted: Vec<&Activity> = activities.iter().collect();
    sorted.sort_by_key(|activity| activity.start_date);

    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Accumulator> = HashMap::new();

    for activity in sorted {
        let key = granularity.period_key(&activity.start_date);
        let entry = buckets.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            Accumulator {
                date: activity.start_date,
                value_sum: 0.0,
                total_distance_meters: 0.0,
                activity_ids: Vec::new(),
            }
        });
        entry.value_sum += value_fn(activity);
        entry.total_distance_meters += activity.distance_meters;
        entry.activity_ids.push(activity.id.clone());
    }

    let mut result: Vec<PeriodBucket> = order
        .into_iter()
        .filter_map(|period| {
            let acc = buckets.remove(&period)?;
            let count = acc.activity_ids.len();
            Some(PeriodBucket {
                year: acc.date.year(),
                date: acc.date,
                average_pace: acc.value_sum / count as f64,
                activity_count: count,
                total_distance_meters: acc.total_distance_meters,
                activity_ids: acc.activity_ids,
                period,
            })
        })
        .collect();
    result.sort_by_key(|bucket| bucket.date);

    tracing::debug!(
        granularity = ?granularity,
        activities = activities.len(),
        buckets = result.len(),
        "Aggregated activities by period"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use runyear_core::models::SportType;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_period_keys() {
        let date = at(2024, 1, 5);
        assert_eq!(PeriodGranularity::Weekly.period_key(&date), "2024-W01");
        assert_eq!(PeriodGranularity::Monthly.period_key(&date), "2024-01");
        assert_eq!(PeriodGranularity::Quarterly.period_key(&at(2024, 8, 1)), "2024-Q3");
        // ISO week-year differs from calendar year around New Year
        assert_eq!(
            PeriodGranularity::Weekly.period_key(&at(2024, 12, 30)),
            "2025-W01"
        );
    }

    #[test]
    fn test_bucket_date_is_earliest_member_regardless_of_input_order() {
        let late = Activity::new("b", "b", SportType::Run, 10_000.0, 3_000, at(2024, 1, 20));
        let early = Activity::new("a", "a", SportType::Run, 5_000.0, 1_500, at(2024, 1, 5));

        let buckets = aggregate_by_period(&[late, early], PeriodGranularity::Monthly);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].date, at(2024, 1, 5));
        assert_eq!(buckets[0].activity_ids, vec!["a", "b"]);
    }

    #[test]
    fn test_granularity_serde_names() {
        assert_eq!(
            serde_json::to_string(&PeriodGranularity::Quarterly).unwrap(),
            "\"quarterly\""
        );
    }
}
