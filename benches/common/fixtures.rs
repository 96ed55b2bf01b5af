// ABOUTME: Benchmark fixtures producing deterministic multi-year activity histories
// ABOUTME: Mixed runs and rides spread across whole calendar years
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

//! Benchmark fixtures.
//!
//! Data is derived from the activity index only, so every run measures the
//! same input.

use chrono::{Duration, TimeZone, Utc};
use runyear_core::models::{Activity, SportType};

/// Predefined dataset sizes
#[derive(Debug, Clone, Copy)]
pub enum ActivityBatchSize {
    /// One casual year
    Small,
    /// A committed runner's year
    Medium,
    /// Several years of daily training
    Large,
}

impl ActivityBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 365,
            Self::Large => 2_000,
        }
    }
}

/// Generate `size` activities starting January 1st 2020, roughly daily
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn generate_activities(size: ActivityBatchSize) -> Vec<Activity> {
    let Some(origin) = Utc.with_ymd_and_hms(2020, 1, 1, 7, 0, 0).single() else {
        return Vec::new();
    };

    (0..size.count())
        .map(|index| {
            let sport = if index % 5 == 4 {
                SportType::Ride
            } else {
                SportType::Run
            };
            let distance = match sport {
                SportType::Ride => 20_000.0 + ((index * 911) % 60_000) as f64,
                _ => 3_000.0 + ((index * 251) % 18_000) as f64,
            };
            // 4:30 to 6:30 per km for runs
            let seconds_per_km = 270 + ((index * 37) % 120) as u64;
            let moving_time = (distance / 1_000.0) as u64 * seconds_per_km;
            Activity::new(
                format!("bench-{index}"),
                format!("Bench Activity {index}"),
                sport,
                distance,
                moving_time,
                origin + Duration::hours((index * 22) as i64),
            )
        })
        .collect()
}
