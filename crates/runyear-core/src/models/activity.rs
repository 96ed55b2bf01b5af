// ABOUTME: Recorded workout model as returned by the activity provider
// ABOUTME: Read-only activity record with zero-guarded pace and speed accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::SportType;

/// A single recorded workout
///
/// Activities are produced by the provider, never mutated, and live for a
/// single request.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use runyear_core::models::{Activity, SportType};
///
/// let run = Activity::new(
///     "1",
///     "Morning Run",
///     SportType::Run,
///     5000.0,
///     1500,
///     Utc.with_ymd_and_hms(2024, 1, 5, 7, 0, 0).unwrap(),
/// );
/// assert!((run.pace_seconds_per_meter() - 0.3).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Provider-specific activity identifier
    pub id: String,
    /// Activity title
    pub name: String,
    /// Sport type reported by the provider
    pub sport_type: SportType,
    /// Distance covered in meters
    pub distance_meters: f64,
    /// Moving time in seconds
    pub moving_time_seconds: u64,
    /// When the activity started (UTC)
    pub start_date: DateTime<Utc>,
}

impl Activity {
    /// Create a new activity record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sport_type: SportType,
        distance_meters: f64,
        moving_time_seconds: u64,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sport_type,
            distance_meters: distance_meters.max(0.0),
            moving_time_seconds,
            start_date,
        }
    }

    /// Pace in seconds per meter, or 0 when distance or time is zero
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Safe: moving times are far below 2^52 seconds
    pub fn pace_seconds_per_meter(&self) -> f64 {
        if self.distance_meters <= 0.0 || self.moving_time_seconds == 0 {
            return 0.0;
        }
        self.moving_time_seconds as f64 / self.distance_meters
    }

    /// Average speed in meters per second, or 0 when time is zero
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_speed(&self) -> f64 {
        if self.moving_time_seconds == 0 {
            return 0.0;
        }
        self.distance_meters / self.moving_time_seconds as f64
    }

    /// Calendar year (UTC) the activity started in
    #[must_use]
    pub fn year(&self) -> i32 {
        self.start_date.year()
    }
}
