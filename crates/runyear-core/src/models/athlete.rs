// ABOUTME: Athlete profile and statistics models from the activity provider
// ABOUTME: Athlete, AthleteStats, and ActivityTotals pass-through definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use serde::{Deserialize, Serialize};

/// Authenticated athlete profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    /// Provider athlete identifier
    pub id: u64,
    /// Public username/handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// `URL` to profile picture/avatar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

/// Totals over one window (recent, year to date, all time)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityTotals {
    /// Number of activities
    #[serde(default)]
    pub count: u64,
    /// Distance in meters
    #[serde(default)]
    pub distance: f64,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: u64,
    /// Elapsed time in seconds
    #[serde(default)]
    pub elapsed_time: u64,
    /// Elevation gain in meters
    #[serde(default)]
    pub elevation_gain: f64,
}

/// Aggregated statistics the provider keeps for an athlete
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AthleteStats {
    /// Longest ride in meters
    #[serde(default)]
    pub biggest_ride_distance: Option<f64>,
    /// Biggest climb in meters
    #[serde(default)]
    pub biggest_climb_elevation_gain: Option<f64>,
    /// Runs in the last four weeks
    #[serde(default)]
    pub recent_run_totals: ActivityTotals,
    /// Runs this year
    #[serde(default)]
    pub ytd_run_totals: ActivityTotals,
    /// All runs
    #[serde(default)]
    pub all_run_totals: ActivityTotals,
    /// Rides in the last four weeks
    #[serde(default)]
    pub recent_ride_totals: ActivityTotals,
    /// Rides this year
    #[serde(default)]
    pub ytd_ride_totals: ActivityTotals,
    /// All rides
    #[serde(default)]
    pub all_ride_totals: ActivityTotals,
}
