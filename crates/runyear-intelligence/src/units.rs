// ABOUTME: Distance, pace, and speed conversions with display formatting
// ABOUTME: Stateless helpers; zero inputs map to zero or placeholder outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

//! Unit conversions and display formatting
//!
//! Paces are carried internally as seconds per meter and speeds as meters
//! per second. Every function here is total: a zero pace or speed produces
//! `0` or a `"0:00"`-style placeholder instead of dividing by zero.

use runyear_core::constants::units::{
    METERS_PER_KM, METERS_PER_MILE, MILES_PER_METER, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use serde::{Deserialize, Serialize};

use crate::sport_profile::{MetricKind, SportProfile};

/// Display unit for distances, paces, and speeds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Statute miles
    #[default]
    #[serde(rename = "mi")]
    Miles,
    /// Kilometers
    #[serde(rename = "km")]
    Kilometers,
}

impl DistanceUnit {
    /// Short label (`mi` or `km`)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Miles => "mi",
            Self::Kilometers => "km",
        }
    }

    /// Meters in one unit, as used by the pace and speed conversions
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::Miles => METERS_PER_MILE,
            Self::Kilometers => METERS_PER_KM,
        }
    }
}

/// Convert meters to miles
#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters * MILES_PER_METER
}

/// Convert meters to kilometers
#[must_use]
pub fn meters_to_kilometers(meters: f64) -> f64 {
    meters / METERS_PER_KM
}

/// Convert miles to meters
#[must_use]
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// Convert kilometers to meters
#[must_use]
pub fn kilometers_to_meters(kilometers: f64) -> f64 {
    kilometers * METERS_PER_KM
}

/// Convert meters to the given display unit
#[must_use]
pub fn convert_distance(meters: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Miles => meters_to_miles(meters),
        DistanceUnit::Kilometers => meters_to_kilometers(meters),
    }
}

/// Convert seconds per meter to minutes per mile (0 stays 0)
#[must_use]
pub fn pace_to_minutes_per_mile(seconds_per_meter: f64) -> f64 {
    pace_to_minutes_per_unit(seconds_per_meter, DistanceUnit::Miles)
}

/// Convert seconds per meter to minutes per kilometer (0 stays 0)
#[must_use]
pub fn pace_to_minutes_per_km(seconds_per_meter: f64) -> f64 {
    pace_to_minutes_per_unit(seconds_per_meter, DistanceUnit::Kilometers)
}

/// Convert seconds per meter to minutes per display unit (0 stays 0)
#[must_use]
pub fn pace_to_minutes_per_unit(seconds_per_meter: f64, unit: DistanceUnit) -> f64 {
    if seconds_per_meter == 0.0 {
        return 0.0;
    }
    seconds_per_meter * unit.meters() / SECONDS_PER_MINUTE
}

/// Convert meters per second to miles per hour
#[must_use]
pub fn speed_to_mph(meters_per_second: f64) -> f64 {
    speed_to_unit_per_hour(meters_per_second, DistanceUnit::Miles)
}

/// Convert meters per second to kilometers per hour
#[must_use]
pub fn speed_to_kph(meters_per_second: f64) -> f64 {
    speed_to_unit_per_hour(meters_per_second, DistanceUnit::Kilometers)
}

/// Convert meters per second to display units per hour
#[must_use]
pub fn speed_to_unit_per_hour(meters_per_second: f64, unit: DistanceUnit) -> f64 {
    meters_per_second * SECONDS_PER_HOUR / unit.meters()
}

/// Format a distance in meters, e.g. `"12.43 mi"`
#[must_use]
pub fn format_distance(meters: f64, unit: DistanceUnit) -> String {
    format!("{:.2} {}", convert_distance(meters, unit), unit.label())
}

/// Format a speed as pace `m:ss` per unit (`"0:00"` when stationary)
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Safe: pace minutes are small
pub fn format_pace(meters_per_second: f64, unit: DistanceUnit) -> String {
    if meters_per_second == 0.0 {
        return "0:00".into();
    }
    let seconds_per_unit = unit.meters() / meters_per_second;
    let minutes = (seconds_per_unit / SECONDS_PER_MINUTE).floor() as i64;
    let seconds = (seconds_per_unit % SECONDS_PER_MINUTE).floor() as i64;
    format!("{minutes}:{seconds:02}")
}

/// Format a speed in units per hour with one decimal (`"0.0"` when stationary)
#[must_use]
pub fn format_speed(meters_per_second: f64, unit: DistanceUnit) -> String {
    if meters_per_second == 0.0 {
        return "0.0".into();
    }
    format!("{:.1}", speed_to_unit_per_hour(meters_per_second, unit))
}

/// Format a speed as pace or speed depending on the sport's metric
#[must_use]
pub fn format_sport_metric(
    meters_per_second: f64,
    profile: &SportProfile,
    unit: DistanceUnit,
) -> String {
    match profile.metric {
        MetricKind::Pace => format_pace(meters_per_second, unit),
        MetricKind::Speed | MetricKind::Distance => format_speed(meters_per_second, unit),
    }
}

/// Split fractional minutes into whole minutes and rounded seconds.
///
/// Rounding up to 60 seconds carries into the minutes.
#[allow(clippy::cast_possible_truncation)]
fn split_minutes(minutes: f64) -> (i64, i64) {
    let whole = minutes.floor() as i64;
    let seconds = ((minutes - minutes.floor()) * SECONDS_PER_MINUTE).round() as i64;
    if seconds >= 60 {
        (whole + 1, seconds - 60)
    } else {
        (whole, seconds)
    }
}

/// Format fractional minutes as `m:ss`, e.g. `8.5` → `"8:30"`
#[must_use]
pub fn format_pace_time(minutes: f64) -> String {
    let (whole, seconds) = split_minutes(minutes);
    format!("{whole}:{seconds:02}")
}

/// Format fractional minutes per unit as `"m:ss /mi"` (`"0:00"` for zero)
#[must_use]
pub fn format_pace_minutes(minutes_per_unit: f64, unit: DistanceUnit) -> String {
    if minutes_per_unit == 0.0 {
        return "0:00".into();
    }
    format!("{} /{}", format_pace_time(minutes_per_unit), unit.label())
}

/// Percentage improvement from `old_pace` to `new_pace`; positive means faster.
///
/// Returns 0 when either pace is zero (no data).
#[must_use]
pub fn calculate_pace_improvement(old_pace: f64, new_pace: f64) -> f64 {
    if old_pace == 0.0 || new_pace == 0.0 {
        return 0.0;
    }
    (old_pace - new_pace) / old_pace * 100.0
}
