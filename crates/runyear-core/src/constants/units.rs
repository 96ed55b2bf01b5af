// ABOUTME: Unit conversion constants for distance, time, and speed
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

/// Miles per meter
pub const MILES_PER_METER: f64 = 0.000_621_371;

/// Meters per mile (as used by the pace and speed formatters)
pub const METERS_PER_MILE: f64 = 1609.34;

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Half marathon distance in meters
pub const HALF_MARATHON_METERS: f64 = 21_097.0;
