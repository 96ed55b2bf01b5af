// ABOUTME: Unit conversion and display formatting tests
// ABOUTME: Mile, kilometer, pace, and speed values against the published constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runyear_intelligence::units::{
    calculate_pace_improvement, convert_distance, format_distance, format_pace,
    format_pace_minutes, format_pace_time, format_speed, format_sport_metric,
    kilometers_to_meters, meters_to_kilometers, meters_to_miles, miles_to_meters,
    pace_to_minutes_per_km, pace_to_minutes_per_mile, speed_to_kph, speed_to_mph,
};
use runyear_intelligence::{DistanceUnit, SportProfile};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn test_distance_conversions() {
    assert!(close(meters_to_miles(1_000.0), 0.621_371));
    assert!(close(meters_to_miles(20_000.0), 20_000.0 * 0.000_621_371));
    assert!(close(meters_to_kilometers(5_000.0), 5.0));
    assert!(close(miles_to_meters(1.0), 1_609.34));
    assert!(close(kilometers_to_meters(2.5), 2_500.0));
    assert!(close(convert_distance(42_195.0, DistanceUnit::Kilometers), 42.195));
}

#[test]
fn test_pace_conversions() {
    // 0.3 s/m is 5:00 per km
    assert!(close(pace_to_minutes_per_km(0.3), 5.0));
    assert!(close(pace_to_minutes_per_mile(0.3), 0.3 * 1_609.34 / 60.0));
    assert!(pace_to_minutes_per_km(0.0).abs() < f64::EPSILON);
}

#[test]
fn test_speed_conversions() {
    assert!(close(speed_to_kph(5.0), 18.0));
    assert!(close(speed_to_mph(5.0), 5.0 * 3_600.0 / 1_609.34));
    assert!(speed_to_mph(0.0).abs() < f64::EPSILON);
}

#[test]
fn test_format_distance() {
    assert_eq!(format_distance(20_000.0, DistanceUnit::Miles), "12.43 mi");
    assert_eq!(format_distance(5_000.0, DistanceUnit::Kilometers), "5.00 km");
}

#[test]
fn test_format_pace_and_speed() {
    // 482.5 s per mile and 300.5 s per km land mid-second
    assert_eq!(format_pace(1_609.34 / 482.5, DistanceUnit::Miles), "8:02");
    assert_eq!(format_pace(1_000.0 / 300.5, DistanceUnit::Kilometers), "5:00");
    assert_eq!(format_speed(5.11, DistanceUnit::Kilometers), "18.4");
    assert_eq!(format_pace_minutes(8.5, DistanceUnit::Miles), "8:30 /mi");
    assert_eq!(format_pace_time(6.25), "6:15");
}

#[test]
fn test_sport_metric_follows_profile() {
    assert_eq!(
        format_sport_metric(1_000.0 / 300.5, &SportProfile::run(), DistanceUnit::Kilometers),
        "5:00"
    );
    assert_eq!(
        format_sport_metric(5.0, &SportProfile::ride(), DistanceUnit::Kilometers),
        "18.0"
    );
}

#[test]
fn test_pace_improvement() {
    assert!(close(calculate_pace_improvement(10.0, 9.0), 10.0));
    assert!(calculate_pace_improvement(9.0, 10.0) < 0.0);
    assert!(calculate_pace_improvement(0.0, 9.0).abs() < f64::EPSILON);
    assert!(calculate_pace_improvement(9.0, 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_unit_serde_names() {
    assert_eq!(serde_json::to_string(&DistanceUnit::Miles).unwrap(), "\"mi\"");
    let unit: DistanceUnit = serde_json::from_str("\"km\"").unwrap();
    assert_eq!(unit, DistanceUnit::Kilometers);
}
