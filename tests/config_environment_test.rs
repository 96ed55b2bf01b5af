// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Defaults, overrides, derived CORS origins, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runyear::config::environment::{Environment, ServerConfig, DEFAULT_HTTP_PORT};
use runyear_intelligence::TrendlineMode;
use serial_test::serial;
use std::env;

const VARS: [&str; 18] = [
    "HTTP_PORT",
    "ENVIRONMENT",
    "PUBLIC_URL",
    "CORS_ALLOWED_ORIGINS",
    "STRAVA_CLIENT_ID",
    "STRAVA_CLIENT_SECRET",
    "STRAVA_REDIRECT_URI",
    "STRAVA_API_BASE",
    "STRAVA_AUTH_URL",
    "STRAVA_TOKEN_URL",
    "STRAVA_ACTIVITIES_PER_PAGE",
    "STRAVA_MAX_PAGES",
    "HISTORICAL_YEARS",
    "PACE_ANALYSIS_YEARS",
    "MAX_PACE_ANALYSIS_YEARS",
    "RUNYEAR_DAYS_PER_YEAR",
    "RUNYEAR_CATCH_UP_WEEKS",
    "RUNYEAR_TRENDLINE_MODE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.public_url, "http://localhost:3000");
    assert_eq!(config.cors_allowed_origins, config.public_url);
    assert!(!config.strava.has_credentials());
    assert_eq!(config.strava.activities_per_page, 200);
    assert_eq!(config.dashboard.historical_years, 5);
    assert_eq!(config.intelligence.trendline_mode, TrendlineMode::Index);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("PUBLIC_URL", "https://runyear.example.com");
    env::set_var("STRAVA_CLIENT_ID", "12345");
    env::set_var("STRAVA_CLIENT_SECRET", "secret");
    env::set_var("STRAVA_ACTIVITIES_PER_PAGE", "50");
    env::set_var("HISTORICAL_YEARS", "3");
    env::set_var("RUNYEAR_TRENDLINE_MODE", "elapsed_days");
    env::set_var("RUNYEAR_CATCH_UP_WEEKS", "2, 8");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert!(config.environment.is_production());
    assert_eq!(config.cors_allowed_origins, "https://runyear.example.com");
    assert!(config.strava.has_credentials());
    assert_eq!(config.strava.activities_per_page, 50);
    assert_eq!(config.dashboard.historical_years, 3);
    assert_eq!(config.intelligence.trendline_mode, TrendlineMode::ElapsedDays);
    assert_eq!(config.intelligence.pacing.catch_up_horizons_weeks, vec![2, 8]);
}

#[test]
#[serial]
fn test_explicit_cors_origins() {
    clear_env();
    env::set_var("CORS_ALLOWED_ORIGINS", "*");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.cors_allowed_origins, "*");
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    let cases = [
        ("HTTP_PORT", "not-a-port"),
        ("STRAVA_ACTIVITIES_PER_PAGE", "500"),
        ("STRAVA_MAX_PAGES", "0"),
        ("HISTORICAL_YEARS", "0"),
        ("PACE_ANALYSIS_YEARS", "11"),
        ("RUNYEAR_DAYS_PER_YEAR", "-1"),
        ("RUNYEAR_TRENDLINE_MODE", "sideways"),
    ];

    for (var, value) in cases {
        clear_env();
        env::set_var(var, value);
        assert!(ServerConfig::from_env().is_err(), "{var}={value}");
    }
    clear_env();
}
