// ABOUTME: Engine configuration with environment overrides and validation
// ABOUTME: Holds the days-per-year constant, catch-up horizons, and regression mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use std::env;

use runyear_core::constants::calendar::DAYS_PER_YEAR;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::trendline::TrendlineMode;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Goal pacing constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Length of the pacing year in days.
    ///
    /// Leap years are not special-cased: on day 366 expected progress runs
    /// past the goal. This is a known approximation and is kept as-is.
    pub days_per_year: f64,
    /// Recovery horizons, in weeks, reported as catch-up targets
    pub catch_up_horizons_weeks: Vec<u32>,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            days_per_year: DAYS_PER_YEAR,
            catch_up_horizons_weeks: vec![4, 13],
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Goal pacing constants
    pub pacing: PacingConfig,
    /// Independent variable used when fitting activity trend lines
    pub trendline_mode: TrendlineMode,
    /// Activities slower than this (minutes per mile) are dropped from pace analysis
    pub max_realistic_pace_min_per_mile: f64,
}

impl Default for IntelligenceConfig {
    fn default() -> Self {
        Self {
            pacing: PacingConfig::default(),
            trendline_mode: TrendlineMode::Index,
            max_realistic_pace_min_per_mile: 20.0,
        }
    }
}

impl IntelligenceConfig {
    /// Load configuration from environment variables on top of defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pacing.days_per_year.is_finite() || self.pacing.days_per_year <= 0.0 {
            return Err(ConfigError::InvalidRange("days_per_year must be positive"));
        }
        if self.pacing.catch_up_horizons_weeks.contains(&0) {
            return Err(ConfigError::InvalidRange(
                "catch-up horizons must be at least one week",
            ));
        }
        if !self.max_realistic_pace_min_per_mile.is_finite()
            || self.max_realistic_pace_min_per_mile <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "max_realistic_pace_min_per_mile must be positive",
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = env::var("RUNYEAR_DAYS_PER_YEAR") {
            self.pacing.days_per_year = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid RUNYEAR_DAYS_PER_YEAR".into()))?;
        }

        if let Ok(val) = env::var("RUNYEAR_CATCH_UP_WEEKS") {
            self.pacing.catch_up_horizons_weeks = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .collect::<Result<_, _>>()
                .map_err(|_| ConfigError::Parse("Invalid RUNYEAR_CATCH_UP_WEEKS".into()))?;
        }

        if let Ok(val) = env::var("RUNYEAR_TRENDLINE_MODE") {
            self.trendline_mode = match val.to_lowercase().as_str() {
                "index" => TrendlineMode::Index,
                "elapsed_days" => TrendlineMode::ElapsedDays,
                _ => return Err(ConfigError::Parse("Invalid RUNYEAR_TRENDLINE_MODE".into())),
            };
        }

        if let Ok(val) = env::var("RUNYEAR_MAX_PACE_MIN_PER_MILE") {
            self.max_realistic_pace_min_per_mile = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid RUNYEAR_MAX_PACE_MIN_PER_MILE".into())
            })?;
        }

        Ok(self)
    }
}
