// ABOUTME: Goal pacing, period aggregation, and trend analysis engine
// ABOUTME: Pure synchronous transformations over already-fetched activities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

#![deny(unsafe_code)]

//! # Runyear Intelligence
//!
//! Everything in this crate is a pure function of its inputs: the current
//! date is always passed in, nothing reads the wall clock, and empty or
//! sparse data resolves to documented zero defaults instead of errors.
//!
//! - [`units`]: distance, pace, and speed conversions and formatting
//! - [`goal_pacing`]: expected progress, ahead/behind delta, weekly targets
//! - [`period_aggregation`]: weekly/monthly/quarterly pace buckets
//! - [`trendline`]: least-squares trend lines and direction classification
//! - [`year_over_year`]: yearly pace trend, best and worst years
//! - [`year_summary`]: per-year totals and distance-range breakdowns
//! - [`progress`]: cumulative daily progress and monthly targets

/// Engine configuration (pacing constants, regression mode)
pub mod config;

/// Day-of-year bookkeeping for an injected date
pub mod calendar;

/// Goal pacing calculator
pub mod goal_pacing;

/// Period aggregation of activities into pace buckets
pub mod period_aggregation;

/// Cumulative progress series and monthly targets
pub mod progress;

/// Sport configuration table
pub mod sport_profile;

/// Least-squares trend lines
pub mod trendline;

/// Unit conversions and display formatting
pub mod units;

/// Year-over-year pace analysis
pub mod year_over_year;

/// Per-year summaries with distance-range breakdowns
pub mod year_summary;

pub use calendar::YearProgress;
pub use config::{ConfigError, IntelligenceConfig, PacingConfig};
pub use goal_pacing::{
    compute_goal_pacing, validate_yearly_goal, CatchUpTarget, GoalPacing, GoalPacingResult,
};
pub use period_aggregation::{aggregate_by_period, aggregate_with, PeriodBucket, PeriodGranularity};
pub use progress::{
    build_progress_series, filter_realistic_paces, monthly_distance, monthly_progress,
    MonthProgress, ProgressPoint,
};
pub use sport_profile::{MetricKind, SportProfile};
pub use trendline::{
    fit_trendline, fit_trendline_dated, least_squares, TrendDirection, TrendLine, TrendlineMode,
};
pub use units::DistanceUnit;
pub use year_over_year::{
    analyze_year_over_year, find_best_and_worst_years, BestAndWorstYears, YearOverYearTrend,
    YearPace,
};
pub use year_summary::{DistanceRange, RangeStats, YearSummary};
