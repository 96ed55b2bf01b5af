// ABOUTME: Year-over-year regression over yearly average paces
// ABOUTME: Also picks the fastest and slowest years, ignoring years without data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use serde::{Deserialize, Serialize};

use crate::trendline::least_squares;
use crate::year_summary::YearSummary;

/// Average pace for one year; lower is faster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearPace {
    /// Calendar year
    pub year: i32,
    /// Average pace for the year; 0 means no data
    pub average_pace: f64,
}

impl From<&YearSummary> for YearPace {
    fn from(summary: &YearSummary) -> Self {
        Self {
            year: summary.year,
            average_pace: summary.average_pace,
        }
    }
}

/// Regression of average pace against calendar year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearOverYearTrend {
    /// Pace change per year
    pub slope: f64,
    /// Pace at year zero
    pub intercept: f64,
    /// Pace is getting lower (faster) over the years
    pub is_improving: bool,
}

/// Fastest and slowest years among those with data
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestAndWorstYears {
    /// Year with the lowest positive pace
    pub best: Option<YearPace>,
    /// Year with the highest pace
    pub worst: Option<YearPace>,
}

/// Fit average pace against year.
///
/// Returns `None` for fewer than two years or when every entry is the same year.
#[must_use]
pub fn analyze_year_over_year(years: &[YearPace]) -> Option<YearOverYearTrend> {
    let mut sorted = years.to_vec();
    sorted.sort_by_key(|entry| entry.year);

    let points: Vec<(f64, f64)> = sorted
        .iter()
        .map(|entry| (f64::from(entry.year), entry.average_pace))
        .collect();

    let line = least_squares(&points)?;
    Some(YearOverYearTrend {
        slope: line.slope,
        intercept: line.intercept,
        is_improving: line.slope < 0.0,
    })
}

/// Pick the fastest and slowest years, skipping entries with no pace.
///
/// Ties keep the earliest entry in input order.
#[must_use]
pub fn find_best_and_worst_years(years: &[YearPace]) -> BestAndWorstYears {
    years
        .iter()
        .filter(|entry| entry.average_pace > 0.0)
        .fold(BestAndWorstYears::default(), |acc, entry| BestAndWorstYears {
            best: match acc.best {
                Some(best) if best.average_pace <= entry.average_pace => Some(best),
                _ => Some(*entry),
            },
            worst: match acc.worst {
                Some(worst) if worst.average_pace >= entry.average_pace => Some(worst),
                _ => Some(*entry),
            },
        })
}
