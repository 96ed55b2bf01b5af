// ABOUTME: Ordinary least-squares trend lines over index-ordered or dated samples
// ABOUTME: Degenerate inputs yield a flat zero line instead of an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are far below 2^52

use chrono::{DateTime, Utc};
use runyear_core::constants::calendar::SECONDS_PER_DAY;
use serde::{Deserialize, Serialize};

/// Direction a fitted metric is moving in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Moving the good way for the metric
    Improving,
    /// Moving the bad way for the metric
    Declining,
    /// Flat
    Stable,
}

/// Independent variable used for dated regressions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendlineMode {
    /// Position in the chronologically sorted sequence (`0..n`)
    #[default]
    Index,
    /// Days elapsed since the first sample
    ElapsedDays,
}

/// A fitted line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Change in value per unit of x
    pub slope: f64,
    /// Value at x = 0
    pub intercept: f64,
}

impl TrendLine {
    /// Flat line at zero, used for degenerate inputs
    pub const FLAT: Self = Self {
        slope: 0.0,
        intercept: 0.0,
    };

    /// Value of the line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Least-squares fit over arbitrary `(x, y)` points.
///
/// Returns `None` for fewer than two points or when every x is identical.
#[must_use]
pub fn least_squares(points: &[(f64, f64)]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xx, sum_xy) = points.iter().fold(
        (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64),
        |(sx, sy, sxx, sxy), &(x, y)| (sx + x, sy + y, x.mul_add(x, sxx), x.mul_add(y, sxy)),
    );

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let denominator = (n * mean_x).mul_add(-mean_x, sum_xx);
    if denominator.abs() < f64::EPSILON {
        return None;
    }

    let slope = (n * mean_x).mul_add(-mean_y, sum_xy) / denominator;
    let intercept = slope.mul_add(-mean_x, mean_y);
    Some(TrendLine { slope, intercept })
}

/// Fit a trend line over `values` using their index as x.
///
/// Fewer than two values produce [`TrendLine::FLAT`].
#[must_use]
pub fn fit_trendline(values: &[f64]) -> TrendLine {
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &y)| (i as f64, y))
        .collect();
    least_squares(&points).unwrap_or(TrendLine::FLAT)
}

/// Fit a trend line over dated samples.
///
/// Samples are sorted by date first. In [`TrendlineMode::Index`] the dates only
/// determine order; in [`TrendlineMode::ElapsedDays`] x is the number of days
/// since the earliest sample, so irregular gaps weigh in.
#[must_use]
pub fn fit_trendline_dated(samples: &[(DateTime<Utc>, f64)], mode: TrendlineMode) -> TrendLine {
    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|(date, _)| *date);

    match mode {
        TrendlineMode::Index => {
            let values: Vec<f64> = sorted.iter().map(|(_, value)| *value).collect();
            fit_trendline(&values)
        }
        TrendlineMode::ElapsedDays => {
            let Some((origin, _)) = sorted.first().copied() else {
                return TrendLine::FLAT;
            };
            let points: Vec<(f64, f64)> = sorted
                .iter()
                .map(|(date, value)| {
                    let days = (*date - origin).num_seconds() as f64 / SECONDS_PER_DAY as f64;
                    (days, *value)
                })
                .collect();
            least_squares(&points).unwrap_or(TrendLine::FLAT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_degenerate_inputs_are_flat() {
        assert_eq!(fit_trendline(&[]), TrendLine::FLAT);
        assert_eq!(fit_trendline(&[42.0]), TrendLine::FLAT);
        assert!(least_squares(&[(1.0, 2.0), (1.0, 3.0)]).is_none());
    }

    #[test]
    #[allow(clippy::float_cmp)] // Integer sums keep the fit exact
    fn test_descending_sequence_is_exact() {
        let line = fit_trendline(&[5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(line.slope, -1.0);
        assert_eq!(line.intercept, 5.0);
        assert_eq!(line.predict(5.0), 0.0);
    }

    #[test]
    fn test_elapsed_days_accounts_for_gaps() {
        let day = |d| Utc.with_ymd_and_hms(2024, 1, d, 12, 0, 0).unwrap();
        let samples = [(day(11), 20.0), (day(1), 10.0), (day(2), 11.0)];

        let by_index = fit_trendline_dated(&samples, TrendlineMode::Index);
        let by_days = fit_trendline_dated(&samples, TrendlineMode::ElapsedDays);

        assert!((by_index.slope - 5.0).abs() < 1e-9);
        assert!((by_days.slope - 1.0).abs() < 1e-9);
        assert!((by_days.intercept - 10.0).abs() < 1e-9);
    }
}
