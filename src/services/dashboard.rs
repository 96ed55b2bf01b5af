// ABOUTME: Dashboard orchestration between the activity provider and the analysis engine
// ABOUTME: Fetches windows of activities, filters by sport, and assembles serializable results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

//! Dashboard service
//!
//! Every operation takes `today` explicitly so results are reproducible in
//! tests. Network calls for several years are issued concurrently. The
//! historical view isolates per-year failures; every other view fails as a
//! whole when a fetch fails.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use futures_util::future::{join_all, try_join_all};
use runyear_core::errors::{AppError, AppResult};
use runyear_core::models::{Activity, Athlete, AthleteStats};
use runyear_intelligence::calendar::year_epoch_window;
use runyear_intelligence::units::{
    calculate_pace_improvement, convert_distance, pace_to_minutes_per_unit,
};
use runyear_intelligence::{
    aggregate_with, analyze_year_over_year, build_progress_series, compute_goal_pacing,
    filter_realistic_paces, find_best_and_worst_years, fit_trendline_dated, monthly_distance,
    monthly_progress, DistanceUnit, GoalPacingResult, MetricKind, MonthProgress, PeriodBucket,
    PeriodGranularity, ProgressPoint, SportProfile, TrendDirection, TrendlineMode,
    YearOverYearTrend, YearPace, YearSummary,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::environment::ServerConfig;
use crate::providers::ActivityProvider;

/// Current-year activities with optional goal tracking
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentYearDashboard {
    /// Year being reported
    pub year: i32,
    /// Activities of the selected sport
    pub activities: Vec<Activity>,
    /// Sum of activity distances in meters
    pub total_distance: f64,
    /// Meters per calendar month (1 to 12)
    pub monthly_distance: BTreeMap<u32, f64>,
    /// Number of activities
    pub count: usize,
    /// Pacing against the yearly goal, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_pacing: Option<GoalPacingResult>,
    /// Cumulative daily progress, when a goal was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Vec<ProgressPoint>>,
    /// Per-month distance against `goal / 12`, when a goal was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_progress: Option<Vec<MonthProgress>>,
}

/// Athlete profile together with their totals
#[derive(Debug, Clone, Serialize)]
pub struct AthleteOverview {
    /// Recent, year-to-date, and all-time totals
    pub stats: AthleteStats,
    /// Athlete profile
    pub athlete: Athlete,
}

/// One year of the historical view
#[derive(Debug, Clone, Serialize)]
pub struct YearlyData {
    /// Totals and distance-range breakdown
    #[serde(flatten)]
    pub summary: YearSummary,
    /// Activities the summary was computed from
    pub activities: Vec<Activity>,
}

/// Multi-year summaries with year-over-year analysis
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalDashboard {
    /// Years holding at least one activity, most recent first
    pub yearly_data: Vec<YearlyData>,
    /// Regression over yearly average pace; absent with fewer than two years
    pub year_over_year: Option<YearOverYearTrend>,
    /// Fastest year by average pace
    pub best_year: Option<YearPace>,
    /// Slowest year by average pace
    pub worst_year: Option<YearPace>,
    /// Percent pace change from the oldest to the newest year; positive is faster
    pub overall_improvement: f64,
}

/// Activity with its pace in minutes per display unit
#[derive(Debug, Clone, Serialize)]
pub struct PacedActivity {
    /// Provider activity id
    pub id: String,
    /// Activity title
    pub name: String,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: u64,
    /// Start time (UTC)
    pub start_date: DateTime<Utc>,
    /// Minutes per display unit
    pub pace: f64,
}

/// Fitted trend with its interpretation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendSummary {
    /// Change per step
    pub slope: f64,
    /// Value at the first step
    pub intercept: f64,
    /// Whether the trend is an improvement for its metric
    pub direction: TrendDirection,
}

/// Pace analysis across several years
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceAnalysis {
    /// Activities with realistic paces, oldest first
    pub activities: Vec<PacedActivity>,
    /// Number of activities
    pub count: usize,
    /// Years fetched
    pub years: u32,
    /// Display unit of `pace` and of bucket averages
    pub unit: DistanceUnit,
    /// Bucket granularity
    pub granularity: PeriodGranularity,
    /// Average pace per period, oldest first
    pub periods: Vec<PeriodBucket>,
    /// Trend of pace across activities
    pub pace_trend: TrendSummary,
    /// Trend of distance (display unit) across activities
    pub distance_trend: TrendSummary,
}

/// Pace analysis options
#[derive(Debug, Clone, Copy)]
pub struct PaceAnalysisOptions {
    /// Years to fetch, counting the current one
    pub years: u32,
    /// Bucket granularity
    pub granularity: PeriodGranularity,
    /// Display unit
    pub unit: DistanceUnit,
}

/// Dashboard operations over an activity provider
#[derive(Clone)]
pub struct DashboardService {
    provider: Arc<dyn ActivityProvider>,
    config: Arc<ServerConfig>,
}

impl DashboardService {
    /// Create a service over `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn ActivityProvider>, config: Arc<ServerConfig>) -> Self {
        Self { provider, config }
    }

    /// Activities of `year` for `profile`'s sport
    async fn fetch_year(
        &self,
        access_token: &str,
        year: i32,
        profile: &SportProfile,
    ) -> AppResult<Vec<Activity>> {
        let (after, before) = year_epoch_window(year)
            .ok_or_else(|| AppError::internal(format!("Year {year} is out of range")))?;
        let activities = self
            .provider
            .fetch_activities(access_token, after, before)
            .await?;
        Ok(activities
            .into_iter()
            .filter(|activity| activity.sport_type == profile.sport)
            .collect())
    }

    /// Current-year view; a goal (meters) adds pacing and progress series
    ///
    /// # Errors
    ///
    /// Returns the provider error if the fetch fails
    pub async fn current_year(
        &self,
        access_token: &str,
        profile: &SportProfile,
        yearly_goal: Option<f64>,
        today: NaiveDate,
    ) -> AppResult<CurrentYearDashboard> {
        let year = today.year();
        let activities = self.fetch_year(access_token, year, profile).await?;
        let total_distance: f64 = activities.iter().map(|a| a.distance_meters).sum();
        let pacing_config = &self.config.intelligence.pacing;

        let (goal_pacing, progress, monthly) = match yearly_goal {
            Some(goal) => (
                Some(compute_goal_pacing(total_distance, goal, today, pacing_config)),
                Some(build_progress_series(&activities, goal, today, pacing_config)),
                Some(monthly_progress(&activities, goal)),
            ),
            None => (None, None, None),
        };

        debug!(
            year,
            count = activities.len(),
            total_distance,
            "Built current-year dashboard"
        );

        Ok(CurrentYearDashboard {
            year,
            monthly_distance: monthly_distance(&activities),
            count: activities.len(),
            total_distance,
            activities,
            goal_pacing,
            progress,
            monthly_progress: monthly,
        })
    }

    /// Athlete profile and totals, fetched concurrently
    ///
    /// # Errors
    ///
    /// Returns the first provider error
    pub async fn athlete_overview(
        &self,
        access_token: &str,
        athlete_id: u64,
    ) -> AppResult<AthleteOverview> {
        let (stats, athlete) = tokio::try_join!(
            self.provider.fetch_athlete_stats(access_token, athlete_id),
            self.provider.fetch_athlete(access_token),
        )?;
        Ok(AthleteOverview { stats, athlete })
    }

    /// Yearly summaries for the last `years` years with year-over-year analysis.
    ///
    /// A year whose fetch fails is logged and treated as empty.
    pub async fn historical(
        &self,
        access_token: &str,
        profile: &SportProfile,
        years: u32,
        today: NaiveDate,
    ) -> HistoricalDashboard {
        let current = today.year();
        let fetches = recent_years(current, years).map(|year| async move {
            match self.fetch_year(access_token, year, profile).await {
                Ok(activities) => YearlyData {
                    summary: YearSummary::from_activities(year, &activities, profile),
                    activities,
                },
                Err(e) => {
                    warn!(year, error = %e, "Failed to fetch activities for year");
                    YearlyData {
                        summary: YearSummary::empty(year),
                        activities: Vec::new(),
                    }
                }
            }
        });

        let yearly_data: Vec<YearlyData> = join_all(fetches)
            .await
            .into_iter()
            .filter(|data| data.summary.has_data())
            .collect();

        let paces: Vec<YearPace> = yearly_data
            .iter()
            .map(|data| YearPace::from(&data.summary))
            .collect();
        let best_and_worst = find_best_and_worst_years(&paces);
        let overall_improvement = match (paces.last(), paces.first()) {
            (Some(oldest), Some(newest)) => {
                calculate_pace_improvement(oldest.average_pace, newest.average_pace)
            }
            _ => 0.0,
        };

        info!(
            requested = years,
            with_data = yearly_data.len(),
            "Built historical dashboard"
        );

        HistoricalDashboard {
            year_over_year: analyze_year_over_year(&paces),
            best_year: best_and_worst.best,
            worst_year: best_and_worst.worst,
            overall_improvement,
            yearly_data,
        }
    }

    /// Pace analysis across the last `options.years` years
    ///
    /// # Errors
    ///
    /// Returns the provider error if any year fails to load
    pub async fn pace_analysis(
        &self,
        access_token: &str,
        profile: &SportProfile,
        options: PaceAnalysisOptions,
        today: NaiveDate,
    ) -> AppResult<PaceAnalysis> {
        let years = options
            .years
            .clamp(1, self.config.dashboard.max_pace_analysis_years);
        let fetches =
            recent_years(today.year(), years).map(|year| self.fetch_year(access_token, year, profile));
        let all: Vec<Activity> = try_join_all(fetches).await?.into_iter().flatten().collect();

        let mut realistic =
            filter_realistic_paces(&all, self.config.intelligence.max_realistic_pace_min_per_mile);
        realistic.sort_by_key(|activity| activity.start_date);

        let unit = options.unit;
        let pace_of = |activity: &Activity| {
            pace_to_minutes_per_unit(activity.pace_seconds_per_meter(), unit)
        };

        let periods = aggregate_with(&realistic, options.granularity, pace_of);
        let mode = self.config.intelligence.trendline_mode;
        let pace_samples: Vec<(DateTime<Utc>, f64)> = realistic
            .iter()
            .map(|activity| (activity.start_date, pace_of(activity)))
            .collect();
        let distance_samples: Vec<(DateTime<Utc>, f64)> = realistic
            .iter()
            .map(|activity| {
                (
                    activity.start_date,
                    convert_distance(activity.distance_meters, unit),
                )
            })
            .collect();
        let pace_trend = summarize_trend(&pace_samples, MetricKind::Pace, mode);
        let distance_trend = summarize_trend(&distance_samples, MetricKind::Distance, mode);

        let activities: Vec<PacedActivity> = realistic
            .iter()
            .map(|activity| PacedActivity {
                id: activity.id.clone(),
                name: activity.name.clone(),
                distance: activity.distance_meters,
                moving_time: activity.moving_time_seconds,
                start_date: activity.start_date,
                pace: pace_of(activity),
            })
            .collect();

        debug!(
            fetched = all.len(),
            kept = activities.len(),
            periods = periods.len(),
            "Built pace analysis"
        );

        Ok(PaceAnalysis {
            count: activities.len(),
            activities,
            years,
            unit,
            granularity: options.granularity,
            periods,
            pace_trend,
            distance_trend,
        })
    }
}

/// `count` years ending at `current`, most recent first
fn recent_years(current: i32, count: u32) -> impl Iterator<Item = i32> {
    (0..count).filter_map(move |offset| current.checked_sub(i32::try_from(offset).ok()?))
}

fn summarize_trend(
    samples: &[(DateTime<Utc>, f64)],
    metric: MetricKind,
    mode: TrendlineMode,
) -> TrendSummary {
    let line = fit_trendline_dated(samples, mode);
    TrendSummary {
        slope: line.slope,
        intercept: line.intercept,
        direction: metric.classify(line.slope),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_years_descending() {
        assert_eq!(recent_years(2024, 3).collect::<Vec<_>>(), vec![2024, 2023, 2022]);
        assert_eq!(recent_years(2024, 0).count(), 0);
    }
}
