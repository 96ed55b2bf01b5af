// ABOUTME: Yearly distance goal pacing against an injected calendar date
// ABOUTME: Expected-to-date progress, delta, and weekly/daily targets to finish or catch up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors
#![allow(clippy::cast_precision_loss)] // Safe: day and week counts are tiny

//! # Goal Pacing
//!
//! Answers "am I on track for my yearly distance goal?" for a given day.
//!
//! Expected progress assumes an even spread of the goal over
//! [`PacingConfig::days_per_year`] days. Catch-up targets answer "how much per
//! week to be back on the expected line within N weeks", and fall back to the
//! plain finish-the-year rate whenever catching up is moot (already ahead, or
//! fewer than N weeks left).

use chrono::NaiveDate;
use runyear_core::constants::calendar::{DAYS_PER_WEEK, MONTHS_PER_YEAR};
use runyear_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::calendar::YearProgress;
use crate::config::PacingConfig;

/// Weekly and daily distance needed to reach the expected line within `weeks`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchUpTarget {
    /// Recovery horizon in weeks
    pub weeks: u32,
    /// Distance per week over the horizon
    pub weekly_distance: f64,
    /// Weekly distance spread over 7 days
    pub daily_distance: f64,
}

/// Full pacing snapshot for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPacingResult {
    /// Goal distance for the year
    pub yearly_goal: f64,
    /// Distance covered so far this year
    pub cumulative_distance: f64,
    /// Share of the goal covered, in percent
    pub progress_percent: f64,
    /// Distance still to cover, never negative
    pub remaining_distance: f64,
    /// Days elapsed including today
    pub days_elapsed: u32,
    /// Days left until December 31st
    pub days_remaining: u32,
    /// Weeks left, rounded up
    pub weeks_remaining: u32,
    /// Distance an even pace would have covered by today
    pub expected_progress_to_date: f64,
    /// Covered minus expected; positive means ahead
    pub progress_delta: f64,
    /// Whether `progress_delta` is non-negative
    pub is_ahead: bool,
    /// Weekly distance that finishes the goal by December 31st
    pub weekly_distance_to_finish: f64,
    /// Weekly finish target spread over 7 days
    pub daily_distance_to_finish: f64,
    /// Remaining distance over the days left; 0 once no days remain
    pub required_daily_distance: f64,
    /// Goal split evenly across twelve months
    pub monthly_target: f64,
    /// One entry per configured recovery horizon
    pub catch_up_targets: Vec<CatchUpTarget>,
}

/// Goal pacing calculator bound to one goal, distance, and day
#[derive(Debug, Clone, Copy)]
pub struct GoalPacing<'a> {
    cumulative_distance: f64,
    yearly_goal: f64,
    progress: YearProgress,
    config: &'a PacingConfig,
}

impl<'a> GoalPacing<'a> {
    /// Create a calculator. Negative distances are treated as zero.
    #[must_use]
    pub fn new(
        cumulative_distance: f64,
        yearly_goal: f64,
        today: NaiveDate,
        config: &'a PacingConfig,
    ) -> Self {
        Self {
            cumulative_distance: cumulative_distance.max(0.0),
            yearly_goal,
            progress: YearProgress::for_date(today),
            config,
        }
    }

    /// Calendar position used by this calculator
    #[must_use]
    pub const fn year_progress(&self) -> YearProgress {
        self.progress
    }

    /// Distance an even pace would have covered by today
    #[must_use]
    pub fn expected_progress_to_date(&self) -> f64 {
        f64::from(self.progress.days_elapsed) / self.config.days_per_year * self.yearly_goal
    }

    /// Covered minus expected; positive means ahead
    #[must_use]
    pub fn progress_delta(&self) -> f64 {
        self.cumulative_distance - self.expected_progress_to_date()
    }

    /// Distance still to cover, never negative
    #[must_use]
    pub fn remaining_distance(&self) -> f64 {
        (self.yearly_goal - self.cumulative_distance).max(0.0)
    }

    /// Share of the goal covered, in percent
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.yearly_goal > 0.0 {
            self.cumulative_distance / self.yearly_goal * 100.0
        } else {
            0.0
        }
    }

    /// Weekly distance that finishes the goal by year end; 0 once no weeks remain
    #[must_use]
    pub fn weekly_distance_to_finish(&self) -> f64 {
        match self.progress.weeks_remaining() {
            0 => 0.0,
            weeks => self.remaining_distance() / f64::from(weeks),
        }
    }

    /// Weekly distance that puts the runner back on the expected line after
    /// `weeks_to_target` weeks.
    ///
    /// Equals [`Self::weekly_distance_to_finish`] when already ahead, when the
    /// horizon reaches past year end, or for a zero-week horizon.
    #[must_use]
    pub fn weekly_distance_to_catch_up(&self, weeks_to_target: u32) -> f64 {
        if self.progress_delta() >= 0.0
            || self.progress.weeks_remaining() <= weeks_to_target
            || weeks_to_target == 0
        {
            return self.weekly_distance_to_finish();
        }

        let target_day = f64::from(self.progress.days_elapsed)
            + f64::from(DAYS_PER_WEEK) * f64::from(weeks_to_target);
        let target_distance = target_day / self.config.days_per_year * self.yearly_goal;
        (target_distance - self.cumulative_distance) / f64::from(weeks_to_target)
    }

    /// Remaining distance divided by the days left in the year.
    ///
    /// Unlike the weekly rate this does not round the horizon up, so it is the
    /// real per-day requirement close to year end.
    #[must_use]
    pub fn required_daily_distance(&self) -> f64 {
        match self.progress.days_remaining {
            0 => 0.0,
            days => self.remaining_distance() / f64::from(days),
        }
    }

    /// Goal split evenly across twelve months
    #[must_use]
    pub fn monthly_target(&self) -> f64 {
        self.yearly_goal / f64::from(MONTHS_PER_YEAR)
    }

    /// Assemble the full snapshot
    #[must_use]
    pub fn result(&self) -> GoalPacingResult {
        let delta = self.progress_delta();
        let weekly_to_finish = self.weekly_distance_to_finish();
        let catch_up_targets = self
            .config
            .catch_up_horizons_weeks
            .iter()
            .map(|&weeks| {
                let weekly = self.weekly_distance_to_catch_up(weeks);
                CatchUpTarget {
                    weeks,
                    weekly_distance: weekly,
                    daily_distance: to_daily(weekly),
                }
            })
            .collect();

        GoalPacingResult {
            yearly_goal: self.yearly_goal,
            cumulative_distance: self.cumulative_distance,
            progress_percent: self.progress_percent(),
            remaining_distance: self.remaining_distance(),
            days_elapsed: self.progress.days_elapsed,
            days_remaining: self.progress.days_remaining,
            weeks_remaining: self.progress.weeks_remaining(),
            expected_progress_to_date: self.expected_progress_to_date(),
            progress_delta: delta,
            is_ahead: delta >= 0.0,
            weekly_distance_to_finish: weekly_to_finish,
            daily_distance_to_finish: to_daily(weekly_to_finish),
            required_daily_distance: self.required_daily_distance(),
            monthly_target: self.monthly_target(),
            catch_up_targets,
        }
    }
}

fn to_daily(weekly: f64) -> f64 {
    weekly / f64::from(DAYS_PER_WEEK)
}

/// Compute a pacing snapshot for `today`
#[must_use]
pub fn compute_goal_pacing(
    cumulative_distance: f64,
    yearly_goal: f64,
    today: NaiveDate,
    config: &PacingConfig,
) -> GoalPacingResult {
    let pacing = GoalPacing::new(cumulative_distance, yearly_goal, today, config);
    tracing::debug!(
        days_elapsed = pacing.year_progress().days_elapsed,
        delta = pacing.progress_delta(),
        "Computed goal pacing"
    );
    pacing.result()
}

/// Reject goals the calculator cannot pace against
///
/// # Errors
///
/// Returns an invalid-input error when `goal` is not finite or not positive
pub fn validate_yearly_goal(goal: f64) -> AppResult<f64> {
    if goal.is_finite() && goal > 0.0 {
        Ok(goal)
    } else {
        Err(AppError::invalid_input(format!(
            "Yearly goal must be a positive number, got {goal}"
        )))
    }
}
