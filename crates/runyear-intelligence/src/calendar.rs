// ABOUTME: Day-of-year bookkeeping for an explicitly injected date
// ABOUTME: Days elapsed, days remaining, and weeks remaining in the calendar year
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use runyear_core::constants::calendar::DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};

/// Where a date sits within its calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearProgress {
    /// The date this was computed for
    pub today: NaiveDate,
    /// Days elapsed including today (1 on January 1st)
    pub days_elapsed: u32,
    /// Whole days left until December 31st (0 on December 31st)
    pub days_remaining: u32,
}

impl YearProgress {
    /// Compute year progress for `today`
    #[must_use]
    pub fn for_date(today: NaiveDate) -> Self {
        let days_elapsed = today.ordinal();
        let days_remaining = year_end_date(today.year())
            .map_or(0, |end| u32::try_from((end - today).num_days()).unwrap_or(0));
        Self {
            today,
            days_elapsed,
            days_remaining,
        }
    }

    /// Calendar year of `today`
    #[must_use]
    pub fn year(&self) -> i32 {
        self.today.year()
    }

    /// Weeks left in the year, rounded up (0 on December 31st)
    #[must_use]
    pub const fn weeks_remaining(&self) -> u32 {
        self.days_remaining.div_ceil(DAYS_PER_WEEK)
    }
}

/// December 31st of `year`
#[must_use]
pub fn year_end_date(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

/// First instant of `year` (UTC)
#[must_use]
pub fn year_start(year: i32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()
}

/// Last second of `year` (UTC)
#[must_use]
pub fn year_end(year: i32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, 12, 31, 23, 59, 59).single()
}

/// Epoch-second window `[start, end]` covering `year`, as the provider expects
#[must_use]
pub fn year_epoch_window(year: i32) -> Option<(i64, i64)> {
    Some((year_start(year)?.timestamp(), year_end(year)?.timestamp()))
}
