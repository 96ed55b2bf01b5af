// ABOUTME: In-memory activity provider for service and route tests
// ABOUTME: Serves fixed activities by time window and can fail chosen years

use async_trait::async_trait;
use chrono::{Datelike, TimeZone, Utc};
use runyear::providers::ActivityProvider;
use runyear_core::errors::{AppError, AppResult};
use runyear_core::models::{Activity, ActivityTotals, Athlete, AthleteStats};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Token the mock accepts; anything else is rejected like an expired token
pub const VALID_TOKEN: &str = "test-access-token";

/// Athlete id the mock reports
pub const ATHLETE_ID: u64 = 4242;

/// Provider backed by a fixed activity list
pub struct MockProvider {
    activities: Vec<Activity>,
    failing_years: HashSet<i32>,
    activity_calls: AtomicUsize,
}

impl MockProvider {
    /// Provider serving `activities`
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            failing_years: HashSet::new(),
            activity_calls: AtomicUsize::new(0),
        }
    }

    /// Make every window starting in `year` fail
    #[must_use]
    pub fn failing_year(mut self, year: i32) -> Self {
        self.failing_years.insert(year);
        self
    }

    /// Number of `fetch_activities` calls so far
    pub fn activity_calls(&self) -> usize {
        self.activity_calls.load(Ordering::SeqCst)
    }

    fn check_token(access_token: &str) -> AppResult<()> {
        if access_token == VALID_TOKEN {
            Ok(())
        } else {
            Err(AppError::external_auth_failed("Mock"))
        }
    }
}

#[async_trait]
impl ActivityProvider for MockProvider {
    fn name(&self) -> &'static str {
        "Mock"
    }

    async fn fetch_activities(
        &self,
        access_token: &str,
        after: i64,
        before: i64,
    ) -> AppResult<Vec<Activity>> {
        self.activity_calls.fetch_add(1, Ordering::SeqCst);
        Self::check_token(access_token)?;

        let year = Utc
            .timestamp_opt(after, 0)
            .single()
            .map_or(0, |start| start.year());
        if self.failing_years.contains(&year) {
            return Err(AppError::external_service("Mock", format!("{year} unavailable")));
        }

        Ok(self
            .activities
            .iter()
            .filter(|a| {
                let ts = a.start_date.timestamp();
                ts >= after && ts <= before
            })
            .cloned()
            .collect())
    }

    async fn fetch_athlete(&self, access_token: &str) -> AppResult<Athlete> {
        Self::check_token(access_token)?;
        Ok(Athlete {
            id: ATHLETE_ID,
            username: Some("runner".into()),
            firstname: Some("Test".into()),
            lastname: Some("Runner".into()),
            profile: None,
        })
    }

    async fn fetch_athlete_stats(
        &self,
        access_token: &str,
        athlete_id: u64,
    ) -> AppResult<AthleteStats> {
        Self::check_token(access_token)?;
        if athlete_id != ATHLETE_ID {
            return Err(AppError::not_found(format!("Athlete {athlete_id}")));
        }
        Ok(AthleteStats {
            ytd_run_totals: ActivityTotals {
                count: 12,
                distance: 60_000.0,
                moving_time: 18_000,
                ..ActivityTotals::default()
            },
            ..AthleteStats::default()
        })
    }
}
