// ABOUTME: Activity provider abstraction used by the dashboard services
// ABOUTME: Defines the async trait the Strava client implements and tests mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

//! # Activity Providers
//!
//! The dashboard only needs three reads from an activity service: the
//! activities inside a time window, the athlete profile, and the athlete's
//! aggregate totals. [`ActivityProvider`] captures exactly that contract, so
//! services can be exercised against an in-memory implementation in tests.
//!
//! Providers are stateless with respect to the user: the access token from the
//! session cookie is passed on every call.

use async_trait::async_trait;
use runyear_core::errors::AppResult;
use runyear_core::models::{Activity, Athlete, AthleteStats};

/// Strava REST client
pub mod strava;

pub use strava::StravaProvider;

/// Read-only access to a user's activity data
#[async_trait]
pub trait ActivityProvider: Send + Sync {
    /// Provider name used in logs and error messages
    fn name(&self) -> &'static str;

    /// All activities that started between `after` and `before` (epoch seconds)
    ///
    /// # Errors
    ///
    /// Returns an external-service error if any page fails to load
    async fn fetch_activities(
        &self,
        access_token: &str,
        after: i64,
        before: i64,
    ) -> AppResult<Vec<Activity>>;

    /// Profile of the authenticated athlete
    ///
    /// # Errors
    ///
    /// Returns an external-service error if the request fails
    async fn fetch_athlete(&self, access_token: &str) -> AppResult<Athlete>;

    /// Recent, year-to-date, and all-time totals for `athlete_id`
    ///
    /// # Errors
    ///
    /// Returns an external-service error if the request fails
    async fn fetch_athlete_stats(
        &self,
        access_token: &str,
        athlete_id: u64,
    ) -> AppResult<AthleteStats>;
}
