// ABOUTME: Strava REST API client implementing the activity provider trait
// ABOUTME: Paginated activity listing, athlete profile, and athlete stats with status mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use super::ActivityProvider;
use crate::config::environment::StravaConfig;
use crate::utils::http_client::shared_client;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use runyear_core::errors::{AppError, AppResult};
use runyear_core::models::{Activity, Athlete, AthleteStats, SportType};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

/// Provider name used in errors and logs
pub const STRAVA: &str = "Strava";

/// Strava API response for activity data
#[derive(Debug, Deserialize)]
struct StravaActivityResponse {
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    activity_type: String,
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    moving_time: u64,
    start_date: DateTime<Utc>,
}

impl From<StravaActivityResponse> for Activity {
    fn from(activity: StravaActivityResponse) -> Self {
        Self::new(
            activity.id.to_string(),
            activity.name,
            SportType::from_provider_string(&activity.activity_type),
            activity.distance,
            activity.moving_time,
            activity.start_date,
        )
    }
}

/// Strava API client
#[derive(Debug, Clone)]
pub struct StravaProvider {
    client: Client,
    api_base: String,
    per_page: u32,
    max_pages: u32,
}

impl StravaProvider {
    /// Create a provider from configuration using the shared HTTP client
    #[must_use]
    pub fn new(config: &StravaConfig) -> Self {
        Self::with_client(
            shared_client().clone(),
            &config.api_base,
            config.activities_per_page,
            config.max_pages,
        )
    }

    /// Create a provider with an explicit client and paging limits
    #[must_use]
    pub fn with_client(client: Client, api_base: &str, per_page: u32, max_pages: u32) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_owned(),
            per_page: per_page.max(1),
            max_pages: max_pages.max(1),
        }
    }

    /// Make an authenticated GET request and decode the JSON body
    async fn api_request<T>(
        &self,
        access_token: &str,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.api_base, endpoint.trim_start_matches('/'));

        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        response.json().await.map_err(|e| {
            AppError::external_service(STRAVA, "Failed to parse API response").with_source(e)
        })
    }
}

/// Map a non-success Strava status onto an application error
#[must_use]
pub fn map_status_error(status: StatusCode, body: &str) -> AppError {
    warn!(status = %status, "Strava API request failed");
    match status {
        StatusCode::UNAUTHORIZED => AppError::external_auth_failed(STRAVA),
        StatusCode::TOO_MANY_REQUESTS => AppError::external_rate_limited(STRAVA),
        _ => AppError::external_service(STRAVA, format!("request failed with status {status}"))
            .with_details(serde_json::json!({
                "status": status.as_u16(),
                "body": body.chars().take(200).collect::<String>(),
            })),
    }
}

fn map_transport_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() || error.is_connect() {
        AppError::external_unavailable(STRAVA, "API unreachable").with_source(error)
    } else {
        AppError::external_service(STRAVA, "request failed").with_source(error)
    }
}

#[async_trait]
impl ActivityProvider for StravaProvider {
    fn name(&self) -> &'static str {
        STRAVA
    }

    async fn fetch_activities(
        &self,
        access_token: &str,
        after: i64,
        before: i64,
    ) -> AppResult<Vec<Activity>> {
        let mut activities = Vec::new();

        for page in 1..=self.max_pages {
            let query = [
                ("after", after.to_string()),
                ("before", before.to_string()),
                ("per_page", self.per_page.to_string()),
                ("page", page.to_string()),
            ];
            let batch: Vec<StravaActivityResponse> = self
                .api_request(access_token, "athlete/activities", &query)
                .await?;
            let batch_len = batch.len();
            activities.extend(batch.into_iter().map(Activity::from));

            if batch_len < self.per_page as usize {
                debug!(pages = page, count = activities.len(), "Fetched Strava activities");
                return Ok(activities);
            }
        }

        warn!(
            max_pages = self.max_pages,
            count = activities.len(),
            "Stopped paging Strava activities at the page cap"
        );
        Ok(activities)
    }

    async fn fetch_athlete(&self, access_token: &str) -> AppResult<Athlete> {
        self.api_request(access_token, "athlete", &[]).await
    }

    async fn fetch_athlete_stats(
        &self,
        access_token: &str,
        athlete_id: u64,
    ) -> AppResult<AthleteStats> {
        self.api_request(access_token, &format!("athletes/{athlete_id}/stats"), &[])
            .await
    }
}
