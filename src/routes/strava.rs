// ABOUTME: Dashboard route handlers backed by the Strava session cookies
// ABOUTME: Current-year activities, athlete stats, yearly history, and pace analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use crate::resources::ServerResources;
use crate::security::cookies::{get_cookie_value, ACCESS_TOKEN_COOKIE, ATHLETE_ID_COOKIE};
use crate::services::dashboard::PaceAnalysisOptions;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use runyear_core::errors::AppError;
use runyear_core::models::SportType;
use runyear_intelligence::{validate_yearly_goal, DistanceUnit, PeriodGranularity, SportProfile};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the current-year view
#[derive(Debug, Deserialize)]
pub struct ActivitiesQuery {
    /// Yearly goal in meters
    goal: Option<f64>,
    sport: Option<SportType>,
}

/// Query parameters for the historical view
#[derive(Debug, Deserialize)]
pub struct HistoricalQuery {
    sport: Option<SportType>,
    years: Option<u32>,
}

/// Query parameters for pace analysis
#[derive(Debug, Deserialize)]
pub struct PaceAnalysisQuery {
    years: Option<u32>,
    sport: Option<SportType>,
    period: Option<PeriodGranularity>,
    unit: Option<DistanceUnit>,
}

/// Strava dashboard routes
pub struct StravaRoutes;

impl StravaRoutes {
    /// Create all dashboard routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/strava/activities", get(Self::handle_activities))
            .route("/api/strava/stats", get(Self::handle_stats))
            .route("/api/strava/historical", get(Self::handle_historical))
            .route("/api/strava/pace-analysis", get(Self::handle_pace_analysis))
            .with_state(resources)
    }

    fn access_token(headers: &HeaderMap) -> Result<String, AppError> {
        get_cookie_value(headers, ACCESS_TOKEN_COOKIE).ok_or_else(AppError::auth_required)
    }

    fn athlete_id(headers: &HeaderMap) -> Result<u64, AppError> {
        get_cookie_value(headers, ATHLETE_ID_COOKIE)
            .ok_or_else(AppError::auth_required)?
            .parse()
            .map_err(|_| AppError::auth_invalid("Malformed athlete id cookie"))
    }

    /// Profile for the requested sport; running when absent
    fn profile(sport: Option<SportType>) -> Result<SportProfile, AppError> {
        let sport = sport.unwrap_or(SportType::Run);
        SportProfile::for_sport(&sport)
            .ok_or_else(|| AppError::invalid_input(format!("Unsupported sport: {sport}")))
    }

    /// Handle current-year activities request
    async fn handle_activities(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<ActivitiesQuery>,
    ) -> Result<Response, AppError> {
        let token = Self::access_token(&headers)?;
        let profile = Self::profile(params.sport)?;
        let goal = params.goal.map(validate_yearly_goal).transpose()?;

        let response = resources
            .dashboard()
            .current_year(&token, &profile, goal, Utc::now().date_naive())
            .await?;

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle athlete stats request
    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let token = Self::access_token(&headers)?;
        let athlete_id = Self::athlete_id(&headers)?;

        let response = resources
            .dashboard()
            .athlete_overview(&token, athlete_id)
            .await?;

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle historical summaries request
    async fn handle_historical(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<HistoricalQuery>,
    ) -> Result<Response, AppError> {
        let token = Self::access_token(&headers)?;
        let profile = Self::profile(params.sport)?;
        let dashboard_config = resources.config.dashboard;
        let years = params
            .years
            .unwrap_or(dashboard_config.historical_years)
            .clamp(1, dashboard_config.max_pace_analysis_years);

        let response = resources
            .dashboard()
            .historical(&token, &profile, years, Utc::now().date_naive())
            .await;

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle pace analysis request
    async fn handle_pace_analysis(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<PaceAnalysisQuery>,
    ) -> Result<Response, AppError> {
        let token = Self::access_token(&headers)?;
        let profile = Self::profile(params.sport)?;
        let options = PaceAnalysisOptions {
            years: params
                .years
                .unwrap_or(resources.config.dashboard.pace_analysis_years),
            granularity: params.period.unwrap_or_default(),
            unit: params.unit.unwrap_or_default(),
        };

        let response = resources
            .dashboard()
            .pace_analysis(&token, &profile, options, Utc::now().date_naive())
            .await?;

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
