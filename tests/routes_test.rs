// ABOUTME: HTTP route tests for health, auth redirects, and dashboard endpoints
// ABOUTME: Drives the full router with a mock provider and session cookies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use axum::Router;
use chrono::{Datelike, Utc};
use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{ride, run};
use helpers::mock_provider::{MockProvider, ATHLETE_ID, VALID_TOKEN};
use runyear::config::environment::{ServerConfig, StravaConfig};
use runyear::oauth2_client::StravaOAuthClient;
use runyear::resources::ServerResources;
use runyear::routes::build_router;
use serde_json::Value;
use std::sync::Arc;

fn this_year() -> i32 {
    Utc::now().year()
}

fn app_with(provider: MockProvider, oauth: Option<StravaOAuthClient>) -> Router {
    let resources =
        ServerResources::with_provider(ServerConfig::default(), Arc::new(provider), oauth);
    build_router(Arc::new(resources))
}

fn app(provider: MockProvider) -> Router {
    app_with(provider, None)
}

fn sample_activities() -> Vec<runyear_core::models::Activity> {
    let year = this_year();
    vec![
        run(year, 1, 1, 5_000.0, 1_500),
        run(year, 1, 1, 10_000.0, 3_000),
        ride(year, 1, 1, 30_000.0, 3_600),
        run(year - 1, 3, 10, 10_000.0, 3_300),
        run(year - 1, 6, 15, 5_000.0, 1_650),
    ]
}

#[tokio::test]
async fn test_health() {
    let response = AxumTestRequest::get("/health")
        .send(app(MockProvider::with_activities(Vec::new())))
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_activities_requires_access_token() {
    let response = AxumTestRequest::get("/api/strava/activities")
        .send(app(MockProvider::with_activities(sample_activities())))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "AUTH_REQUIRED");
}

#[tokio::test]
async fn test_activities_filters_to_runs() {
    let response = AxumTestRequest::get("/api/strava/activities")
        .session(VALID_TOKEN, None)
        .send(app(MockProvider::with_activities(sample_activities())))
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();

    assert_eq!(body["count"], 2);
    assert_eq!(body["year"], this_year());
    assert!((body["totalDistance"].as_f64().unwrap() - 15_000.0).abs() < 1e-9);
    assert!((body["monthlyDistance"]["1"].as_f64().unwrap() - 15_000.0).abs() < 1e-9);
    assert!(body.get("goalPacing").is_none());
}

#[tokio::test]
async fn test_activities_for_rides() {
    let response = AxumTestRequest::get("/api/strava/activities?sport=Ride")
        .session(VALID_TOKEN, None)
        .send(app(MockProvider::with_activities(sample_activities())))
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn test_activities_with_goal_adds_pacing() {
    let response = AxumTestRequest::get("/api/strava/activities?goal=1000000")
        .session(VALID_TOKEN, None)
        .send(app(MockProvider::with_activities(sample_activities())))
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();

    let pacing = &body["goalPacing"];
    assert!((pacing["yearlyGoal"].as_f64().unwrap() - 1_000_000.0).abs() < 1e-9);
    assert!((pacing["cumulativeDistance"].as_f64().unwrap() - 15_000.0).abs() < 1e-9);
    assert_eq!(body["monthlyProgress"].as_array().unwrap().len(), 12);
    assert!(!body["progress"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_goal_rejected() {
    let response = AxumTestRequest::get("/api/strava/activities?goal=-5")
        .session(VALID_TOKEN, None)
        .send(app(MockProvider::with_activities(sample_activities())))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_unsupported_sport_rejected() {
    AxumTestRequest::get("/api/strava/activities?sport=Swim")
        .session(VALID_TOKEN, None)
        .send(app(MockProvider::with_activities(sample_activities())))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rejected_token_maps_to_unauthorized() {
    let response = AxumTestRequest::get("/api/strava/activities")
        .session("expired", None)
        .send(app(MockProvider::with_activities(sample_activities())))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "EXTERNAL_AUTH_FAILED");
}

#[tokio::test]
async fn test_stats_requires_athlete_id() {
    AxumTestRequest::get("/api/strava/stats")
        .session(VALID_TOKEN, None)
        .send(app(MockProvider::with_activities(Vec::new())))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_stats_returns_athlete_and_totals() {
    let response = AxumTestRequest::get("/api/strava/stats")
        .session(VALID_TOKEN, Some(ATHLETE_ID))
        .send(app(MockProvider::with_activities(Vec::new())))
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["athlete"]["id"], ATHLETE_ID);
    assert_eq!(body["stats"]["ytd_run_totals"]["count"], 12);
}

#[tokio::test]
async fn test_historical_isolates_failed_year() {
    let year = this_year();
    let provider = MockProvider::with_activities(sample_activities()).failing_year(year - 2);

    let response = AxumTestRequest::get("/api/strava/historical?years=3")
        .session(VALID_TOKEN, None)
        .send(app(provider))
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();

    let yearly = body["yearlyData"].as_array().unwrap();
    assert_eq!(yearly.len(), 2);
    assert_eq!(yearly[0]["year"], year);
    assert_eq!(yearly[1]["year"], year - 1);
    assert_eq!(yearly[0]["totalRuns"], 2);
    assert_eq!(yearly[0]["activities"].as_array().unwrap().len(), 2);
    assert_eq!(yearly[0]["rangeAnalysis"]["medium"]["count"], 1);
    assert_eq!(yearly[0]["rangeAnalysis"]["long"]["count"], 1);
    assert_eq!(body["yearOverYear"]["isImproving"], true);
    assert_eq!(body["bestYear"]["year"], year);
    assert_eq!(body["worstYear"]["year"], year - 1);
    assert!(body["overallImprovement"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_pace_analysis_buckets_and_filters() {
    let year = this_year();
    let mut activities = sample_activities();
    // 25 min/mile: dropped as unrealistic
    activities.push(run(year, 1, 1, 1_609.34, 1_500));

    let response = AxumTestRequest::get("/api/strava/pace-analysis?years=2&period=monthly&unit=km")
        .session(VALID_TOKEN, None)
        .send(app(MockProvider::with_activities(activities)))
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();

    assert_eq!(body["count"], 4);
    assert_eq!(body["years"], 2);
    assert_eq!(body["unit"], "km");
    assert_eq!(body["granularity"], "monthly");

    let activities = body["activities"].as_array().unwrap();
    assert_eq!(activities[0]["id"], format!("run-{}-03-10", year - 1));
    assert!((activities[3]["pace"].as_f64().unwrap() - 5.0).abs() < 1e-9);

    let periods = body["periods"].as_array().unwrap();
    assert_eq!(periods.len(), 3);
    assert_eq!(periods[2]["period"], format!("{year}-01"));
    assert_eq!(periods[2]["activityCount"], 2);
    assert_eq!(body["paceTrend"]["direction"], "improving");
}

#[tokio::test]
async fn test_pace_analysis_fails_when_any_year_fails() {
    let year = this_year();
    let provider = MockProvider::with_activities(sample_activities()).failing_year(year - 1);

    let response = AxumTestRequest::get("/api/strava/pace-analysis?years=2")
        .session(VALID_TOKEN, None)
        .send(app(provider))
        .await
        .assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");
}

#[tokio::test]
async fn test_authorize_redirects_to_strava() {
    let strava = StravaConfig {
        client_id: Some("12345".into()),
        client_secret: Some("secret".into()),
        ..StravaConfig::default()
    };
    let oauth = StravaOAuthClient::from_config(&strava).unwrap();

    let response = AxumTestRequest::get("/api/auth/strava")
        .send(app_with(MockProvider::with_activities(Vec::new()), Some(oauth)))
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);
    let location = response.location().unwrap();
    assert!(location.starts_with("https://www.strava.com/oauth/authorize?"));
    assert!(location.contains("client_id=12345"));
    assert!(location.contains("scope=read%2Cactivity%3Aread_all"));
}

#[tokio::test]
async fn test_authorize_without_credentials_is_config_error() {
    let response = AxumTestRequest::get("/api/auth/strava")
        .send(app(MockProvider::with_activities(Vec::new())))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CONFIG_ERROR");
}

#[tokio::test]
async fn test_callback_error_redirects_to_frontend() {
    let response = AxumTestRequest::get("/api/auth/strava/callback?error=access_denied")
        .send(app(MockProvider::with_activities(Vec::new())))
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.location(),
        Some("http://localhost:3000/?error=access_denied")
    );
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_callback_without_code() {
    let response = AxumTestRequest::get("/api/auth/strava/callback")
        .send(app(MockProvider::with_activities(Vec::new())))
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.location(),
        Some("http://localhost:3000/?error=no_code")
    );
}

#[tokio::test]
async fn test_callback_without_oauth_client_fails_exchange() {
    let response = AxumTestRequest::get("/api/auth/strava/callback?code=abc")
        .send(app(MockProvider::with_activities(Vec::new())))
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.location(),
        Some("http://localhost:3000/?error=token_exchange_failed")
    );
}
