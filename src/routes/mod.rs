// ABOUTME: Route module organization for the Runyear HTTP endpoints
// ABOUTME: Merges domain routers and applies tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

//! Route module for the Runyear server
//!
//! Each domain module holds route definitions and thin handlers that
//! delegate to the service layer.

/// Strava `OAuth` redirect and callback routes
pub mod auth;
/// Health check routes
pub mod health;
/// Dashboard data routes
pub mod strava;

pub use auth::AuthRoutes;
pub use health::HealthRoutes;
pub use strava::StravaRoutes;

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(Arc::clone(&resources)))
        .merge(StravaRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
