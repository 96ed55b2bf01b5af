// ABOUTME: Main library entry point for the Runyear yearly-goal dashboard server
// ABOUTME: Wires the Strava provider, dashboard services, and HTTP routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

#![deny(unsafe_code)]

//! # Runyear
//!
//! A small HTTP backend for a yearly distance-goal dashboard. It signs a user
//! in with Strava, fetches their activities, and serves the results of the
//! `runyear-intelligence` engine (goal pacing, period buckets, trend lines,
//! year-over-year summaries) as JSON.
//!
//! ## Architecture
//!
//! - **Providers**: the [`providers::ActivityProvider`] trait and its Strava client
//! - **`OAuth2` client**: Strava authorization URL and code exchange
//! - **Services**: [`services::dashboard::DashboardService`] filters fetched
//!   activities and feeds the engine
//! - **Routes**: thin axum handlers over the services
//! - **Config / Logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use runyear::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Runyear configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Server configuration loaded from the environment
pub mod config;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Strava `OAuth2` authorization client
pub mod oauth2_client;

/// Activity provider abstraction and the Strava implementation
pub mod providers;

/// Shared resources handed to every route
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Cookie parsing and formatting
pub mod security;

/// Dashboard orchestration between provider and engine
pub mod services;

/// Shared utilities (HTTP client)
pub mod utils;

pub use runyear_core::errors::{AppError, AppResult, ErrorCode};
