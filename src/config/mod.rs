// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-driven configuration for HTTP, Strava, and dashboard defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

//! Configuration module
//!
//! All configuration comes from environment variables; there are no config
//! files. Engine tuning (days per year, catch-up horizons, regression mode)
//! lives in [`runyear_intelligence::IntelligenceConfig`] and is loaded
//! alongside [`environment::ServerConfig`].

/// Environment and server configuration
pub mod environment;
