// ABOUTME: Domain service layer between route handlers and the analysis engine
// ABOUTME: Services are protocol-agnostic and testable against a mock provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

//! Domain service layer
//!
//! Route handlers stay thin: they read cookies and query parameters, then
//! delegate to a service that fetches activities and runs the engine.

/// Dashboard views: current year, athlete overview, history, pace analysis
pub mod dashboard;

pub use dashboard::DashboardService;
