// ABOUTME: Core types and constants for the Runyear yearly-goal dashboard
// ABOUTME: Foundation crate with error handling, activity models, and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

#![deny(unsafe_code)]

//! # Runyear Core
//!
//! Foundation crate providing shared types and constants for the Runyear
//! dashboard. The intelligence engine and the HTTP server both depend on it,
//! and it changes rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors and calendar constants
//! - **models**: Activity, sport type, and athlete models

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Unit conversion and calendar constants
pub mod constants;

/// Core data models (Activity, `SportType`, Athlete)
pub mod models;
