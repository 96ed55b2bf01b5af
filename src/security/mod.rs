// ABOUTME: Security helpers for the HTTP surface
// ABOUTME: Cookie parsing and Set-Cookie formatting for the Strava session cookies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

/// Session cookie helpers
pub mod cookies;
