// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports activity fixtures, a mock activity provider, and axum request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;
pub mod fixtures;
pub mod mock_provider;
