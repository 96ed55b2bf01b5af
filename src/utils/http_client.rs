// ABOUTME: Shared HTTP client with connection pooling and timeout configuration
// ABOUTME: One pooled reqwest client for all Strava API and OAuth calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Request timeout for upstream calls
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connect timeout for upstream calls
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client (30 s request, 10 s connect timeout)
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        create_client_with_timeout(REQUEST_TIMEOUT_SECS, CONNECT_TIMEOUT_SECS)
    })
}

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}
