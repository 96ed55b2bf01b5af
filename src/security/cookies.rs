// ABOUTME: Reads and writes the Strava session cookies
// ABOUTME: HttpOnly, SameSite=Lax cookies; Secure only in production
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use http::{header, HeaderMap};

/// Cookie holding the Strava access token
pub const ACCESS_TOKEN_COOKIE: &str = "strava_access_token";

/// Cookie holding the Strava refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "strava_refresh_token";

/// Cookie holding the Strava athlete id
pub const ATHLETE_ID_COOKIE: &str = "strava_athlete_id";

/// Lifetime of the refresh token and athlete id cookies (30 days)
pub const LONG_LIVED_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 30;

/// Value of cookie `name` across all `Cookie` headers; empty values count as absent
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_owned())
}

/// Format a `Set-Cookie` value for a session cookie
#[must_use]
pub fn session_cookie(name: &str, value: &str, max_age_secs: u64, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!("{name}={value}; HttpOnly{secure}; Path=/; SameSite=Lax; Max-Age={max_age_secs}")
}
