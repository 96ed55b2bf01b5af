// ABOUTME: Strava OAuth2 client for the authorization redirect and code exchange
// ABOUTME: Builds the authorize URL and trades an authorization code for session tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use crate::config::environment::StravaConfig;
use crate::providers::strava::{map_status_error, STRAVA};
use crate::utils::http_client::shared_client;
use reqwest::Client;
use runyear_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Scopes requested from Strava (comma-separated, as Strava expects)
pub const STRAVA_SCOPES: &str = "read,activity:read_all";

/// Tokens and athlete id returned by a successful code exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenExchange {
    /// Short-lived API access token
    pub access_token: String,
    /// Token used to obtain a new access token
    pub refresh_token: String,
    /// Seconds until `access_token` expires
    pub expires_in: u64,
    /// Strava athlete id of the user who authorized
    pub athlete_id: u64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: u64,
    athlete: TokenAthlete,
}

#[derive(Debug, Deserialize)]
struct TokenAthlete {
    id: u64,
}

/// Strava `OAuth2` client
#[derive(Debug, Clone)]
pub struct StravaOAuthClient {
    client_id: String,
    client_secret: String,
    auth_url: String,
    token_url: String,
    redirect_uri: String,
    client: Client,
}

impl StravaOAuthClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the client id or secret is missing
    pub fn from_config(config: &StravaConfig) -> AppResult<Self> {
        let client_id = config
            .client_id
            .clone()
            .ok_or_else(|| AppError::config("STRAVA_CLIENT_ID is not set"))?;
        let client_secret = config
            .client_secret
            .clone()
            .ok_or_else(|| AppError::config("STRAVA_CLIENT_SECRET is not set"))?;

        Ok(Self {
            client_id,
            client_secret,
            auth_url: config.auth_url.clone(),
            token_url: config.token_url.clone(),
            redirect_uri: config.redirect_uri.clone(),
            client: shared_client().clone(),
        })
    }

    /// Build the Strava authorization URL the browser is redirected to
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the configured auth URL is malformed
    pub fn authorization_url(&self, state: Option<&str>) -> AppResult<String> {
        let mut url = Url::parse(&self.auth_url)
            .map_err(|e| AppError::config("Invalid STRAVA_AUTH_URL").with_source(e))?;

        {
            let mut query_pairs = url.query_pairs_mut();
            query_pairs
                .append_pair("client_id", &self.client_id)
                .append_pair("redirect_uri", &self.redirect_uri)
                .append_pair("response_type", "code")
                .append_pair("approval_prompt", "auto")
                .append_pair("scope", STRAVA_SCOPES);
            if let Some(state) = state {
                query_pairs.append_pair("state", state);
            }
        }

        Ok(url.to_string())
    }

    /// Exchange an authorization code for tokens
    ///
    /// # Errors
    ///
    /// Returns an external-service error if Strava rejects the code or the
    /// response cannot be decoded
    pub async fn exchange_code(&self, code: &str) -> AppResult<TokenExchange> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::external_service(STRAVA, "token request failed").with_source(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            AppError::external_service(STRAVA, "Failed to parse token response").with_source(e)
        })?;

        Ok(TokenExchange {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_in: token.expires_in,
            athlete_id: token.athlete.id,
        })
    }
}
