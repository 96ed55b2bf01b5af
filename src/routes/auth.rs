// ABOUTME: Strava OAuth route handlers for the authorize redirect and the callback
// ABOUTME: The callback stores tokens in HttpOnly cookies and redirects to the frontend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

//! Authentication routes
//!
//! The server never stores tokens. After a successful code exchange the
//! access token, refresh token, and athlete id travel in cookies, and every
//! dashboard request passes them back.

use crate::resources::ServerResources;
use crate::security::cookies::{
    session_cookie, ACCESS_TOKEN_COOKIE, ATHLETE_ID_COOKIE, LONG_LIVED_MAX_AGE_SECS,
    REFRESH_TOKEN_COOKIE,
};
use axum::{
    extract::{Query, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use runyear_core::errors::AppError;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};
use url::Url;

/// Query parameters Strava sends to the callback
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    error: Option<String>,
}

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/strava", get(Self::handle_authorize))
            .route("/api/auth/strava/callback", get(Self::handle_callback))
            .with_state(resources)
    }

    /// Redirect the browser to the Strava authorization page
    async fn handle_authorize(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let client = resources
            .oauth_client
            .as_ref()
            .ok_or_else(|| AppError::config("Strava OAuth is not configured"))?;

        let url = client.authorization_url(None)?;
        info!("Redirecting to Strava authorization");
        Ok(Redirect::temporary(&url).into_response())
    }

    /// Exchange the authorization code, set session cookies, and return to the frontend
    async fn handle_callback(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<CallbackQuery>,
    ) -> Response {
        let public_url = &resources.config.public_url;

        if let Some(error) = params.error.as_deref() {
            warn!(error, "Strava authorization was denied");
            return Redirect::temporary(&frontend_url(public_url, Some(error))).into_response();
        }

        let Some(code) = params.code.as_deref().filter(|code| !code.is_empty()) else {
            return Redirect::temporary(&frontend_url(public_url, Some("no_code"))).into_response();
        };

        let Some(client) = resources.oauth_client.as_ref() else {
            error!("Strava OAuth callback received without configured credentials");
            return Redirect::temporary(&frontend_url(public_url, Some("token_exchange_failed")))
                .into_response();
        };

        match client.exchange_code(code).await {
            Ok(tokens) => {
                let secure = resources.config.environment.is_production();
                let athlete_id = tokens.athlete_id.to_string();
                info!(athlete_id = %athlete_id, "Strava authorization completed");

                let cookies = AppendHeaders([
                    (
                        SET_COOKIE,
                        session_cookie(
                            ACCESS_TOKEN_COOKIE,
                            &tokens.access_token,
                            tokens.expires_in,
                            secure,
                        ),
                    ),
                    (
                        SET_COOKIE,
                        session_cookie(
                            REFRESH_TOKEN_COOKIE,
                            &tokens.refresh_token,
                            LONG_LIVED_MAX_AGE_SECS,
                            secure,
                        ),
                    ),
                    (
                        SET_COOKIE,
                        session_cookie(ATHLETE_ID_COOKIE, &athlete_id, LONG_LIVED_MAX_AGE_SECS, secure),
                    ),
                ]);
                (cookies, Redirect::temporary(&frontend_url(public_url, None))).into_response()
            }
            Err(e) => {
                error!(error = %e, "Strava token exchange failed");
                Redirect::temporary(&frontend_url(public_url, Some("token_exchange_failed")))
                    .into_response()
            }
        }
    }
}

/// Frontend root URL, optionally carrying `?error=`
fn frontend_url(public_url: &str, error: Option<&str>) -> String {
    let base = format!("{}/", public_url.trim_end_matches('/'));
    let Ok(mut url) = Url::parse(&base) else {
        return error.map_or_else(|| base.clone(), |e| format!("{base}?error={e}"));
    };
    if let Some(error) = error {
        url.query_pairs_mut().append_pair("error", error);
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_url() {
        assert_eq!(
            frontend_url("http://localhost:3000", None),
            "http://localhost:3000/"
        );
        assert_eq!(
            frontend_url("http://localhost:3000/", Some("no_code")),
            "http://localhost:3000/?error=no_code"
        );
        assert_eq!(
            frontend_url("https://runyear.app", Some("access denied")),
            "https://runyear.app/?error=access+denied"
        );
    }
}
