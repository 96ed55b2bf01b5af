// ABOUTME: Environment-based server configuration with validation
// ABOUTME: Ports, public URL, Strava endpoints and credentials, and dashboard defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use anyhow::{bail, Context, Result};
use runyear_intelligence::IntelligenceConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Largest page size the Strava activities endpoint accepts
pub const STRAVA_MAX_PER_PAGE: u32 = 200;

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production: cookies are marked `Secure`
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Strava API and `OAuth` settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StravaConfig {
    /// `OAuth` client id
    pub client_id: Option<String>,
    /// `OAuth` client secret
    pub client_secret: Option<String>,
    /// Callback URL registered with Strava
    pub redirect_uri: String,
    /// REST API base URL
    pub api_base: String,
    /// Authorization page URL
    pub auth_url: String,
    /// Token exchange URL
    pub token_url: String,
    /// Activities requested per page
    pub activities_per_page: u32,
    /// Upper bound on pages fetched for one window
    pub max_pages: u32,
}

impl StravaConfig {
    /// Whether both `OAuth` credentials are present
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

impl Default for StravaConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: format!("http://localhost:{DEFAULT_HTTP_PORT}/api/auth/strava/callback"),
            api_base: "https://www.strava.com/api/v3".into(),
            auth_url: "https://www.strava.com/oauth/authorize".into(),
            token_url: "https://www.strava.com/oauth/token".into(),
            activities_per_page: STRAVA_MAX_PER_PAGE,
            max_pages: 10,
        }
    }
}

/// Defaults for the dashboard endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Years summarized by the historical endpoint
    pub historical_years: u32,
    /// Years fetched by pace analysis when the request does not say
    pub pace_analysis_years: u32,
    /// Largest `years` a pace analysis request may ask for
    pub max_pace_analysis_years: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            historical_years: 5,
            pace_analysis_years: 3,
            max_pace_analysis_years: 10,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Frontend URL the `OAuth` callback redirects to
    pub public_url: String,
    /// Comma-separated CORS origins, or `*`
    pub cors_allowed_origins: String,
    /// Strava settings
    pub strava: StravaConfig,
    /// Dashboard endpoint defaults
    pub dashboard: DashboardConfig,
    /// Engine configuration
    pub intelligence: IntelligenceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let public_url = "http://localhost:3000".to_owned();
        Self {
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            cors_allowed_origins: public_url.clone(),
            public_url,
            strava: StravaConfig::default(),
            dashboard: DashboardConfig::default(),
            intelligence: IntelligenceConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        let defaults = Self::default();

        let public_url = env_var_or("PUBLIC_URL", &defaults.public_url);
        let config = Self {
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors_allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", &public_url),
            public_url,
            strava: StravaConfig {
                client_id: env::var("STRAVA_CLIENT_ID").ok(),
                client_secret: env::var("STRAVA_CLIENT_SECRET").ok(),
                redirect_uri: env_var_or("STRAVA_REDIRECT_URI", &defaults.strava.redirect_uri),
                api_base: env_var_or("STRAVA_API_BASE", &defaults.strava.api_base),
                auth_url: env_var_or("STRAVA_AUTH_URL", &defaults.strava.auth_url),
                token_url: env_var_or("STRAVA_TOKEN_URL", &defaults.strava.token_url),
                activities_per_page: env_var_or(
                    "STRAVA_ACTIVITIES_PER_PAGE",
                    &defaults.strava.activities_per_page.to_string(),
                )
                .parse()
                .context("Invalid STRAVA_ACTIVITIES_PER_PAGE value")?,
                max_pages: env_var_or("STRAVA_MAX_PAGES", &defaults.strava.max_pages.to_string())
                    .parse()
                    .context("Invalid STRAVA_MAX_PAGES value")?,
            },
            dashboard: DashboardConfig {
                historical_years: env_var_or(
                    "HISTORICAL_YEARS",
                    &defaults.dashboard.historical_years.to_string(),
                )
                .parse()
                .context("Invalid HISTORICAL_YEARS value")?,
                pace_analysis_years: env_var_or(
                    "PACE_ANALYSIS_YEARS",
                    &defaults.dashboard.pace_analysis_years.to_string(),
                )
                .parse()
                .context("Invalid PACE_ANALYSIS_YEARS value")?,
                max_pace_analysis_years: env_var_or(
                    "MAX_PACE_ANALYSIS_YEARS",
                    &defaults.dashboard.max_pace_analysis_years.to_string(),
                )
                .parse()
                .context("Invalid MAX_PACE_ANALYSIS_YEARS value")?,
            },
            intelligence: IntelligenceConfig::from_env()
                .context("Invalid intelligence configuration")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.strava.activities_per_page == 0
            || self.strava.activities_per_page > STRAVA_MAX_PER_PAGE
        {
            bail!("STRAVA_ACTIVITIES_PER_PAGE must be between 1 and {STRAVA_MAX_PER_PAGE}");
        }
        if self.strava.max_pages == 0 {
            bail!("STRAVA_MAX_PAGES must be at least 1");
        }
        if self.dashboard.historical_years == 0 {
            bail!("HISTORICAL_YEARS must be at least 1");
        }
        if self.dashboard.pace_analysis_years == 0
            || self.dashboard.pace_analysis_years > self.dashboard.max_pace_analysis_years
        {
            bail!("PACE_ANALYSIS_YEARS must be between 1 and MAX_PACE_ANALYSIS_YEARS");
        }
        self.intelligence
            .validate()
            .context("Invalid intelligence configuration")?;
        Ok(())
    }

    /// Log-safe description of the configuration (no secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Runyear Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Public URL: {}\n\
             - Strava OAuth: {}\n\
             - Strava API: {}\n\
             - Page Size: {} (max {} pages)\n\
             - Historical Years: {}\n\
             - Pace Analysis Years: {} (max {})\n\
             - Trendline Mode: {:?}",
            self.http_port,
            self.environment,
            self.public_url,
            if self.strava.has_credentials() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.strava.api_base,
            self.strava.activities_per_page,
            self.strava.max_pages,
            self.dashboard.historical_years,
            self.dashboard.pace_analysis_years,
            self.dashboard.max_pace_analysis_years,
            self.intelligence.trendline_mode,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
