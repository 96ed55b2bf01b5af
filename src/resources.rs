// ABOUTME: Shared resource container handed to every route as axum state
// ABOUTME: Holds immutable configuration, the activity provider, and the optional OAuth client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

//! # Server Resources
//!
//! Built once at startup and shared behind an `Arc`. Nothing in here is
//! mutated after construction, so handlers never take locks.

use crate::config::environment::ServerConfig;
use crate::oauth2_client::StravaOAuthClient;
use crate::providers::{ActivityProvider, StravaProvider};
use crate::services::dashboard::DashboardService;
use std::sync::Arc;
use tracing::warn;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Activity data source
    pub provider: Arc<dyn ActivityProvider>,
    /// Strava `OAuth` client; `None` when credentials are not configured
    pub oauth_client: Option<Arc<StravaOAuthClient>>,
}

impl ServerResources {
    /// Create resources backed by the real Strava API
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let provider: Arc<dyn ActivityProvider> = Arc::new(StravaProvider::new(&config.strava));
        let oauth_client = match StravaOAuthClient::from_config(&config.strava) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                warn!("Strava OAuth disabled: {}", e.message);
                None
            }
        };

        Self {
            config: Arc::new(config),
            provider,
            oauth_client,
        }
    }

    /// Create resources around an explicit provider and `OAuth` client
    #[must_use]
    pub fn with_provider(
        config: ServerConfig,
        provider: Arc<dyn ActivityProvider>,
        oauth_client: Option<StravaOAuthClient>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            provider,
            oauth_client: oauth_client.map(Arc::new),
        }
    }

    /// Dashboard service bound to these resources
    #[must_use]
    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(Arc::clone(&self.provider), Arc::clone(&self.config))
    }
}
