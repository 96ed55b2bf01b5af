// ABOUTME: Sport type enumeration for fitness activities
// ABOUTME: Parses provider activity type strings and renders them back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of sport types the dashboard distinguishes
///
/// Values serialize as the provider's activity type string (`"Run"`,
/// `"Ride"`, ...) so query parameters and upstream payloads share one form.
/// Anything else is carried verbatim in [`SportType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SportType {
    /// Running activity
    Run,
    /// Cycling activity
    Ride,
    /// Walking activity
    Walk,
    /// Hiking activity
    Hike,
    /// Swimming activity
    Swim,
    /// Treadmill running activity
    VirtualRun,
    /// Indoor/trainer cycling activity
    VirtualRide,
    /// Other activity type not covered above
    Other(String),
}

impl SportType {
    /// Create `SportType` from the provider's activity type string
    #[must_use]
    pub fn from_provider_string(provider_sport: &str) -> Self {
        match provider_sport {
            "Run" => Self::Run,
            "Ride" => Self::Ride,
            "Walk" => Self::Walk,
            "Hike" => Self::Hike,
            "Swim" => Self::Swim,
            "VirtualRun" => Self::VirtualRun,
            "VirtualRide" => Self::VirtualRide,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Provider activity type string for this sport
    #[must_use]
    pub fn as_provider_str(&self) -> &str {
        match self {
            Self::Run => "Run",
            Self::Ride => "Ride",
            Self::Walk => "Walk",
            Self::Hike => "Hike",
            Self::Swim => "Swim",
            Self::VirtualRun => "VirtualRun",
            Self::VirtualRide => "VirtualRide",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for SportType {
    fn from(value: String) -> Self {
        Self::from_provider_string(&value)
    }
}

impl From<SportType> for String {
    fn from(value: SportType) -> Self {
        value.as_provider_str().to_owned()
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_provider_str())
    }
}
