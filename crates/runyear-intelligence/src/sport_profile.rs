// ABOUTME: Sport configuration table keyed by sport type
// ABOUTME: Centralizes pace-vs-speed semantics, goal presets, and distance ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

use runyear_core::constants::units::HALF_MARATHON_METERS;
use runyear_core::models::SportType;
use serde::{Deserialize, Serialize};

use crate::trendline::TrendDirection;
use crate::year_summary::DistanceRange;

/// Quantity a trend line is fitted over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Time per distance; lower is better
    Pace,
    /// Distance per time; higher is better
    Speed,
    /// Distance covered; higher is better
    Distance,
}

impl MetricKind {
    /// Whether a lower value is an improvement for this metric
    #[must_use]
    pub const fn is_lower_better(self) -> bool {
        matches!(self, Self::Pace)
    }

    /// Classify a trend slope for this metric.
    ///
    /// This is the single place that decides which way is "better".
    #[must_use]
    pub fn classify(self, slope: f64) -> TrendDirection {
        if slope == 0.0 || !slope.is_finite() {
            return TrendDirection::Stable;
        }
        let improving = if self.is_lower_better() {
            slope < 0.0
        } else {
            slope > 0.0
        };
        if improving {
            TrendDirection::Improving
        } else {
            TrendDirection::Declining
        }
    }
}

/// Upper bound (exclusive) of a distance range, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    /// Range this bound belongs to
    pub range: DistanceRange,
    /// Exclusive upper bound in meters; `None` for the open-ended top range
    pub upper_meters: Option<f64>,
}

/// How the dashboard treats one sport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SportProfile {
    /// Sport this profile describes
    pub sport: SportType,
    /// Human-readable sport name
    pub display_name: &'static str,
    /// Whether the sport is reported as pace or speed
    pub metric: MetricKind,
    /// Suggested yearly goals in the display unit
    pub goal_presets: &'static [u32],
    /// Ascending distance ranges used by yearly summaries
    pub distance_ranges: [RangeBounds; 4],
}

const RUN_GOAL_PRESETS: [u32; 8] = [200, 250, 300, 365, 400, 500, 750, 1000];
const RIDE_GOAL_PRESETS: [u32; 8] = [1000, 1500, 2000, 3000, 4000, 5000, 6000, 8000];

const RUN_RANGES: [RangeBounds; 4] = [
    RangeBounds {
        range: DistanceRange::Short,
        upper_meters: Some(5_000.0),
    },
    RangeBounds {
        range: DistanceRange::Medium,
        upper_meters: Some(10_000.0),
    },
    RangeBounds {
        range: DistanceRange::Long,
        upper_meters: Some(HALF_MARATHON_METERS),
    },
    RangeBounds {
        range: DistanceRange::UltraLong,
        upper_meters: None,
    },
];

const RIDE_RANGES: [RangeBounds; 4] = [
    RangeBounds {
        range: DistanceRange::Short,
        upper_meters: Some(20_000.0),
    },
    RangeBounds {
        range: DistanceRange::Medium,
        upper_meters: Some(50_000.0),
    },
    RangeBounds {
        range: DistanceRange::Long,
        upper_meters: Some(100_000.0),
    },
    RangeBounds {
        range: DistanceRange::UltraLong,
        upper_meters: None,
    },
];

impl SportProfile {
    /// Running profile
    #[must_use]
    pub const fn run() -> Self {
        Self {
            sport: SportType::Run,
            display_name: "Running",
            metric: MetricKind::Pace,
            goal_presets: &RUN_GOAL_PRESETS,
            distance_ranges: RUN_RANGES,
        }
    }

    /// Cycling profile
    #[must_use]
    pub const fn ride() -> Self {
        Self {
            sport: SportType::Ride,
            display_name: "Cycling",
            metric: MetricKind::Speed,
            goal_presets: &RIDE_GOAL_PRESETS,
            distance_ranges: RIDE_RANGES,
        }
    }

    /// Look up the profile for a sport, if the dashboard supports it
    #[must_use]
    pub fn for_sport(sport: &SportType) -> Option<Self> {
        match sport {
            SportType::Run => Some(Self::run()),
            SportType::Ride => Some(Self::ride()),
            _ => None,
        }
    }

    /// Distance range an activity of `distance_meters` falls into
    #[must_use]
    pub fn range_for(&self, distance_meters: f64) -> DistanceRange {
        self.distance_ranges
            .iter()
            .find(|bounds| bounds.upper_meters.is_none_or(|upper| distance_meters < upper))
            .map_or(DistanceRange::UltraLong, |bounds| bounds.range)
    }
}
