// ABOUTME: Core data models shared by the engine and the server
// ABOUTME: Re-exports activity, sport type, and athlete models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

mod activity;
mod athlete;
mod sport;

pub use activity::Activity;
pub use athlete::{ActivityTotals, Athlete, AthleteStats};
pub use sport::SportType;
