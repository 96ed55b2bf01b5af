// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups unit conversion factors and calendar constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

//! Constants shared by the engine and the server

/// Unit conversion factors
pub mod units;

/// Calendar constants used by goal pacing
pub mod calendar {
    /// Days per year used for goal pacing (leap years are not special-cased)
    pub const DAYS_PER_YEAR: f64 = 365.0;

    /// Days per week
    pub const DAYS_PER_WEEK: u32 = 7;

    /// Months per year
    pub const MONTHS_PER_YEAR: u32 = 12;

    /// Seconds per day
    pub const SECONDS_PER_DAY: i64 = 86_400;
}
