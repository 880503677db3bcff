// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions and stride/calorie model coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants used by the metrics calculator, grouped by domain.

/// Unit conversion constants
pub mod units {
    /// Meters in one kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
}

/// Stride and calorie model coefficients
pub mod model {
    /// Step length as a fraction of body height (height × 0.45 ≈ stride)
    pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
    /// Walking burns this fraction of the running calorie rate at equal speed
    pub const WALKING_CALORIE_FACTOR: f64 = 0.5;
}
