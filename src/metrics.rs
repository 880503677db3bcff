// ABOUTME: Metrics calculator for distance, mean speed, and calorie expenditure
// ABOUTME: Formula selection by activity kind, with full input re-validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Metrics Calculator
//!
//! Derives physical quantities from a validated step count, a
//! [`PhysicalProfile`], and a session duration:
//!
//! - **distance**: `steps × (height × step_length_coefficient) / 1000` (km)
//! - **mean speed**: distance divided by the session span in hours (km/h)
//! - **calories**: `weight × speed × duration_minutes / 60`, scaled by the
//!   walking factor for walking sessions (kcal)
//!
//! The module-level functions use the default coefficients; the same
//! computations are available on [`MetricsConfig`] with tuned coefficients.
//! Every function is pure and stateless.

use crate::config::MetricsConfig;
use crate::constants::units;
use crate::errors::{TrackerError, TrackerResult};
use crate::record::ActivityKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body measurements supplied by the caller per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body height in meters
    pub height_m: f64,
}

impl PhysicalProfile {
    /// Build a validated profile.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidProfile`] if weight or height is not a
    /// positive finite number.
    pub fn new(weight_kg: f64, height_m: f64) -> TrackerResult<Self> {
        let profile = Self {
            weight_kg,
            height_m,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Re-check the profile invariants.
    ///
    /// Fields are public, so consumers that construct or mutate a profile
    /// directly can still be caught by the calculator.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidProfile`] if weight or height is not a
    /// positive finite number.
    pub fn validate(&self) -> TrackerResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(TrackerError::InvalidProfile {
                reason: "weight must be greater than zero",
            });
        }
        if !self.height_m.is_finite() || self.height_m <= 0.0 {
            return Err(TrackerError::InvalidProfile {
                reason: "height must be greater than zero",
            });
        }
        Ok(())
    }
}

impl MetricsConfig {
    /// Estimated stride length in meters for the given height.
    #[must_use]
    pub fn step_length_m(&self, height_m: f64) -> f64 {
        height_m * self.step_length_coefficient
    }

    /// Distance covered in kilometers.
    ///
    /// Returns `0.0` when steps or height is non-positive: this is an
    /// internal helper of the speed computation, not an error path.
    #[must_use]
    pub fn distance_km(&self, steps: i64, height_m: f64) -> f64 {
        if steps <= 0 || height_m <= 0.0 {
            return 0.0;
        }
        steps as f64 * self.step_length_m(height_m) / units::METERS_PER_KM
    }

    /// Mean speed in km/h over the session span.
    ///
    /// Returns `0.0` for a zero duration.
    #[must_use]
    pub fn mean_speed_kmh(&self, steps: i64, height_m: f64, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 0.0;
        }
        let hours = duration.as_secs_f64() / units::SECONDS_PER_HOUR;
        self.distance_km(steps, height_m) / hours
    }

    /// Calories expended for the given activity kind.
    ///
    /// All inputs are re-validated here so the function is safely callable
    /// standalone, independent of the record parser.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidSteps`] for a non-positive step count,
    /// [`TrackerError::InvalidProfile`] for a non-positive weight or height,
    /// [`TrackerError::InvalidDuration`] for a zero duration, and
    /// [`TrackerError::InvalidSpeed`] when the computed mean speed comes out
    /// non-positive.
    pub fn spent_calories(
        &self,
        kind: ActivityKind,
        steps: i64,
        profile: PhysicalProfile,
        duration: Duration,
    ) -> TrackerResult<f64> {
        if steps <= 0 {
            return Err(TrackerError::InvalidSteps {
                value: steps.to_string(),
            });
        }
        profile.validate()?;
        if duration.is_zero() {
            return Err(TrackerError::non_positive_duration(
                humantime::format_duration(duration).to_string(),
            ));
        }

        let speed = self.mean_speed_kmh(steps, profile.height_m, duration);
        if speed <= 0.0 {
            return Err(TrackerError::InvalidSpeed);
        }

        let minutes = duration.as_secs_f64() / units::SECONDS_PER_MINUTE;
        let calories = profile.weight_kg * speed * minutes / units::MINUTES_PER_HOUR;
        Ok(match kind {
            ActivityKind::Walking => calories * self.walking_calorie_factor,
            ActivityKind::Running => calories,
        })
    }
}

/// Distance in kilometers under the default coefficients.
///
/// See [`MetricsConfig::distance_km`].
#[must_use]
pub fn distance_km(steps: i64, height_m: f64) -> f64 {
    MetricsConfig::DEFAULT.distance_km(steps, height_m)
}

/// Mean speed in km/h under the default coefficients.
///
/// See [`MetricsConfig::mean_speed_kmh`].
#[must_use]
pub fn mean_speed_kmh(steps: i64, height_m: f64, duration: Duration) -> f64 {
    MetricsConfig::DEFAULT.mean_speed_kmh(steps, height_m, duration)
}

/// Calories expended under the default coefficients.
///
/// See [`MetricsConfig::spent_calories`].
///
/// # Errors
///
/// Propagates the validation errors of [`MetricsConfig::spent_calories`].
pub fn spent_calories(
    kind: ActivityKind,
    steps: i64,
    profile: PhysicalProfile,
    duration: Duration,
) -> TrackerResult<f64> {
    MetricsConfig::DEFAULT.spent_calories(kind, steps, profile, duration)
}
