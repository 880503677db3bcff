// ABOUTME: Metrics model configuration with environment overrides
// ABOUTME: Tunable stride and calorie coefficients, validated before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics model configuration.
//!
//! Configuration is environment-only: defaults come from [`crate::constants`]
//! and individual coefficients can be overridden per process via environment
//! variables. Unset or unparseable variables silently fall back to defaults;
//! out-of-range values are caught by [`MetricsConfig::validate`].

use crate::constants::model;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("invalid range: {0}")]
    InvalidRange(&'static str),
}

/// Coefficients of the stride and calorie models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Step length as a fraction of body height
    pub step_length_coefficient: f64,
    /// Fraction of the running calorie rate attributed to walking
    pub walking_calorie_factor: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl MetricsConfig {
    /// Default model coefficients
    pub const DEFAULT: Self = Self {
        step_length_coefficient: model::STEP_LENGTH_COEFFICIENT,
        walking_calorie_factor: model::WALKING_CALORIE_FACTOR,
    };

    /// Load configuration from the environment.
    ///
    /// Recognized variables: `TRACKER_STEP_LENGTH_COEFFICIENT`,
    /// `TRACKER_WALKING_CALORIE_FACTOR`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            step_length_coefficient: env::var("TRACKER_STEP_LENGTH_COEFFICIENT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(model::STEP_LENGTH_COEFFICIENT),
            walking_calorie_factor: env::var("TRACKER_WALKING_CALORIE_FACTOR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(model::WALKING_CALORIE_FACTOR),
        }
    }

    /// Check that all coefficients are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] if the step length coefficient
    /// is not positive or the walking factor is outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_length_coefficient <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "step length coefficient must be positive",
            ));
        }
        if self.walking_calorie_factor <= 0.0 || self.walking_calorie_factor > 1.0 {
            return Err(ConfigError::InvalidRange(
                "walking calorie factor must be within (0, 1]",
            ));
        }
        Ok(())
    }
}
