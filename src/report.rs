// ABOUTME: Report assembly and the two public record-to-report entry points
// ABOUTME: Fixed templates with 2-decimal rounding; errors swallowed only on the daily path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session reports
//!
//! Turns a raw record plus a caller-supplied profile into a human-readable
//! report. [`training_info`] propagates every validation error;
//! [`day_action_info`] logs the error as a `tracing` event and returns an
//! empty string, per its contract with callers that only print. Either every
//! derived value is computed or an error is returned before any value is
//! produced; a partially filled report cannot be observed.

use crate::config::MetricsConfig;
use crate::constants::units;
use crate::errors::TrackerResult;
use crate::metrics::PhysicalProfile;
use crate::record::{self, ActivityKind, ActivityRecord};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Metrics derived from one training record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Activity kind the calorie formula was selected by
    pub kind: ActivityKind,
    /// Session span in hours
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub speed_kmh: f64,
    /// Calories expended in kcal
    pub calories: f64,
}

impl MetricsReport {
    /// Compute a report from raw session values, selecting the formula by
    /// the verbatim activity label. Callable standalone, without the parser.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TrackerError::UnknownActivity`] when the label is not
    /// a recognized token, and propagates the calorie calculator's
    /// validation errors.
    pub fn compute(
        label: &str,
        steps: i64,
        profile: PhysicalProfile,
        duration: Duration,
    ) -> TrackerResult<Self> {
        Self::for_kind(ActivityKind::from_label(label)?, steps, profile, duration)
    }

    /// Compute all derived values for a parsed record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TrackerError::UnknownActivity`] when the record's
    /// label is not a recognized token, and propagates the calorie
    /// calculator's validation errors.
    pub fn for_record(record: &ActivityRecord, profile: PhysicalProfile) -> TrackerResult<Self> {
        Self::for_kind(record.kind()?, record.steps(), profile, record.duration())
    }

    fn for_kind(
        kind: ActivityKind,
        steps: i64,
        profile: PhysicalProfile,
        duration: Duration,
    ) -> TrackerResult<Self> {
        let config = MetricsConfig::DEFAULT;
        let calories = config.spent_calories(kind, steps, profile, duration)?;
        Ok(Self {
            kind,
            duration_hours: duration.as_secs_f64() / units::SECONDS_PER_HOUR,
            distance_km: config.distance_km(steps, profile.height_m),
            speed_kmh: config.mean_speed_kmh(steps, profile.height_m, duration),
            calories,
        })
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}\n",
            self.kind.label(),
            self.duration_hours,
            self.distance_km,
            self.speed_kmh,
            self.calories,
        )
    }
}

/// Report on a 3-field training record.
///
/// Parses the record, validates the profile, computes the derived values,
/// and renders the fixed template. The record's activity label selects the
/// calorie formula.
///
/// # Errors
///
/// Propagates every parsing and validation error to the caller.
pub fn training_info(raw: &str, weight_kg: f64, height_m: f64) -> TrackerResult<String> {
    let record = record::parse_training(raw)?;
    let profile = PhysicalProfile::new(weight_kg, height_m)?;
    let report = MetricsReport::for_record(&record, profile)?;
    Ok(report.to_string())
}

/// Report on a 2-field daily record, walking metrics only.
///
/// Any validation failure is emitted as a `tracing` warning and an empty
/// string is returned; the error is swallowed for the caller.
#[must_use]
pub fn day_action_info(raw: &str, weight_kg: f64, height_m: f64) -> String {
    match daily_report(raw, weight_kg, height_m) {
        Ok(report) => report,
        Err(err) => {
            warn!(error = %err, record = raw, "daily activity record rejected");
            String::new()
        }
    }
}

/// Fallible body of [`day_action_info`]: profile first, then the record.
fn daily_report(raw: &str, weight_kg: f64, height_m: f64) -> TrackerResult<String> {
    let profile = PhysicalProfile::new(weight_kg, height_m)?;
    let record = record::parse_daily(raw)?;
    let config = MetricsConfig::DEFAULT;
    let steps = record.steps();
    let distance = config.distance_km(steps, profile.height_m);
    let calories =
        config.spent_calories(ActivityKind::Walking, steps, profile, record.duration())?;
    Ok(format!(
        "Количество шагов: {steps}.\nДистанция составила {distance:.2} км.\nВы сожгли {calories:.2} ккал.\n"
    ))
}
