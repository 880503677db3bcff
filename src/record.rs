// ABOUTME: Record parser for comma-delimited activity session lines
// ABOUTME: Validates field count, numeric step token, and duration literal before any computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Record Parser
//!
//! Splits a comma-delimited activity record into typed fields. Two record
//! shapes exist:
//!
//! - **daily**: `"<steps>,<duration>"`, step count and span only; activity
//!   defaults to walking
//! - **training**: `"<steps>,<label>,<duration>"`, with an activity label
//!   between steps and duration
//!
//! The duration field uses compact duration literals (`"3h25m"`, `"30m"`)
//! with no calendar semantics. The activity label is stored verbatim; it is
//! resolved to an [`ActivityKind`] only when a calorie formula has to be
//! selected.

use crate::errors::{TrackerError, TrackerResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Activity kinds with distinct calorie formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Walking: reduced metabolic cost relative to running at equal speed
    Walking,
    /// Running: full calorie rate
    Running,
}

impl ActivityKind {
    /// Record label for walking sessions
    pub const WALKING_LABEL: &str = "Ходьба";
    /// Record label for running sessions
    pub const RUNNING_LABEL: &str = "Бег";

    /// Resolve a verbatim record label to an activity kind.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnknownActivity`] for any label other than
    /// the recognized tokens.
    pub fn from_label(label: &str) -> TrackerResult<Self> {
        match label {
            Self::WALKING_LABEL => Ok(Self::Walking),
            Self::RUNNING_LABEL => Ok(Self::Running),
            other => Err(TrackerError::UnknownActivity {
                label: other.to_owned(),
            }),
        }
    }

    /// The record label this kind was parsed from.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Walking => Self::WALKING_LABEL,
            Self::Running => Self::RUNNING_LABEL,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// A single validated activity session record.
///
/// Constructed only by [`parse_daily`] and [`parse_training`]; the invariants
/// `steps > 0` and `duration > 0` hold for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    steps: i64,
    activity: Option<String>,
    duration: Duration,
}

impl ActivityRecord {
    /// Step count, always positive.
    #[must_use]
    pub const fn steps(&self) -> i64 {
        self.steps
    }

    /// Session span, always a positive duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Verbatim activity label, absent for daily records.
    #[must_use]
    pub fn activity_label(&self) -> Option<&str> {
        self.activity.as_deref()
    }

    /// Resolve the activity kind for formula selection.
    ///
    /// Daily records carry no label and default to [`ActivityKind::Walking`].
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnknownActivity`] when the stored label is not
    /// a recognized token.
    pub fn kind(&self) -> TrackerResult<ActivityKind> {
        self.activity
            .as_deref()
            .map_or(Ok(ActivityKind::Walking), ActivityKind::from_label)
    }
}

/// Parse a 2-field daily record: `"<steps>,<duration>"`.
///
/// # Errors
///
/// Returns [`TrackerError::Format`], [`TrackerError::EmptyField`],
/// [`TrackerError::Whitespace`], [`TrackerError::InvalidSteps`], or
/// [`TrackerError::InvalidDuration`] per the validation rules.
pub fn parse_daily(raw: &str) -> TrackerResult<ActivityRecord> {
    let fields = split_fields(raw, &["steps", "duration"])?;
    Ok(ActivityRecord {
        steps: parse_steps(fields[0])?,
        activity: None,
        duration: parse_duration(fields[1])?,
    })
}

/// Parse a 3-field training record: `"<steps>,<label>,<duration>"`.
///
/// The label is stored verbatim; see [`ActivityRecord::kind`].
///
/// # Errors
///
/// Returns [`TrackerError::Format`], [`TrackerError::EmptyField`],
/// [`TrackerError::Whitespace`], [`TrackerError::InvalidSteps`], or
/// [`TrackerError::InvalidDuration`] per the validation rules.
pub fn parse_training(raw: &str) -> TrackerResult<ActivityRecord> {
    let fields = split_fields(raw, &["steps", "activity", "duration"])?;
    Ok(ActivityRecord {
        steps: parse_steps(fields[0])?,
        activity: Some(fields[1].to_owned()),
        duration: parse_duration(fields[2])?,
    })
}

/// Split on commas, enforce field count, reject empty fields.
fn split_fields<'a>(raw: &'a str, names: &[&'static str]) -> TrackerResult<Vec<&'a str>> {
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != names.len() {
        return Err(TrackerError::Format {
            expected: names.len(),
            found: fields.len(),
        });
    }
    for (field, name) in fields.iter().zip(names.iter().copied()) {
        if field.is_empty() {
            return Err(TrackerError::EmptyField { field: name });
        }
    }
    Ok(fields)
}

/// Strict positive-integer step token: no surrounding whitespace allowed.
fn parse_steps(field: &str) -> TrackerResult<i64> {
    if field.trim() != field {
        return Err(TrackerError::Whitespace {
            value: field.to_owned(),
        });
    }
    let steps: i64 = field.parse().map_err(|_| TrackerError::InvalidSteps {
        value: field.to_owned(),
    })?;
    if steps <= 0 {
        return Err(TrackerError::InvalidSteps {
            value: field.to_owned(),
        });
    }
    Ok(steps)
}

/// Compact duration literal, rejected when unparseable or zero.
fn parse_duration(field: &str) -> TrackerResult<Duration> {
    let duration =
        humantime::parse_duration(field).map_err(|err| TrackerError::InvalidDuration {
            value: field.to_owned(),
            reason: err.to_string(),
        })?;
    if duration.is_zero() {
        return Err(TrackerError::non_positive_duration(field));
    }
    Ok(duration)
}
