// ABOUTME: Tagged error taxonomy for record parsing and metric computation
// ABOUTME: One variant per failure kind so callers can branch without string matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error types for the tracker pipeline.
//!
//! Every validation failure in the parse, compute, and format pipeline maps
//! to exactly one [`TrackerError`] variant. Variants carry the offending value
//! where that helps a caller produce a useful message of its own.

use thiserror::Error;

/// Result alias used across the crate
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Failure kinds of record parsing and metric computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// Record did not split into the expected number of comma-separated fields
    #[error("invalid record format: expected {expected} comma-separated fields, got {found}")]
    Format {
        /// Field count the record shape requires
        expected: usize,
        /// Field count actually present
        found: usize,
    },

    /// A field in the record was an empty string
    #[error("empty {field} field in record")]
    EmptyField {
        /// Name of the empty field
        field: &'static str,
    },

    /// Steps field carried leading or trailing whitespace
    #[error("steps field contains surrounding whitespace: {value:?}")]
    Whitespace {
        /// Raw steps field as found in the record
        value: String,
    },

    /// Steps field did not parse as an integer, or was not positive
    #[error("step count must be a positive integer, got {value:?}")]
    InvalidSteps {
        /// Raw steps field as found in the record
        value: String,
    },

    /// Duration field did not parse as a duration literal, or was not positive
    #[error("invalid duration {value:?}: {reason}")]
    InvalidDuration {
        /// Raw duration field as found in the record
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Weight or height was not positive
    #[error("invalid physical profile: {reason}")]
    InvalidProfile {
        /// Which profile field was rejected and why
        reason: &'static str,
    },

    /// Computed mean speed came out non-positive
    #[error("mean speed must be positive")]
    InvalidSpeed,

    /// Activity label matched no recognized activity kind
    #[error("unknown activity kind: {label:?}")]
    UnknownActivity {
        /// Verbatim label from the record
        label: String,
    },
}

impl TrackerError {
    /// Build an [`InvalidDuration`](TrackerError::InvalidDuration) error for a non-positive span.
    pub(crate) fn non_positive_duration(value: impl Into<String>) -> Self {
        Self::InvalidDuration {
            value: value.into(),
            reason: "duration must be greater than zero".into(),
        }
    }
}
