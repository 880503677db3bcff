// ABOUTME: Activity record parsing and derived fitness metrics for the Pierre platform
// ABOUTME: Pure computation library: parse, validate, compute, format a report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Tracker
//!
//! Parses comma-delimited activity session records (step count, optional
//! activity label, duration) and computes derived fitness metrics: distance
//! traveled, mean speed, and calories expended. Walking and running carry
//! distinct calorie formulas. Everything is a pure function over its
//! arguments; arbitrarily many calls may run concurrently without
//! coordination.
//!
//! ## Modules
//!
//! - **record**: record parser producing validated [`ActivityRecord`] values
//! - **metrics**: distance, mean speed, and calorie calculators
//! - **report**: report assembly and the [`training_info`] /
//!   [`day_action_info`] entry points
//! - **config**: tunable model coefficients with environment overrides
//! - **errors**: tagged error taxonomy callers can branch on
//! - **constants**: unit conversions and model coefficients
//! - **logging**: optional `tracing` subscriber setup for embedding callers
//!
//! ## Example
//!
//! ```
//! use pierre_tracker::{day_action_info, training_info};
//!
//! let report = training_info("3456,Ходьба,3h00m", 85.0, 1.85)?;
//! assert!(report.starts_with("Тип тренировки: Ходьба"));
//!
//! let daily = day_action_info("678,0h50m", 75.0, 1.75);
//! assert!(daily.contains("Количество шагов: 678."));
//! # Ok::<(), pierre_tracker::TrackerError>(())
//! ```

/// Tunable model coefficients with environment overrides
pub mod config;

/// Unit conversion and model coefficient constants
pub mod constants;

/// Tagged error taxonomy for parsing and metric computation
pub mod errors;

/// Structured logging setup for embedding callers
pub mod logging;

/// Distance, mean speed, and calorie calculators
pub mod metrics;

/// Record parser for comma-delimited activity session lines
pub mod record;

/// Report assembly and public entry points
pub mod report;

pub use config::{ConfigError, MetricsConfig};
pub use errors::{TrackerError, TrackerResult};
pub use metrics::{distance_km, mean_speed_kmh, spent_calories, PhysicalProfile};
pub use record::{parse_daily, parse_training, ActivityKind, ActivityRecord};
pub use report::{day_action_info, training_info, MetricsReport};
