// ABOUTME: Unit tests for the metrics calculator
// ABOUTME: Validates distance/speed/calorie formulas, boundary rejection, and purity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_tracker::{
    distance_km, mean_speed_kmh, spent_calories, ActivityKind, MetricsConfig, PhysicalProfile,
    TrackerError,
};
use std::time::Duration;

const EPSILON: f64 = 1e-9;

fn profile() -> PhysicalProfile {
    PhysicalProfile::new(85.0, 1.85).unwrap()
}

#[test]
fn test_distance_follows_stride_model() {
    // distance == steps × height × 0.45 / 1000
    for &(steps, height) in &[(678_i64, 1.75), (3456, 1.85), (1, 0.5), (100_000, 2.1)] {
        let expected = steps as f64 * height * 0.45 / 1000.0;
        assert!((distance_km(steps, height) - expected).abs() < EPSILON);
    }
}

#[test]
fn test_distance_clamps_degenerate_inputs() {
    assert!(distance_km(0, 1.75).abs() < EPSILON);
    assert!(distance_km(-5, 1.75).abs() < EPSILON);
    assert!(distance_km(678, 0.0).abs() < EPSILON);
    assert!(distance_km(678, -1.75).abs() < EPSILON);
}

#[test]
fn test_mean_speed_is_distance_over_hours() {
    let duration = Duration::from_secs(3 * 3600);
    let expected = distance_km(3456, 1.85) / 3.0;

    assert!((mean_speed_kmh(3456, 1.85, duration) - expected).abs() < EPSILON);
}

#[test]
fn test_mean_speed_zero_duration() {
    assert!(mean_speed_kmh(3456, 1.85, Duration::ZERO).abs() < EPSILON);
}

#[test]
fn test_walking_calories_are_half_of_running() {
    let duration = Duration::from_secs(3 * 3600);
    let walking = spent_calories(ActivityKind::Walking, 3456, profile(), duration).unwrap();
    let running = spent_calories(ActivityKind::Running, 3456, profile(), duration).unwrap();

    assert!(walking > 0.0);
    assert!((walking * 2.0 - running).abs() < EPSILON);
}

#[test]
fn test_running_calorie_formula() {
    // kcal = weight × speed × minutes / 60
    let duration = Duration::from_secs(50 * 60);
    let speed = mean_speed_kmh(678, 1.75, duration);
    let expected = 75.0 * speed * 50.0 / 60.0;

    let profile = PhysicalProfile::new(75.0, 1.75).unwrap();
    let running = spent_calories(ActivityKind::Running, 678, profile, duration).unwrap();
    assert!((running - expected).abs() < EPSILON);
}

#[test]
fn test_spent_calories_rejects_non_positive_steps() {
    let duration = Duration::from_secs(3600);

    assert!(matches!(
        spent_calories(ActivityKind::Walking, 0, profile(), duration).unwrap_err(),
        TrackerError::InvalidSteps { .. }
    ));
    assert!(matches!(
        spent_calories(ActivityKind::Running, -10, profile(), duration).unwrap_err(),
        TrackerError::InvalidSteps { .. }
    ));
}

#[test]
fn test_spent_calories_rejects_invalid_profile() {
    // Fields are public; the calculator re-validates what the constructor would
    let duration = Duration::from_secs(3600);
    let zero_weight = PhysicalProfile {
        weight_kg: 0.0,
        height_m: 1.85,
    };
    let negative_height = PhysicalProfile {
        weight_kg: 85.0,
        height_m: -1.85,
    };

    assert!(matches!(
        spent_calories(ActivityKind::Walking, 3456, zero_weight, duration).unwrap_err(),
        TrackerError::InvalidProfile { .. }
    ));
    assert!(matches!(
        spent_calories(ActivityKind::Walking, 3456, negative_height, duration).unwrap_err(),
        TrackerError::InvalidProfile { .. }
    ));
}

#[test]
fn test_spent_calories_rejects_zero_duration() {
    assert!(matches!(
        spent_calories(ActivityKind::Walking, 3456, profile(), Duration::ZERO).unwrap_err(),
        TrackerError::InvalidDuration { .. }
    ));
}

#[test]
fn test_degenerate_stride_config_yields_invalid_speed() {
    let config = MetricsConfig {
        step_length_coefficient: 0.0,
        walking_calorie_factor: 0.5,
    };
    let result =
        config.spent_calories(ActivityKind::Running, 3456, profile(), Duration::from_secs(3600));

    assert_eq!(result.unwrap_err(), TrackerError::InvalidSpeed);
}

#[test]
fn test_profile_constructor_validation() {
    assert!(matches!(
        PhysicalProfile::new(0.0, 1.85).unwrap_err(),
        TrackerError::InvalidProfile { .. }
    ));
    assert!(matches!(
        PhysicalProfile::new(85.0, 0.0).unwrap_err(),
        TrackerError::InvalidProfile { .. }
    ));
    assert!(matches!(
        PhysicalProfile::new(f64::NAN, 1.85).unwrap_err(),
        TrackerError::InvalidProfile { .. }
    ));
    assert!(PhysicalProfile::new(85.0, 1.85).is_ok());
}

#[test]
fn test_computation_is_idempotent() {
    let duration = Duration::from_secs(2 * 3600 + 17 * 60);

    let first = spent_calories(ActivityKind::Running, 9876, profile(), duration).unwrap();
    let second = spent_calories(ActivityKind::Running, 9876, profile(), duration).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());

    assert_eq!(
        distance_km(9876, 1.85).to_bits(),
        distance_km(9876, 1.85).to_bits()
    );
}

#[test]
fn test_config_coefficient_scales_distance() {
    let tuned = MetricsConfig {
        step_length_coefficient: 0.9,
        walking_calorie_factor: 0.5,
    };

    let base = distance_km(1000, 1.75);
    let scaled = tuned.distance_km(1000, 1.75);
    assert!((scaled - base * 2.0).abs() < EPSILON);
}
