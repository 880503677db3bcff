// ABOUTME: Serde shape tests for public value types
// ABOUTME: Pins snake_case renames and the report's field layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_tracker::{parse_training, ActivityKind, MetricsReport, PhysicalProfile};
use serde_json::json;

#[test]
fn test_activity_kind_uses_snake_case() {
    assert_eq!(
        serde_json::to_value(ActivityKind::Walking).unwrap(),
        json!("walking")
    );
    assert_eq!(
        serde_json::to_value(ActivityKind::Running).unwrap(),
        json!("running")
    );

    let kind: ActivityKind = serde_json::from_value(json!("running")).unwrap();
    assert_eq!(kind, ActivityKind::Running);
}

#[test]
fn test_metrics_report_field_layout() {
    let record = parse_training("3456,Бег,3h00m").unwrap();
    let profile = PhysicalProfile::new(85.0, 1.85).unwrap();
    let report = MetricsReport::for_record(&record, profile).unwrap();

    let value = serde_json::to_value(report).unwrap();
    assert_eq!(value["kind"], json!("running"));
    assert!(value["duration_hours"].is_number());
    assert!(value["distance_km"].is_number());
    assert!(value["speed_kmh"].is_number());
    assert!(value["calories"].is_number());
}

#[test]
fn test_physical_profile_roundtrip_keys() {
    let profile = PhysicalProfile::new(75.0, 1.75).unwrap();

    let value = serde_json::to_value(profile).unwrap();
    assert_eq!(value, json!({ "weight_kg": 75.0, "height_m": 1.75 }));
}
