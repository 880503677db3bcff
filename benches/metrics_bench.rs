// ABOUTME: Criterion benchmarks for the record-to-report pipeline
// ABOUTME: Measures parsing, calorie formulas, and full report rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the record-to-report pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pierre_tracker::{
    parse_training, spent_calories, training_info, ActivityKind, PhysicalProfile,
};
use std::time::Duration;

fn bench_parse_training(c: &mut Criterion) {
    c.bench_function("parse_training", |b| {
        b.iter(|| parse_training(black_box("3456,Ходьба,3h25m")));
    });
}

fn bench_spent_calories(c: &mut Criterion) {
    let profile = PhysicalProfile {
        weight_kg: 85.0,
        height_m: 1.85,
    };
    let duration = Duration::from_secs(3 * 3600);

    c.bench_function("spent_calories_running", |b| {
        b.iter(|| {
            spent_calories(
                ActivityKind::Running,
                black_box(3456),
                black_box(profile),
                black_box(duration),
            )
        });
    });
}

fn bench_training_report(c: &mut Criterion) {
    c.bench_function("training_info", |b| {
        b.iter(|| training_info(black_box("3456,Бег,3h00m"), black_box(85.0), black_box(1.85)));
    });
}

criterion_group!(
    benches,
    bench_parse_training,
    bench_spent_calories,
    bench_training_report
);
criterion_main!(benches);
