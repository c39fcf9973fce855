// ABOUTME: Criterion benchmarks for the progression engine
// ABOUTME: Measures session scoring and planning over multi-month histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! Criterion benchmarks for the progression engine.
//!
//! Measures session scoring (estimator + trend reclassification) and the
//! planning path (load decision + insight generation) over synthetic
//! multi-month training histories.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ferrum::intelligence::ProgressionEngine;
use ferrum::models::{
    CompletedSession, Equipment, Exercise, ExerciseSessionResult, ExperienceLevel, LoadStrategy,
    MovementPattern, MuscleGroup, ProgressionContext, SetPrescription, SetResult, Sex,
    TrainingGoal, UserProfile, WeightUnit, WorkoutHistory,
};
use std::collections::HashMap;
use uuid::Uuid;

const SQUAT: &str = "back_squat";

fn squat() -> Exercise {
    Exercise {
        id: SQUAT.into(),
        name: "Back Squat".into(),
        equipment: Equipment::Barbell,
        primary_muscles: vec![MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary_muscles: vec![MuscleGroup::Core],
        movement: MovementPattern::Squat,
    }
}

fn profile() -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        sex: Sex::Unspecified,
        experience: ExperienceLevel::Intermediate,
        goals: vec![TrainingGoal::Strength],
        weekly_frequency: 3,
        available_equipment: vec![Equipment::Barbell],
        preferred_unit: WeightUnit::Pounds,
        body_weight_kg: Some(85.0),
        recovery: None,
    }
}

fn prescription(starting_load: f64) -> SetPrescription {
    SetPrescription {
        sets: 3,
        rep_range_min: 5,
        rep_range_max: 8,
        target_rir: Some(2),
        tempo: None,
        rest_seconds: 180,
        load_strategy: LoadStrategy::Absolute,
        target_percentage: None,
        load_increment: 5.0,
        starting_load,
    }
}

fn session_on(on: NaiveDate, index: usize) -> CompletedSession {
    let reps = 5 + (index % 4) as u32;
    let load = 200.0 + (index / 4) as f64 * 5.0;
    CompletedSession {
        date: on,
        template_id: None,
        name: format!("Lower {index}"),
        exercises: vec![ExerciseSessionResult {
            exercise_id: SQUAT.into(),
            prescription: prescription(load),
            sets: (0..3)
                .map(|_| SetResult {
                    reps,
                    load,
                    rir: Some(2),
                    completed: true,
                })
                .collect(),
            order: 0,
        }],
        started_at: on.and_hms_opt(18, 0, 0).unwrap().and_utc(),
        ended_at: on.and_hms_opt(19, 0, 0).unwrap().and_utc(),
        is_deload: false,
        lift_state_snapshots: HashMap::new(),
        readiness_score: 75,
    }
}

/// History of `weeks` weekly squat sessions
fn build_history(engine: &ProgressionEngine, weeks: usize) -> WorkoutHistory {
    let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let mut history = WorkoutHistory::new();
    for week in 0..weeks {
        let session = session_on(start + Duration::days(7 * week as i64), week);
        engine.score_session(&mut history, session).unwrap();
    }
    history
}

fn bench_score_session(c: &mut Criterion) {
    let engine = ProgressionEngine::new();
    let mut group = c.benchmark_group("score_session");

    for weeks in [12_usize, 26, 52] {
        let history = build_history(&engine, weeks);
        let next_date =
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap() + Duration::days(7 * weeks as i64);
        let session = session_on(next_date, weeks);

        group.bench_with_input(BenchmarkId::from_parameter(weeks), &weeks, |b, _| {
            b.iter(|| {
                let mut h = history.clone();
                engine
                    .score_session(&mut h, black_box(session.clone()))
                    .unwrap();
                h
            });
        });
    }
    group.finish();
}

fn bench_plan_for_exercise(c: &mut Criterion) {
    let engine = ProgressionEngine::new();
    let mut group = c.benchmark_group("plan_for_exercise");

    let user = profile();
    let exercise = squat();

    for weeks in [12_usize, 26, 52] {
        let history = build_history(&engine, weeks);
        let today =
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap() + Duration::days(7 * weeks as i64 + 2);
        let rx = prescription(200.0);

        group.bench_with_input(BenchmarkId::from_parameter(weeks), &weeks, |b, _| {
            b.iter(|| {
                let ctx = ProgressionContext::new(&user, &exercise, today);
                engine
                    .plan_for_exercise(black_box(&history), &rx, &ctx, 75, &[])
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_score_session, bench_plan_for_exercise);
criterion_main!(benches);
