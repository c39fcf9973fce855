// ABOUTME: End-to-end scenarios through the progression engine
// ABOUTME: Session scoring, trend reclassification, bookkeeping, and planning flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate};
use ferrum::intelligence::{
    EngineConfig, InsightTopic, LoadAction, ProgressionConfig, ProgressionEngine, TrendState,
};
use ferrum::models::{
    CompletedSession, Equipment, Exercise, ExerciseSessionResult, ExperienceLevel, LoadStrategy,
    MovementPattern, MuscleGroup, ProgressionContext, SetPrescription, SetResult, Sex,
    TrainingGoal, UserProfile, WeightUnit, WorkoutHistory,
};
use std::collections::HashMap;
use uuid::Uuid;

const SQUAT: &str = "back_squat";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

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

fn profile(experience: ExperienceLevel) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        sex: Sex::Male,
        experience,
        goals: vec![TrainingGoal::Strength],
        weekly_frequency: 3,
        available_equipment: vec![Equipment::Barbell],
        preferred_unit: WeightUnit::Pounds,
        body_weight_kg: Some(90.0),
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

fn session_on(on: NaiveDate, reps: u32, load: f64, readiness: u8) -> CompletedSession {
    CompletedSession {
        date: on,
        template_id: None,
        name: "Lower A".into(),
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
        readiness_score: readiness,
    }
}

#[test]
fn test_scoring_builds_lift_state_and_bookkeeping() {
    let engine = ProgressionEngine::new();
    let mut history = WorkoutHistory::new();
    let start = date(2026, 3, 2);

    engine
        .score_session(&mut history, session_on(start, 8, 185.0, 80))
        .unwrap();

    let state = history.lift_state(SQUAT).unwrap();
    assert_eq!(state.e1rm_history.len(), 1);
    assert!(state.rolling_e1rm.is_some());
    assert_eq!(state.trend, TrendState::Insufficient);
    assert!((state.last_working_weight - 185.0).abs() < f64::EPSILON);

    // Readiness and tonnage are logged per session date
    assert_eq!(history.readiness_history.len(), 1);
    assert_eq!(history.readiness_history[0].score, 80);
    let tonnage = history.volume_by_date.get(&start).copied().unwrap();
    assert!((tonnage - 3.0 * 8.0 * 185.0).abs() < 1e-9);
}

#[test]
fn test_scoring_captures_prior_state_snapshots() {
    let engine = ProgressionEngine::new();
    let mut history = WorkoutHistory::new();
    let start = date(2026, 3, 2);

    engine
        .score_session(&mut history, session_on(start, 8, 185.0, 80))
        .unwrap();
    engine
        .score_session(
            &mut history,
            session_on(start + Duration::days(7), 8, 185.0, 82),
        )
        .unwrap();

    // The first session had no prior state; the second snapshots it
    assert!(history.sessions[0].lift_state_snapshots.is_empty());
    let snapshot = history.sessions[1]
        .lift_state_snapshots
        .get(SQUAT)
        .expect("second session must snapshot the prior lift state");
    assert_eq!(snapshot.e1rm_history.len(), 1);

    // The live state has moved on while the snapshot is frozen
    assert_eq!(history.lift_state(SQUAT).unwrap().e1rm_history.len(), 2);
}

#[test]
fn test_trend_reclassified_as_history_accumulates() {
    let engine = ProgressionEngine::new();
    let mut history = WorkoutHistory::new();
    let start = date(2026, 3, 2);

    // Nine weekly sessions at identical loads: e1RM flatlines across > 6 weeks
    for week in 0..9 {
        engine
            .score_session(
                &mut history,
                session_on(start + Duration::days(7 * week), 6, 235.0, 75),
            )
            .unwrap();
    }

    assert_eq!(history.lift_state(SQUAT).unwrap().trend, TrendState::Plateau);
}

#[test]
fn test_plateaued_lift_plans_hold_with_plateau_insight() {
    let engine = ProgressionEngine::new();
    let mut history = WorkoutHistory::new();
    let start = date(2026, 3, 2);

    for week in 0..9 {
        engine
            .score_session(
                &mut history,
                session_on(start + Duration::days(7 * week), 6, 235.0, 75),
            )
            .unwrap();
    }

    let exercise = squat();
    let user = profile(ExperienceLevel::Advanced);
    let today = start + Duration::days(7 * 9);
    let ctx = ProgressionContext::new(&user, &exercise, today);

    let plan = engine
        .plan_for_exercise(&history, &prescription(235.0), &ctx, 80, &[])
        .unwrap();

    // Six reps is in-range but below the top: hold the load
    assert_eq!(plan.decision.action, LoadAction::Hold);
    assert!((plan.decision.next_load - 235.0).abs() < f64::EPSILON);

    let topics: Vec<InsightTopic> = plan.insights.iter().map(|i| i.topic).collect();
    assert!(
        topics.contains(&InsightTopic::Plateau),
        "expected a plateau insight, got {topics:?}"
    );
}

#[test]
fn test_planning_on_empty_history_prescribes_starting_load() {
    let engine = ProgressionEngine::new();
    let history = WorkoutHistory::new();
    let exercise = squat();
    let user = profile(ExperienceLevel::Beginner);
    let ctx = ProgressionContext::new(&user, &exercise, date(2026, 3, 2));

    let plan = engine
        .plan_for_exercise(&history, &prescription(135.0), &ctx, 80, &[])
        .unwrap();

    assert_eq!(plan.decision.action, LoadAction::FirstSession);
    assert!((plan.decision.next_load - 135.0).abs() < f64::EPSILON);
    assert!(plan.insights.is_empty());
}

#[test]
fn test_successful_sessions_progress_the_load_end_to_end() {
    let engine = ProgressionEngine::new();
    let mut history = WorkoutHistory::new();
    let start = date(2026, 3, 2);
    let exercise = squat();
    let user = profile(ExperienceLevel::Intermediate);

    // Two top-of-range sessions; the default policy increases on the second
    engine
        .score_session(&mut history, session_on(start, 8, 200.0, 80))
        .unwrap();
    let ctx = ProgressionContext::new(&user, &exercise, start + Duration::days(2));
    let first_plan = engine
        .plan_for_exercise(&history, &prescription(200.0), &ctx, 80, &[])
        .unwrap();
    assert_eq!(first_plan.decision.action, LoadAction::Hold);

    // The caller persists the updated counters
    history
        .lift_states
        .insert(SQUAT.into(), first_plan.decision.state.clone());

    engine
        .score_session(
            &mut history,
            session_on(start + Duration::days(7), 8, 200.0, 80),
        )
        .unwrap();
    let ctx = ProgressionContext::new(&user, &exercise, start + Duration::days(9));
    let second_plan = engine
        .plan_for_exercise(&history, &prescription(200.0), &ctx, 80, &[])
        .unwrap();

    assert_eq!(second_plan.decision.action, LoadAction::Increase { by: 5.0 });
    assert!((second_plan.decision.next_load - 205.0).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_configuration_is_refused() {
    let config = EngineConfig {
        progression: ProgressionConfig {
            deload_percentage: 1.5,
            ..ProgressionConfig::default()
        },
        ..EngineConfig::default()
    };
    assert!(ProgressionEngine::with_config(config).is_err());
}

#[test]
fn test_out_of_order_session_is_refused() {
    let engine = ProgressionEngine::new();
    let mut history = WorkoutHistory::new();

    engine
        .score_session(&mut history, session_on(date(2026, 3, 9), 8, 185.0, 80))
        .unwrap();
    let err = engine.score_session(&mut history, session_on(date(2026, 3, 2), 8, 185.0, 80));
    assert!(err.is_err(), "sample history is append-only");
}
