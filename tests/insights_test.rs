// ABOUTME: Unit tests for the coaching insight generator
// ABOUTME: Covers plateau, deload, substitution, recovery gating, readiness, and ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate};
use ferrum::intelligence::{InsightGenerator, InsightTopic};
use ferrum::models::{
    E1rmSample, Equipment, Exercise, ExperienceLevel, LiftState, MovementPattern, MuscleGroup,
    RecoverySignals, Sex, TrainingGoal, UserProfile, WeightUnit, WorkoutHistory,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn bench_press() -> Exercise {
    Exercise {
        id: "bench_press".into(),
        name: "Bench Press".into(),
        equipment: Equipment::Barbell,
        primary_muscles: vec![MuscleGroup::Chest],
        secondary_muscles: vec![MuscleGroup::Triceps, MuscleGroup::Shoulders],
        movement: MovementPattern::HorizontalPush,
    }
}

fn incline_press() -> Exercise {
    Exercise {
        id: "incline_press".into(),
        name: "Incline Press".into(),
        equipment: Equipment::Barbell,
        primary_muscles: vec![MuscleGroup::Chest],
        secondary_muscles: vec![MuscleGroup::Shoulders],
        movement: MovementPattern::HorizontalPush,
    }
}

fn profile_with_recovery(recovery: Option<RecoverySignals>) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        sex: Sex::Unspecified,
        experience: ExperienceLevel::Advanced,
        goals: vec![TrainingGoal::Hypertrophy],
        weekly_frequency: 4,
        available_equipment: vec![Equipment::Barbell, Equipment::Dumbbell],
        preferred_unit: WeightUnit::Pounds,
        body_weight_kg: Some(85.0),
        recovery,
    }
}

/// Lift state whose history is `values` spaced weekly, ending on `end`
fn state_with_history(end: NaiveDate, values: &[f64]) -> LiftState {
    let mut state = LiftState::new("bench_press");
    let n = values.len() as i64;
    for (i, &value) in values.iter().enumerate() {
        state.e1rm_history.push(E1rmSample {
            date: end - Duration::days((n - 1 - i as i64) * 7),
            value,
        });
    }
    state.rolling_e1rm = values.last().copied();
    state.last_working_weight = 225.0;
    state
}

fn topics(insights: &[ferrum::intelligence::CoachingInsight]) -> Vec<InsightTopic> {
    insights.iter().map(|i| i.topic).collect()
}

#[test]
fn test_plateau_insight_for_flat_history() {
    // Eight samples of constant 275 across more than six weeks, advanced
    // profile, no recent deload
    let generator = InsightGenerator::new();
    let today = date(2026, 6, 1);
    let state = state_with_history(today, &[275.0; 8]);
    let profile = profile_with_recovery(None);
    let history = WorkoutHistory::new();

    let insights = generator.insights_for_exercise(
        &bench_press(),
        &state,
        &profile,
        &history,
        today,
        80,
        &[],
    );

    assert!(topics(&insights).contains(&InsightTopic::Plateau));
    let plateau = insights
        .iter()
        .find(|i| i.topic == InsightTopic::Plateau)
        .unwrap();
    assert!(
        plateau.message.contains("6 weeks"),
        "plateau message must reference the qualifying duration: {}",
        plateau.message
    );
}

#[test]
fn test_plateau_insight_suppressed_after_recent_deload() {
    let generator = InsightGenerator::new();
    let today = date(2026, 6, 1);
    let mut state = state_with_history(today, &[275.0; 8]);
    state.last_deload_date = Some(today - Duration::days(20));
    let profile = profile_with_recovery(None);
    let history = WorkoutHistory::new();

    let insights = generator.insights_for_exercise(
        &bench_press(),
        &state,
        &profile,
        &history,
        today,
        80,
        &[],
    );

    assert!(!topics(&insights).contains(&InsightTopic::Plateau));
}

#[test]
fn test_deload_insight_when_one_failure_from_threshold() {
    let generator = InsightGenerator::new();
    let today = date(2026, 6, 1);
    // Progressing normally, but two failures deep (threshold is three)
    let mut state = state_with_history(today, &[250.0, 255.0, 258.0, 262.0, 266.0]);
    state.failure_count = 2;
    let profile = profile_with_recovery(None);
    let history = WorkoutHistory::new();

    let insights = generator.insights_for_exercise(
        &bench_press(),
        &state,
        &profile,
        &history,
        today,
        80,
        &[],
    );

    assert!(topics(&insights).contains(&InsightTopic::Deload));
}

#[test]
fn test_deload_insight_for_stale_declining_lift() {
    let generator = InsightGenerator::new();
    let today = date(2026, 6, 1);
    // Declining trend, never deloaded
    let state = state_with_history(today, &[280.0, 276.0, 272.0, 268.0, 264.0]);
    let profile = profile_with_recovery(None);
    let history = WorkoutHistory::new();

    let insights = generator.insights_for_exercise(
        &bench_press(),
        &state,
        &profile,
        &history,
        today,
        80,
        &[],
    );

    assert!(topics(&insights).contains(&InsightTopic::Deload));
}

#[test]
fn test_recovery_insights_require_performance_evidence() {
    let generator = InsightGenerator::new();
    let today = date(2026, 6, 1);
    let recovery = Some(RecoverySignals {
        daily_protein_grams: Some(90.0),
        sleep_hours: Some(6.0),
    });
    let profile = profile_with_recovery(recovery);
    let history = WorkoutHistory::new();

    // Low signals alone, on a progressing lift: no nutrition or sleep nag
    let increasing = state_with_history(today, &[250.0, 256.0, 262.0, 268.0, 274.0]);
    let insights = generator.insights_for_exercise(
        &bench_press(),
        &increasing,
        &profile,
        &history,
        today,
        80,
        &[],
    );
    assert!(!topics(&insights).contains(&InsightTopic::Nutrition));
    assert!(!topics(&insights).contains(&InsightTopic::Sleep));

    // The same signals with a plateau behind them: both fire
    let plateaued = state_with_history(today, &[275.0; 8]);
    let insights = generator.insights_for_exercise(
        &bench_press(),
        &plateaued,
        &profile,
        &history,
        today,
        80,
        &[],
    );
    assert!(topics(&insights).contains(&InsightTopic::Nutrition));
    assert!(topics(&insights).contains(&InsightTopic::Sleep));
}

#[test]
fn test_substitution_only_fires_when_stalled() {
    let generator = InsightGenerator::new();
    let today = date(2026, 6, 1);
    let profile = profile_with_recovery(None);
    let history = WorkoutHistory::new();
    let substitutes = vec![incline_press()];

    // Progressing: the list is ignored
    let increasing = state_with_history(today, &[250.0, 256.0, 262.0, 268.0, 274.0]);
    let insights = generator.insights_for_exercise(
        &bench_press(),
        &increasing,
        &profile,
        &history,
        today,
        80,
        &substitutes,
    );
    assert!(!topics(&insights).contains(&InsightTopic::Substitution));

    // Plateaued: the first candidate is suggested
    let plateaued = state_with_history(today, &[275.0; 8]);
    let insights = generator.insights_for_exercise(
        &bench_press(),
        &plateaued,
        &profile,
        &history,
        today,
        80,
        &substitutes,
    );
    let substitution = insights
        .iter()
        .find(|i| i.topic == InsightTopic::Substitution)
        .expect("substitution insight expected on a plateau");
    assert_eq!(
        substitution.suggested_substitution.as_deref(),
        Some("incline_press")
    );
}

#[test]
fn test_readiness_insight_fires_independently_of_trend() {
    let generator = InsightGenerator::new();
    let today = date(2026, 6, 1);
    // Two samples: insufficient history
    let state = state_with_history(today, &[250.0, 252.0]);
    let profile = profile_with_recovery(None);
    let history = WorkoutHistory::new();

    let insights = generator.insights_for_exercise(
        &bench_press(),
        &state,
        &profile,
        &history,
        today,
        40,
        &[],
    );

    assert_eq!(topics(&insights), vec![InsightTopic::Readiness]);
}

#[test]
fn test_insufficient_trend_emits_nothing_without_low_readiness() {
    let generator = InsightGenerator::new();
    let today = date(2026, 6, 1);
    let state = state_with_history(today, &[250.0, 252.0]);
    // Signals are poor, but there is no performance evidence yet
    let profile = profile_with_recovery(Some(RecoverySignals {
        daily_protein_grams: Some(60.0),
        sleep_hours: Some(5.0),
    }));
    let history = WorkoutHistory::new();

    let insights = generator.insights_for_exercise(
        &bench_press(),
        &state,
        &profile,
        &history,
        today,
        85,
        &[],
    );

    assert!(insights.is_empty());
}

#[test]
fn test_insights_are_ordered_by_priority() {
    let generator = InsightGenerator::new();
    let today = date(2026, 6, 1);
    // Declining, never deloaded, poor recovery, low readiness, with a
    // substitute available: everything fires at once
    let state = state_with_history(today, &[280.0, 275.0, 270.0, 265.0, 260.0]);
    let profile = profile_with_recovery(Some(RecoverySignals {
        daily_protein_grams: Some(90.0),
        sleep_hours: Some(6.0),
    }));
    let history = WorkoutHistory::new();
    let substitutes = vec![incline_press()];

    let insights = generator.insights_for_exercise(
        &bench_press(),
        &state,
        &profile,
        &history,
        today,
        40,
        &substitutes,
    );

    let got = topics(&insights);
    assert_eq!(
        got,
        vec![
            InsightTopic::Deload,
            InsightTopic::Substitution,
            InsightTopic::Nutrition,
            InsightTopic::Sleep,
            InsightTopic::Readiness,
        ]
    );

    let priorities: Vec<u8> = insights.iter().map(|i| i.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort_unstable();
    assert_eq!(priorities, sorted, "insights must be priority-ordered");
}
