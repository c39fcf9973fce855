// ABOUTME: Accumulated workout history with per-lift state and readiness log
// ABOUTME: WorkoutHistory and ReadinessEntry definitions with lookup accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use super::lift_state::LiftState;
use super::session::{CompletedSession, ExerciseSessionResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One readiness observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReadinessEntry {
    /// Date the score was reported
    pub date: NaiveDate,
    /// Readiness score (0-100)
    pub score: u8,
}

/// The full training log for one user
///
/// Sessions are an append-only, time-ordered log; `lift_states` holds the
/// single mutable state record per exercise. The engine reads this structure
/// and returns updated values; the caller persists them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutHistory {
    /// Completed sessions, oldest first
    pub sessions: Vec<CompletedSession>,
    /// Current progression state per exercise id
    pub lift_states: HashMap<String, LiftState>,
    /// Reported readiness scores, oldest first
    #[serde(default)]
    pub readiness_history: Vec<ReadinessEntry>,
    /// Training volume (tonnage) per session date
    #[serde(default)]
    pub volume_by_date: BTreeMap<NaiveDate, f64>,
}

impl WorkoutHistory {
    /// Empty history for a new user
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lift state for an exercise, if it has ever been attempted
    #[must_use]
    pub fn lift_state(&self, exercise_id: &str) -> Option<&LiftState> {
        self.lift_states.get(exercise_id)
    }

    /// Most recent session result for an exercise, with its session
    #[must_use]
    pub fn last_result_for(
        &self,
        exercise_id: &str,
    ) -> Option<(&CompletedSession, &ExerciseSessionResult)> {
        self.sessions
            .iter()
            .rev()
            .find_map(|session| session.result_for(exercise_id).map(|r| (session, r)))
    }

    /// Whether a deload session containing `exercise_id` occurred on or
    /// after `since`
    #[must_use]
    pub fn deload_since(&self, exercise_id: &str, since: NaiveDate) -> bool {
        self.sessions
            .iter()
            .rev()
            .take_while(|s| s.date >= since)
            .any(|s| s.is_deload && s.result_for(exercise_id).is_some())
    }
}
