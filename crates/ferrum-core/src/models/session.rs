// ABOUTME: Completed session models recording what was actually performed
// ABOUTME: SetResult, ExerciseSessionResult, and CompletedSession definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use super::lift_state::LiftState;
use super::prescription::SetPrescription;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One executed set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetResult {
    /// Reps actually performed
    pub reps: u32,
    /// Load actually used (user's unit)
    pub load: f64,
    /// Observed reps-in-reserve, if the user recorded one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rir: Option<u32>,
    /// Whether the set was completed as a working set
    pub completed: bool,
}

/// All sets performed for one exercise within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSessionResult {
    /// Exercise this result belongs to
    pub exercise_id: String,
    /// Prescription that was in effect for this exercise
    pub prescription: SetPrescription,
    /// Executed sets, in performance order
    pub sets: Vec<SetResult>,
    /// Position of the exercise within the session
    pub order: u32,
}

impl ExerciseSessionResult {
    /// Heaviest load among completed sets, if any set was completed
    #[must_use]
    pub fn top_completed_load(&self) -> Option<f64> {
        self.sets
            .iter()
            .filter(|s| s.completed)
            .map(|s| s.load)
            .fold(None, |best, load| match best {
                Some(b) if b >= load => Some(b),
                _ => Some(load),
            })
    }
}

/// A fully recorded training session
///
/// The `lift_state_snapshots` map holds an immutable copy of each trained
/// lift's state as it was *before* this session, for auditability. Snapshots
/// are copies at time of session, never live references into mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedSession {
    /// Calendar date the session was performed
    pub date: NaiveDate,
    /// Template the session was generated from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<Uuid>,
    /// Session display name
    pub name: String,
    /// Per-exercise results in session order
    pub exercises: Vec<ExerciseSessionResult>,
    /// Wall-clock start of the session
    pub started_at: DateTime<Utc>,
    /// Wall-clock end of the session
    pub ended_at: DateTime<Utc>,
    /// Whether the session was performed as a planned deload
    pub is_deload: bool,
    /// Snapshot of each trained lift's state prior to this session
    #[serde(default)]
    pub lift_state_snapshots: HashMap<String, LiftState>,
    /// Readiness score (0-100) reported for this session
    pub readiness_score: u8,
}

impl CompletedSession {
    /// Result for a specific exercise within this session, if present
    #[must_use]
    pub fn result_for(&self, exercise_id: &str) -> Option<&ExerciseSessionResult> {
        self.exercises.iter().find(|e| e.exercise_id == exercise_id)
    }
}
