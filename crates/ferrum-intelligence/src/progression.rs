// ABOUTME: Load progression policy deciding the next working load for a lift
// ABOUTME: Success/failure counting, double progression, deloads, experience-scaled increments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! Load progression policy
//!
//! Decides the next working load from the most recent session result:
//! hold, increase (double progression), or deload. The policy is a pure
//! function — it returns the updated lift state for the caller to persist
//! and never mutates shared state. Increment scaling is a data-driven
//! lookup over profile attributes and trend, not a type hierarchy.

use crate::config::ProgressionConfig;
use crate::physiological_constants::progression as constants;
use ferrum_core::errors::EngineResult;
use ferrum_core::models::{
    ExerciseSessionResult, ExperienceLevel, LiftState, ProgressionContext, SetPrescription,
    TrendState, WorkoutHistory,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tolerance when comparing recorded loads against the prescribed load
const LOAD_EPSILON: f64 = 1e-6;

/// How the most recent session for a lift is judged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// Every completed set reached the top of the rep range at the
    /// prescribed load
    Success,
    /// All sets within the rep range, but below the top
    PartialSuccess,
    /// At least one set fell below the bottom of the rep range
    Failure,
}

/// The decision taken for the next session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LoadAction {
    /// First attempt at the exercise; the prescription's starting load applies
    FirstSession,
    /// Keep the working load unchanged
    Hold,
    /// Increase the working load
    Increase {
        /// Snapped increment added to the working load
        by: f64,
    },
    /// Reduce the working load to recover from accumulated failures
    Deload,
}

/// A progression decision plus the updated lift state
///
/// The caller is responsible for persisting `state`; the engine writes
/// nothing through shared storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadDecision {
    /// Load to prescribe next (same unit as the inputs)
    pub next_load: f64,
    /// The action behind the load
    pub action: LoadAction,
    /// Updated lift state reflecting the decision
    pub state: LiftState,
}

/// Decides the next working load for a lift
#[derive(Debug, Clone, Default)]
pub struct LoadProgressionPolicy {
    config: ProgressionConfig,
}

impl LoadProgressionPolicy {
    /// Policy with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy with custom settings
    #[must_use]
    pub const fn with_config(config: ProgressionConfig) -> Self {
        Self { config }
    }

    /// Judge a session result against its prescription
    ///
    /// Only completed sets are judged. A session with no completed sets is a
    /// failure: the lifter attempted the exercise and finished nothing.
    #[must_use]
    pub fn classify_session(
        prescription: &SetPrescription,
        result: &ExerciseSessionResult,
        expected_load: f64,
    ) -> SessionOutcome {
        let completed: Vec<_> = result.sets.iter().filter(|s| s.completed).collect();
        if completed.is_empty() {
            return SessionOutcome::Failure;
        }
        if completed
            .iter()
            .any(|s| s.reps < prescription.rep_range_min)
        {
            return SessionOutcome::Failure;
        }
        let all_at_top = completed.iter().all(|s| {
            s.reps >= prescription.rep_range_max && s.load + LOAD_EPSILON >= expected_load
        });
        if all_at_top {
            SessionOutcome::Success
        } else {
            SessionOutcome::PartialSuccess
        }
    }

    /// Compute the next working load for an exercise
    ///
    /// Pure and idempotent: identical inputs produce identical decisions.
    /// The returned state carries the updated failure/success counters and
    /// deload date for the caller to persist.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPrescription` when the prescription
    /// fails validation; the engine refuses to compute from a malformed plan.
    pub fn compute_next_load(
        &self,
        prescription: &SetPrescription,
        lift_state: Option<&LiftState>,
        history: &WorkoutHistory,
        exercise_id: &str,
        ctx: &ProgressionContext<'_>,
    ) -> EngineResult<LoadDecision> {
        prescription.validate()?;

        // First attempt: no state or no recorded session for this exercise.
        let Some(state) = lift_state else {
            return Ok(LoadDecision {
                next_load: prescription.starting_load,
                action: LoadAction::FirstSession,
                state: LiftState::new(exercise_id),
            });
        };
        let Some((_, last_result)) = history.last_result_for(exercise_id) else {
            return Ok(LoadDecision {
                next_load: prescription.starting_load,
                action: LoadAction::FirstSession,
                state: state.clone(),
            });
        };

        let expected_load = if state.last_working_weight > 0.0 {
            state.last_working_weight
        } else {
            prescription.starting_load
        };
        let outcome = Self::classify_session(prescription, last_result, expected_load);
        let mut next = state.clone();

        let (next_load, action) = match outcome {
            SessionOutcome::Failure => {
                next.failure_count += 1;
                next.successful_sessions = 0;
                if next.failure_count >= self.config.failures_before_deload {
                    // Deload is an exact reduction, deliberately not snapped.
                    let deload_load = expected_load * (1.0 - self.config.deload_percentage);
                    next.failure_count = 0;
                    next.mark_deload(ctx.today);
                    (deload_load, LoadAction::Deload)
                } else {
                    (expected_load, LoadAction::Hold)
                }
            }
            SessionOutcome::Success => {
                next.failure_count = 0;
                next.successful_sessions += 1;
                if next.successful_sessions >= self.config.sessions_at_top_before_increase {
                    let by = self.scaled_increment(
                        prescription.load_increment,
                        ctx.profile.experience,
                        state.trend,
                    );
                    next.successful_sessions = 0;
                    (expected_load + by, LoadAction::Increase { by })
                } else {
                    (expected_load, LoadAction::Hold)
                }
            }
            SessionOutcome::PartialSuccess => {
                // Within range but below the top: not a failure, and the
                // double-progression streak is neither advanced nor broken.
                next.failure_count = 0;
                (expected_load, LoadAction::Hold)
            }
        };

        debug!(
            exercise_id,
            ?outcome,
            ?action,
            next_load,
            "computed load decision"
        );

        Ok(LoadDecision {
            next_load,
            action,
            state: next,
        })
    }

    /// Increment magnitude scaled by experience and trend
    ///
    /// Data-driven lookup: multipliers are monotone in experience (a higher
    /// tier never receives a larger increment) and reduce further when the
    /// lift is plateaued or declining. The result snaps to plate-friendly
    /// granularity with a floor of one step.
    #[must_use]
    pub fn scaled_increment(
        &self,
        base_increment: f64,
        experience: ExperienceLevel,
        trend: TrendState,
    ) -> f64 {
        let experience_factor = match experience {
            ExperienceLevel::Beginner => constants::BEGINNER_INCREMENT_MULTIPLIER,
            ExperienceLevel::Intermediate => constants::INTERMEDIATE_INCREMENT_MULTIPLIER,
            ExperienceLevel::Advanced => constants::ADVANCED_INCREMENT_MULTIPLIER,
        };
        let trend_factor = match trend {
            TrendState::Plateau | TrendState::Decreasing => constants::STALLED_TREND_MULTIPLIER,
            TrendState::Insufficient | TrendState::Increasing | TrendState::Stable => 1.0,
        };
        snap_to_granularity(
            base_increment * experience_factor * trend_factor,
            self.config.plate_granularity,
        )
    }
}

/// Snap a raw increment to the nearest plate-friendly multiple, never below
/// one granularity step
fn snap_to_granularity(raw: f64, granularity: f64) -> f64 {
    let steps = (raw / granularity).round().max(1.0);
    steps * granularity
}
